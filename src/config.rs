//! Browser configuration
//!
//! Defaults reproduce the stock behavior: 300 ms debounce, local-time form
//! timestamps, pages replacing the list, results applied as they resolve.
//! Native builds can override these through `DATASET_BROWSER_*` variables.

use serde::{Deserialize, Serialize};

use crate::domain::services::{MergePolicy, StalePolicy};
use crate::shared::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_SCROLL_OFFSET_PX};
use crate::shared::utils::TimeBasis;

#[cfg(not(target_arch = "wasm32"))]
use crate::shared::errors::{BrowserError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Prefix for the descriptor endpoint; empty means same origin
    pub api_base_url: String,
    pub debounce_ms: u64,
    pub time_basis: TimeBasis,
    pub merge_policy: MergePolicy,
    pub stale_policy: StalePolicy,
    pub scroll_offset_px: f64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            time_basis: TimeBasis::default(),
            merge_policy: MergePolicy::default(),
            stale_policy: StalePolicy::default(),
            scroll_offset_px: DEFAULT_SCROLL_OFFSET_PX,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BrowserConfig {
    /// Defaults overridden by `DATASET_BROWSER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        use crate::shared::constants::{ENV_API_URL, ENV_DEBOUNCE_MS, ENV_MERGE, ENV_TIME_BASIS};

        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = lookup(ENV_DEBOUNCE_MS) {
            config.debounce_ms = ms
                .trim()
                .parse()
                .map_err(|_| BrowserError::Config(format!("{} must be milliseconds, got '{}'", ENV_DEBOUNCE_MS, ms)))?;
        }
        if let Some(basis) = lookup(ENV_TIME_BASIS) {
            config.time_basis = basis.parse()?;
        }
        if let Some(merge) = lookup(ENV_MERGE) {
            config.merge_policy = merge.parse()?;
        }
        Ok(config)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BrowserConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BrowserConfig::default());
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.merge_policy, MergePolicy::Replace);
        assert_eq!(config.stale_policy, StalePolicy::LastResolvedWins);
    }

    #[test]
    fn test_overrides() {
        let config = BrowserConfig::from_lookup(lookup(&[
            ("DATASET_BROWSER_API_URL", "http://lineage:8080/"),
            ("DATASET_BROWSER_DEBOUNCE_MS", "150"),
            ("DATASET_BROWSER_TIME_BASIS", "utc"),
            ("DATASET_BROWSER_MERGE", "append"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://lineage:8080");
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.time_basis, TimeBasis::Utc);
        assert_eq!(config.merge_policy, MergePolicy::Append);
    }

    #[test]
    fn test_invalid_debounce() {
        let err = BrowserConfig::from_lookup(lookup(&[("DATASET_BROWSER_DEBOUNCE_MS", "soon")])).unwrap_err();
        assert!(matches!(err, BrowserError::Config(_)));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: BrowserConfig = serde_json::from_str(r#"{"merge_policy": "append"}"#).unwrap();
        assert_eq!(config.merge_policy, MergePolicy::Append);
        assert_eq!(config.debounce_ms, 300);
    }
}
