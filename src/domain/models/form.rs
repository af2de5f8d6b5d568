use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::utils::{format_timestamp, is_timestamp_format, TimeBasis};

/// Values of the search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub text: String,
    /// `YYYY-MM-DD HH:mm`
    pub timestamp: String,
}

impl SearchForm {
    /// Empty text, timestamp set to `now`
    pub fn reset_at(now: DateTime<Utc>, basis: TimeBasis) -> Self {
        Self {
            text: String::new(),
            timestamp: format_timestamp(now, basis),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Clearing the search text propagates without debounce
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn has_valid_timestamp_shape(&self) -> bool {
        is_timestamp_format(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_at() {
        let now = DateTime::from_timestamp(0, 0).unwrap();
        let form = SearchForm::reset_at(now, TimeBasis::Utc);
        assert_eq!(form.text, "");
        assert_eq!(form.timestamp, "1970-01-01 00:00");
        assert!(form.is_blank());
        assert!(form.has_valid_timestamp_shape());
    }

    #[test]
    fn test_builders() {
        let form = SearchForm::default().with_text("  ").with_timestamp("2023-01-15 10:30");
        assert!(form.is_blank());
        assert!(!form.clone().with_text("orders").is_blank());
        assert!(form.has_valid_timestamp_shape());
    }
}
