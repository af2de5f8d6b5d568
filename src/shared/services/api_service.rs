#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::BrowserConfig;
use crate::domain::models::{PersistedDatasetDescriptor, SearchRequest};
use crate::domain::services::DescriptorSource;
use crate::shared::constants::DESCRIPTORS_ENDPOINT;
use crate::shared::errors::{BrowserError, Result};

/// Base URL used by native builds when none is configured
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_NATIVE_API_URL: &str = "http://localhost:8080";

// API Service for the lineage REST endpoints
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    /// Same-origin requests in the browser, `DEFAULT_NATIVE_API_URL` natively
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let base_url = String::new();
        #[cfg(not(target_arch = "wasm32"))]
        let base_url = DEFAULT_NATIVE_API_URL.to_string();
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Self {
        if config.api_base_url.is_empty() {
            Self::new()
        } else {
            Self::with_base_url(config.api_base_url.clone())
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Descriptor endpoint URL with the request encoded as query parameters
    pub fn descriptors_url(&self, request: &SearchRequest) -> String {
        let query = request
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url(DESCRIPTORS_ENDPOINT), query)
    }

    // Generic GET request
    #[cfg(target_arch = "wasm32")]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url).send().await?;

        if !response.ok() {
            return Err(BrowserError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // Generic GET request
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_lineage_descriptors(&self, request: &SearchRequest) -> Result<Vec<PersistedDatasetDescriptor>> {
        self.get(&self.descriptors_url(request)).await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DescriptorSource for ApiService {
    async fn lineage_descriptors(&self, request: &SearchRequest) -> Result<Vec<PersistedDatasetDescriptor>> {
        self.get_lineage_descriptors(request).await
    }
}
