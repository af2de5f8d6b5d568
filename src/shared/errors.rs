use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Invalid timestamp '{input}': expected YYYY-MM-DD HH:mm")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Timestamp '{0}' does not exist in the local timezone")]
    NonexistentLocalTime(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to decode descriptors: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BrowserError {
    pub fn invalid_timestamp(input: &str, source: Option<chrono::ParseError>) -> Self {
        BrowserError::InvalidTimestamp {
            input: input.to_string(),
            source,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for BrowserError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => BrowserError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            },
            None => BrowserError::Http(e.to_string()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<reqwasm::Error> for BrowserError {
    fn from(e: reqwasm::Error) -> Self {
        match e {
            reqwasm::Error::SerdeError(e) => BrowserError::Decode(e),
            other => BrowserError::Http(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
