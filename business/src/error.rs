use reqwest::StatusCode;
use thiserror::Error;

/// Failure of one REST call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
            Self::Decode { .. } => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(String),

    #[error("Invalid API base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}
