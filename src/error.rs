use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Failures surfaced by the API client.
///
/// Transport and decode failures are caught at the fetch boundary and logged. Only the
/// product detail view treats [`ApiError::NotFound`] differently from the rest.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("product id is empty")]
    Empty,

    #[error("product id `{0}` contains a non-digit character")]
    NotNumeric(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level `{0}`")]
    LogLevel(String),
}
