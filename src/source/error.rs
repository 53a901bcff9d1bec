use thiserror::Error;

/// Transport-level failures of a page request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build the request URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to connect or send
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Server answered with a non-success status
    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other source-specific failure
    #[error("Fetch failed: {0}")]
    Other(String),
}

impl FetchError {
    /// Short error type for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Connection { .. } => "connection_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "upstream_status",
            FetchError::Decode(_) => "decode_error",
            FetchError::Other(_) => "other",
        }
    }
}
