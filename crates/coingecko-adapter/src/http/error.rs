/*
[INPUT]:  Error sources (validation, HTTP transport, API status, JSON decoding)
[OUTPUT]: Structured error type returned by every client call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ValidationError;

/// Main error type for the CoinGecko adapter
#[derive(Error, Debug)]
pub enum GeckoError {
    /// Request descriptor rejected before any network call
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Path template references a parameter that was not supplied
    #[error("Missing path parameter `{name}` for template {template}")]
    MissingPathParameter { name: String, template: String },

    /// Substituted path segment would be collapsed as `.` or `..`
    #[error("Path segment `{segment}` is not addressable in template {template}")]
    DotPathSegment { segment: String, template: String },

    /// Network-level failure after all retries
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with status >= 300
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Successful response whose body did not match the expected shape
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeckoError {
    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GeckoError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
            GeckoError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the request never left the client because it failed validation
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            GeckoError::InvalidRequest(_)
                | GeckoError::MissingPathParameter { .. }
                | GeckoError::DotPathSegment { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        GeckoError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for CoinGecko operations
pub type Result<T> = std::result::Result<T, GeckoError>;
