//! Errors from resource transfer operations

use thiserror::Error;

/// A failed request against a single resource
///
/// Carries the requested URL and, where the server answered, its status and
/// body, so callers can inspect what went wrong without a live response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16, body: String },

    #[error("could not parse {url}: {message}")]
    Parse {
        url: String,
        status: u16,
        body: String,
        message: String,
    },

    #[error("request to {url} failed: {message}")]
    Transport {
        url: String,
        message: String,
        timed_out: bool,
    },

    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// The URL of the failed request
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Parse { url, .. }
            | Self::Transport { url, .. }
            | Self::InvalidUrl { url, .. } => url,
            Self::Client(_) => "",
        }
    }

    /// HTTP status, or 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } | Self::Parse { status, .. } => *status,
            _ => 0,
        }
    }

    /// Raw response body, empty when no response was received
    pub fn body(&self) -> &str {
        match self {
            Self::Status { body, .. } | Self::Parse { body, .. } => body,
            _ => "",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        Self::Transport {
            url: url.to_string(),
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// Result type for resource transfer operations
pub type FetchResult<T> = Result<T, FetchError>;
