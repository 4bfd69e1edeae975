//! Error types for the fetch pipeline.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for portal requests.
///
/// Authentication rejections and missing markup are not errors: the first
/// is a plain `false` login outcome, the second is recovered with sentinel
/// values inside the extractor.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (timeout, connection refused, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {0}")]
    Status(StatusCode),
}

impl FetchError {
    /// Whether a retry has a chance of changing the outcome.
    ///
    /// Timeouts and connection errors are transient, as is any non-2xx
    /// status. Other transport errors (redirect loops, malformed bodies)
    /// are permanent and surface immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(err) => err.is_timeout() || err.is_connect(),
            FetchError::Status(_) => true,
        }
    }
}
