//! Error type for a single provider call.
//!
//! Every variant means the same thing to the resolver: this strategy failed, try the
//! next one. Only the message text survives, as the candidate for the final error.
use thiserror::Error;

/// Failure of one strategy call.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider does not offer this call.
    #[error("{0} is not supported")]
    Unsupported(String),

    /// Transport-level failure (DNS, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// The body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The call succeeded but carried no data.
    #[error("{0}")]
    Empty(String),

    /// The service reported an error in-band.
    #[error("{0}")]
    Rejected(String),
}
