//! Error types shared between the resolver and the client.
//!
//! `QuoteError` carries the three resolution failures a caller can observe, plus
//! the serialization failure the client may hit while rendering output. The
//! `Display` text of each variant is exactly what ends up in the `error` field of
//! the JSON line, so none of them renders as an empty string.
use thiserror::Error;

/// Message used when no provider attempt left a more specific one behind.
pub const DATA_NOT_AVAILABLE: &str = "Quote data not available";

/// Unified error type shared by resolver and client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// The query was empty or whitespace-only; no provider was contacted.
    #[error("Missing query")]
    MissingQuery,

    /// No provider returned usable data. Holds the most recent failure message.
    #[error("{0}")]
    ProviderUnavailable(String),

    /// A raw record was obtained but could not be turned into a quote.
    #[error("{0}")]
    NormalizationFailure(String),

    /// Failure while encoding output via serde_json.
    #[error("JSON serialization error: {0}")]
    SerdeJson(String),
}

impl QuoteError {
    /// Build a `ProviderUnavailable` from the last captured message, falling back
    /// to [`DATA_NOT_AVAILABLE`] when nothing (or only blank text) was captured.
    pub fn unavailable(captured: Option<String>) -> Self {
        match captured {
            Some(msg) if !msg.trim().is_empty() => QuoteError::ProviderUnavailable(msg),
            _ => QuoteError::ProviderUnavailable(DATA_NOT_AVAILABLE.to_string()),
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::SerdeJson(err.to_string())
    }
}
