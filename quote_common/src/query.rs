//! Validated search string handed to the resolver.
use std::fmt;

use crate::error::QuoteError;
use crate::result::Result;

/// Ticker symbol or company name typed by the user, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteQuery(String);

impl QuoteQuery {
    /// Trim `raw` and reject it with [`QuoteError::MissingQuery`] if nothing is left.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuoteError::MissingQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
