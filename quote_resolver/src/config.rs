//! Resolver settings.
use std::time::Duration;

use quote_common::quote::DEFAULT_CURRENCY;

use crate::net::{COOLDOWN_MS, REQUEST_TIMEOUT_SECS};

/// Tunables for a `QuoteResolver` and the HTTP providers it is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Minimum delay between two requests to the same provider. Zero disables it.
    pub cooldown: Duration,
    /// Currency reported when the provider record has none.
    pub default_currency: String,
    /// Timeout applied to each HTTP request by the provider clients.
    pub request_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(COOLDOWN_MS),
            default_currency: DEFAULT_CURRENCY.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ResolverConfig {
    /// Replace the cooldown period.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Replace the default currency.
    pub fn with_default_currency(mut self, currency: &str) -> Self {
        self.default_currency = currency.to_string();
        self
    }

    /// Replace the HTTP request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
