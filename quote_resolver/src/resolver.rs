//! Quote resolution across providers.
//!
//! `QuoteResolver::resolve` turns one query into one [`NormalizedQuote`]. For each
//! provider, in order:
//!
//! 1. search strategies with the query; a list yields its first element as the
//!    candidate, an object is the candidate itself;
//! 2. detail strategies with the candidate's identifier, or the query if it has none;
//! 3. if no detail strategy produced data, combined-quote strategies with the query.
//!
//! The first provider that yields a usable record wins and later ones are not called.
//! Every failed call only leaves its message behind; the last message becomes the
//! error if nobody succeeds.
use chrono::Utc;
use log::{debug, info, warn};
use quote_common::fields;
use quote_common::{NormalizedQuote, QuoteError, QuoteQuery};
use serde_json::Value;

use crate::config::ResolverConfig;
use crate::cooldown::Cooldown;
use crate::error::ProviderError;
use crate::provider::{Capability, Provider};
use crate::providers;

/// Resolves a query to a normalized quote using an ordered list of providers.
pub struct QuoteResolver {
    providers: Vec<Provider>,
    config: ResolverConfig,
    cooldown: Cooldown,
}

impl QuoteResolver {
    /// Create a resolver with no providers.
    pub fn new(config: ResolverConfig) -> Self {
        let cooldown = Cooldown::new(config.cooldown);
        Self {
            providers: Vec::new(),
            config,
            cooldown,
        }
    }

    /// Create a resolver backed by Yahoo Finance, falling back to Moneycontrol.
    pub fn with_default_providers(config: ResolverConfig) -> Result<Self, ProviderError> {
        let list = providers::default_providers(&config)?;
        Ok(list
            .into_iter()
            .fold(Self::new(config), |resolver, provider| resolver.with_provider(provider)))
    }

    /// Append a provider; providers are consulted in insertion order.
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `raw_query` to a quote.
    ///
    /// Errors are [`QuoteError::MissingQuery`] for blank input (no provider is called),
    /// [`QuoteError::ProviderUnavailable`] when no provider produced data and
    /// [`QuoteError::NormalizationFailure`] when the data was not map-shaped.
    pub fn resolve(&mut self, raw_query: &str) -> Result<NormalizedQuote, QuoteError> {
        let query = QuoteQuery::new(raw_query)?;
        let mut session = Session {
            cooldown: &mut self.cooldown,
            last_error: None,
        };

        let mut found = None;
        for provider in &self.providers {
            if let Some(record) = session.fetch(provider, &query) {
                info!("Resolved {} via {}", query, provider.name());
                found = Some(record);
                break;
            }
        }

        let Some(raw) = found else {
            let err = QuoteError::unavailable(session.last_error);
            warn!("No provider returned data for {}: {}", query, err);
            return Err(err);
        };

        let captured_at = Utc::now();
        let quote = NormalizedQuote::from_raw(&query, raw, &self.config.default_currency, captured_at)?;
        debug!("{}", quote);
        Ok(quote)
    }
}

/// State of one `resolve` call: the borrowed cooldown and the last failure message.
struct Session<'a> {
    cooldown: &'a mut Cooldown,
    last_error: Option<String>,
}

impl Session<'_> {
    /// Run search, detail and combined-quote strategies of one provider.
    fn fetch(&mut self, provider: &Provider, query: &QuoteQuery) -> Option<Value> {
        let candidate = self
            .first_usable(provider, Capability::Search, query.as_str())
            .and_then(first_candidate);
        let identifier = candidate
            .as_ref()
            .and_then(fields::extract_identifier)
            .unwrap_or_else(|| query.as_str().to_string());
        debug!("{}: detail identifier for {} is {}", provider.name(), query, identifier);

        if let Some(detail) = self.first_usable(provider, Capability::Detail, &identifier) {
            return Some(detail);
        }
        self.first_usable(provider, Capability::CombinedQuote, query.as_str())
    }

    /// Try the strategies of `capability` in order; return the first usable result.
    fn first_usable(&mut self, provider: &Provider, capability: Capability, arg: &str) -> Option<Value> {
        let strategies = provider.strategies(capability);
        if strategies.is_empty() {
            debug!("{}: no {} strategy", provider.name(), capability);
            return None;
        }

        for strategy in strategies {
            let slept = self.cooldown.wait(provider.name());
            if !slept.is_zero() {
                debug!(
                    "{}: waited {:?} for cooldown ({:?})",
                    provider.name(),
                    slept,
                    self.cooldown.period()
                );
            }
            debug!("{}: {} {}({})", provider.name(), capability, strategy.name(), arg);
            match strategy.call(arg) {
                Ok(value) if is_usable(&value) => return Some(value),
                Ok(_) => {
                    let msg = format!("No results from {} {}", provider.name(), strategy.name());
                    info!("{}", msg);
                    self.last_error = Some(msg);
                }
                Err(e @ ProviderError::Unsupported(_)) => {
                    debug!("{} {}: {}", provider.name(), strategy.name(), e);
                    self.last_error = Some(e.to_string());
                }
                Err(e) => {
                    info!("{} {} failed: {}", provider.name(), strategy.name(), e);
                    self.last_error = Some(e.to_string());
                }
            }
        }
        None
    }
}

/// A search result reduced to one candidate record.
fn first_candidate(result: Value) -> Option<Value> {
    match result {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(_) => Some(result),
        _ => None,
    }
}

/// Whether a provider result carries any data at all.
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
