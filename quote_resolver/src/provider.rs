//! Provider capability model.
//!
//! Market-data clients expose an unstable surface: the call that searches might be
//! there under one name, under another, or not at all. Instead of probing at runtime, a
//! `Provider` lists the calls it offers for each [`Capability`] as an ordered set of
//! [`Strategy`] values. The resolver walks a list in order and uses the first strategy
//! that returns usable data. A missing capability is an empty list.
use serde_json::Value;
use strum_macros::Display;

use crate::error::ProviderError;

/// Kind of call a strategy performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Look up candidates for a query. Argument: the query text.
    Search,
    /// Fetch quote details for an identifier taken from a search candidate.
    Detail,
    /// Single-call quote for the raw query text. Last resort.
    CombinedQuote,
}

/// One named call offered by a provider.
pub trait Strategy {
    /// Name used in logs, e.g. `search@query2`.
    fn name(&self) -> &str;

    /// Perform the call with `arg` and return the provider's untyped result.
    fn call(&self, arg: &str) -> Result<Value, ProviderError>;
}

/// Adapter turning a closure into a [`Strategy`].
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&str) -> Result<Value, ProviderError>,
{
    /// Wrap `f` under `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&str) -> Result<Value, ProviderError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, arg: &str) -> Result<Value, ProviderError> {
        (self.f)(arg)
    }
}

/// A market-data source and the calls it offers, in priority order per capability.
pub struct Provider {
    name: String,
    search: Vec<Box<dyn Strategy>>,
    detail: Vec<Box<dyn Strategy>>,
    combined_quote: Vec<Box<dyn Strategy>>,
}

impl Provider {
    /// Create a provider that offers nothing yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: Vec::new(),
            detail: Vec::new(),
            combined_quote: Vec::new(),
        }
    }

    /// Append a search strategy.
    pub fn with_search(mut self, strategy: impl Strategy + 'static) -> Self {
        self.search.push(Box::new(strategy));
        self
    }

    /// Append a detail strategy.
    pub fn with_detail(mut self, strategy: impl Strategy + 'static) -> Self {
        self.detail.push(Box::new(strategy));
        self
    }

    /// Append a combined-quote strategy.
    pub fn with_combined_quote(mut self, strategy: impl Strategy + 'static) -> Self {
        self.combined_quote.push(Box::new(strategy));
        self
    }

    /// Provider name, also the cooldown key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strategies offered for `capability`, in the order they should be tried.
    pub fn strategies(&self, capability: Capability) -> &[Box<dyn Strategy>] {
        match capability {
            Capability::Search => &self.search,
            Capability::Detail => &self.detail,
            Capability::CombinedQuote => &self.combined_quote,
        }
    }

    /// Whether the provider offers at least one strategy for `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        !self.strategies(capability).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strategies_keep_insertion_order() {
        let provider = Provider::new("test")
            .with_detail(FnStrategy::new("get_stock_quote", |_| Ok(json!({}))))
            .with_detail(FnStrategy::new("get_quote", |_| Ok(json!({}))));
        let names: Vec<&str> = provider
            .strategies(Capability::Detail)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, ["get_stock_quote", "get_quote"]);
    }

    #[test]
    fn absent_capability_is_empty() {
        let provider = Provider::new("test").with_search(FnStrategy::new("search", |q| Ok(json!([q]))));
        assert!(provider.supports(Capability::Search));
        assert!(!provider.supports(Capability::CombinedQuote));
        assert!(provider.strategies(Capability::Detail).is_empty());
    }

    #[test]
    fn fn_strategy_passes_argument() {
        let strategy = FnStrategy::new("echo", |arg| Ok(json!({"symbol": arg})));
        assert_eq!(strategy.call("INFY").unwrap(), json!({"symbol": "INFY"}));
    }

    #[test]
    fn capability_display_is_snake_case() {
        assert_eq!(Capability::CombinedQuote.to_string(), "combined_quote");
        assert_eq!(Capability::Search.to_string(), "search");
    }
}
