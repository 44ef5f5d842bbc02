//! Normalized quote record.
//!
//! A `NormalizedQuote` is built once from whatever map-shaped record a provider
//! returned, using the synonym tables in [`crate::fields`]. Fields are private and only
//! exposed through accessors, so a quote cannot change after construction. The serde
//! field names match the JSON line printed by the client.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::QuoteError;
use crate::fields;
use crate::query::QuoteQuery;
use crate::result::Result;

/// Currency assumed when the provider does not report one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Provider-independent quote for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedQuote {
    symbol: String,
    name: String,
    price: Option<Number>,
    #[serde(rename = "change")]
    change_percent: Option<Number>,
    volume: Option<Number>,
    #[serde(rename = "marketCap")]
    market_cap: Option<Number>,
    currency: String,
    timestamp: DateTime<Utc>,
    raw: Value,
}

impl NormalizedQuote {
    /// Normalize `raw` into a quote.
    ///
    /// - query: the resolved query; its text is the last-resort symbol.
    /// - default_currency: used when no currency key is present.
    /// - captured_at: fetch time recorded by the resolver.
    ///
    /// Returns [`QuoteError::NormalizationFailure`] if `raw` is not a JSON object.
    pub fn from_raw(
        query: &QuoteQuery,
        raw: Value,
        default_currency: &str,
        captured_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !raw.is_object() {
            return Err(QuoteError::NormalizationFailure(format!(
                "Unexpected provider record for {}: expected an object, got {}",
                query,
                kind_of(&raw)
            )));
        }

        let symbol = fields::pick_text(&raw, fields::SYMBOL_KEYS)
            .unwrap_or_else(|| query.as_str().to_string());
        let name = fields::pick_text(&raw, fields::NAME_KEYS).unwrap_or_else(|| symbol.clone());
        let currency = fields::pick_text(&raw, fields::CURRENCY_KEYS)
            .unwrap_or_else(|| default_currency.to_string());

        Ok(Self {
            price: fields::pick_number(&raw, fields::PRICE_KEYS),
            change_percent: fields::pick_number(&raw, fields::CHANGE_PERCENT_KEYS),
            volume: fields::pick_number(&raw, fields::VOLUME_KEYS),
            market_cap: fields::pick_number(&raw, fields::MARKET_CAP_KEYS),
            symbol,
            name,
            currency,
            timestamp: captured_at,
            raw,
        })
    }

    /// Ticker symbol, never empty.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Company name, never empty. Falls back to the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last traded price, if reported.
    pub fn price(&self) -> Option<f64> {
        self.price.as_ref().and_then(Number::as_f64)
    }

    /// Session change in percent, if reported.
    pub fn change_percent(&self) -> Option<f64> {
        self.change_percent.as_ref().and_then(Number::as_f64)
    }

    /// Traded volume, if reported.
    pub fn volume(&self) -> Option<&Number> {
        self.volume.as_ref()
    }

    /// Market capitalisation, if reported.
    pub fn market_cap(&self) -> Option<&Number> {
        self.market_cap.as_ref()
    }

    /// Quote currency.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// When the resolver captured the record.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The provider record this quote was built from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl fmt::Display for NormalizedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock: {} ({})", self.name, self.symbol)?;
        match self.price() {
            Some(price) => writeln!(f, "Price: {} {:.2}", self.currency, price)?,
            None => writeln!(f, "Price: N/A")?,
        }
        match self.change_percent() {
            Some(change) => writeln!(f, "Change: {:+.2}%", change)?,
            None => writeln!(f, "Change: N/A")?,
        }
        write!(f, "Last Updated: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
