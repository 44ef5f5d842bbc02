//! Field-name synonyms and the helpers that apply them.
//!
//! Providers disagree on what to call the same thing: Yahoo says `regularMarketPrice`,
//! Moneycontrol says `pricecurrent`, community wrappers say `ltp` or `lastPrice`. Each
//! normalized attribute gets a priority-ordered list of acceptable keys below, and the
//! `pick_*` helpers walk a list and return the first key holding a usable value.
//!
//! The tables are plain data so adding a synonym never touches the lookup code.
use serde_json::{Number, Value};

/// Keys that may hold the ticker symbol.
pub const SYMBOL_KEYS: &[&str] = &["symbol", "ticker", "code", "mc_id", "NSEID", "BSEID"];

/// Keys that may hold the company name.
pub const NAME_KEYS: &[&str] = &[
    "name",
    "longName",
    "long_name",
    "shortName",
    "short_name",
    "longname",
    "shortname",
    "company",
    "companyName",
    "SC_FULLNM",
    "stock_name",
];

/// Keys that may hold the last traded price.
pub const PRICE_KEYS: &[&str] = &[
    "price",
    "ltp",
    "last_price",
    "lastPrice",
    "last_trade_price",
    "regularMarketPrice",
    "currentPrice",
    "pricecurrent",
];

/// Keys that may hold the percentage change of the session.
pub const CHANGE_PERCENT_KEYS: &[&str] = &[
    "change_percent",
    "changePercent",
    "pChange",
    "pct_change",
    "regularMarketChangePercent",
    "pricepercentchange",
];

/// Keys that may hold the traded volume.
pub const VOLUME_KEYS: &[&str] = &["volume", "vol", "tradedVolume", "regularMarketVolume", "VOLUME"];

/// Keys that may hold the market capitalisation.
pub const MARKET_CAP_KEYS: &[&str] = &["marketCap", "market_cap", "MKTCAP"];

/// Keys that may hold the quote currency.
pub const CURRENCY_KEYS: &[&str] = &["currency", "currencyCode", "financialCurrency"];

/// Keys that may identify a search candidate for a follow-up detail fetch.
///
/// Provider-specific ids come before the display symbol: a detail endpoint keyed by
/// an internal id will not understand the ticker.
pub const IDENTIFIER_KEYS: &[&str] = &["id", "mc_id", "sc_id", "code", "symbol"];

/// Return the first non-empty text value found under `keys`.
///
/// Numbers are accepted and rendered as text, since some providers send numeric
/// scrip codes. Non-object records never match.
pub fn pick_text(record: &Value, keys: &[&str]) -> Option<String> {
    let map = record.as_object()?;
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Return the first numeric value found under `keys`.
///
/// Numeric strings such as `"1,234.50"` or `"-0.42%"` are accepted. A key whose value
/// cannot be read as a number is skipped, it never turns into zero.
pub fn pick_number(record: &Value, keys: &[&str]) -> Option<Number> {
    let map = record.as_object()?;
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => parse_number(s),
        _ => None,
    })
}

/// Identifier to pass to a detail fetch, taken from a search candidate.
pub fn extract_identifier(candidate: &Value) -> Option<String> {
    pick_text(candidate, IDENTIFIER_KEYS)
}

/// Parse provider-formatted numeric text.
pub fn parse_number(text: &str) -> Option<Number> {
    let cleaned: String = text
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(i) = cleaned.parse::<i64>() {
        return Some(Number::from(i));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pick_text_respects_priority() {
        let record = json!({"ticker": "TSLA", "symbol": "AAPL"});
        assert_eq!(pick_text(&record, SYMBOL_KEYS).as_deref(), Some("AAPL"));
    }

    #[test]
    fn pick_text_skips_null_and_blank() {
        let record = json!({"name": null, "longName": "  ", "shortName": "Apple Inc."});
        assert_eq!(pick_text(&record, NAME_KEYS).as_deref(), Some("Apple Inc."));
    }

    #[test]
    fn pick_text_renders_numeric_codes() {
        let record = json!({"code": 500325});
        assert_eq!(pick_text(&record, SYMBOL_KEYS).as_deref(), Some("500325"));
    }

    #[test]
    fn pick_text_on_non_object_is_none() {
        assert_eq!(pick_text(&json!(["AAPL"]), SYMBOL_KEYS), None);
        assert_eq!(pick_text(&json!("AAPL"), SYMBOL_KEYS), None);
    }

    #[test]
    fn pick_number_reads_provider_strings() {
        let record = json!({"pricecurrent": "2,931.45", "pricepercentchange": "-0.42%"});
        assert_eq!(pick_number(&record, PRICE_KEYS).and_then(|n| n.as_f64()), Some(2931.45));
        assert_eq!(
            pick_number(&record, CHANGE_PERCENT_KEYS).and_then(|n| n.as_f64()),
            Some(-0.42)
        );
    }

    #[test]
    fn pick_number_skips_unparseable_values() {
        let record = json!({"price": "N/A", "ltp": 101.5});
        assert_eq!(pick_number(&record, PRICE_KEYS).and_then(|n| n.as_f64()), Some(101.5));
    }

    #[test]
    fn pick_number_missing_is_none_not_zero() {
        let record = json!({"symbol": "AAPL", "volume": null, "marketCap": ""});
        assert_eq!(pick_number(&record, VOLUME_KEYS), None);
        assert_eq!(pick_number(&record, MARKET_CAP_KEYS), None);
    }

    #[test]
    fn integers_stay_integers() {
        assert_eq!(parse_number("1,200,300"), Some(Number::from(1_200_300)));
    }

    #[test]
    fn identifier_prefers_provider_id_over_symbol() {
        let candidate = json!({"symbol": "AAPL", "id": "aapl123"});
        assert_eq!(extract_identifier(&candidate).as_deref(), Some("aapl123"));
        let candidate = json!({"symbol": "AAPL"});
        assert_eq!(extract_identifier(&candidate).as_deref(), Some("AAPL"));
        assert_eq!(extract_identifier(&json!({"exchange": "NMS"})), None);
    }
}
