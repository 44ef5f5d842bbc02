//! Yahoo Finance provider.
//!
//! Search goes through `/v1/finance/search` on each API host. Details come from
//! `/v7/finance/quote`, which often demands a crumb and answers 401, so the chart
//! endpoint's `meta` block is tried next; it carries price, volume, currency and names
//! without authentication. The chart endpoint on the raw query is also the
//! combined-quote fallback.
use reqwest::blocking::Client;
use serde_json::{Number, Value};

use crate::error::ProviderError;
use crate::net::{YAHOO_HOSTS, https, https_segment};
use crate::provider::{FnStrategy, Provider};
use crate::providers::get_json;

/// Provider name, also used as the cooldown key.
pub const NAME: &str = "yahoo";

/// Build the Yahoo Finance provider over `http`.
pub fn provider(http: &Client) -> Provider {
    let mut provider = Provider::new(NAME);
    for host in YAHOO_HOSTS {
        let client = http.clone();
        provider = provider.with_search(FnStrategy::new(format!("search@{}", host), move |q: &str| {
            search(&client, host, q)
        }));
    }

    let client = http.clone();
    let quote_host = YAHOO_HOSTS[0];
    provider = provider.with_detail(FnStrategy::new("quote", move |symbol: &str| {
        quote(&client, quote_host, symbol)
    }));
    for host in YAHOO_HOSTS {
        let client = http.clone();
        provider = provider.with_detail(FnStrategy::new(format!("chart@{}", host), move |symbol: &str| {
            chart(&client, host, symbol)
        }));
    }

    let client = http.clone();
    provider.with_combined_quote(FnStrategy::new("chart", move |q: &str| {
        chart(&client, YAHOO_HOSTS[1], q)
    }))
}

fn search(http: &Client, host: &str, query: &str) -> Result<Value, ProviderError> {
    let body = get_json(
        http,
        &https(host, "/v1/finance/search"),
        &[("q", query), ("quotesCount", "6"), ("newsCount", "0")],
    )?;
    search_hits(body)
}

fn quote(http: &Client, host: &str, symbol: &str) -> Result<Value, ProviderError> {
    let body = get_json(http, &https(host, "/v7/finance/quote"), &[("symbols", symbol)])
        .map_err(without_crumb)?;
    quote_record(body)
}

/// The quote endpoint answers 401/403 to clients without a session crumb; for this
/// client that means the call is not available at all.
pub fn without_crumb(err: ProviderError) -> ProviderError {
    match err {
        ProviderError::Status { status: 401 | 403, .. } => {
            ProviderError::Unsupported("Yahoo quote without a crumb".to_string())
        }
        other => other,
    }
}

fn chart(http: &Client, host: &str, symbol: &str) -> Result<Value, ProviderError> {
    let url = https_segment(host, "/v8/finance/chart", symbol)?;
    let body = get_json(http, url.as_str(), &[("range", "1d"), ("interval", "1d")])?;
    chart_record(body)
}

/// Search hits that carry a symbol, as a JSON array.
pub fn search_hits(body: Value) -> Result<Value, ProviderError> {
    let hits: Vec<Value> = match body {
        Value::Object(mut map) => match map.remove("quotes") {
            Some(Value::Array(quotes)) => quotes
                .into_iter()
                .filter(|q| q.get("symbol").and_then(Value::as_str).is_some())
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    if hits.is_empty() {
        return Err(ProviderError::Empty("No results from Yahoo search".to_string()));
    }
    Ok(Value::Array(hits))
}

/// First record of a `/v7/finance/quote` response.
pub fn quote_record(body: Value) -> Result<Value, ProviderError> {
    let response = &body["quoteResponse"];
    if let Some(description) = response["error"]["description"].as_str() {
        return Err(ProviderError::Rejected(description.to_string()));
    }
    match response["result"].get(0) {
        Some(record) if record.is_object() => Ok(record.clone()),
        _ => Err(ProviderError::Empty("Yahoo quote returned no result".to_string())),
    }
}

/// The `meta` block of a `/v8/finance/chart` response.
///
/// The block has no change percentage of its own; when missing it is derived from
/// `chartPreviousClose` (or `previousClose`) and added as `regularMarketChangePercent`.
pub fn chart_record(body: Value) -> Result<Value, ProviderError> {
    let chart = &body["chart"];
    if let Some(description) = chart["error"]["description"].as_str() {
        return Err(ProviderError::Rejected(description.to_string()));
    }
    let Some(Value::Object(mut meta)) = chart["result"].get(0).map(|r| r["meta"].clone()) else {
        return Err(ProviderError::Empty("Yahoo chart returned no result".to_string()));
    };

    if !meta.contains_key("regularMarketChangePercent") {
        let price = meta.get("regularMarketPrice").and_then(Value::as_f64);
        let previous = meta
            .get("chartPreviousClose")
            .or_else(|| meta.get("previousClose"))
            .and_then(Value::as_f64);
        if let (Some(price), Some(previous)) = (price, previous) {
            if previous > 0.0 {
                if let Some(pct) = Number::from_f64((price - previous) / previous * 100.0) {
                    meta.insert("regularMarketChangePercent".to_string(), Value::Number(pct));
                }
            }
        }
    }
    Ok(Value::Object(meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_keeps_hits_with_symbols() {
        let body = json!({
            "count": 3,
            "quotes": [
                {"symbol": "AAPL", "shortname": "Apple Inc.", "quoteType": "EQUITY"},
                {"shortname": "no symbol"},
                {"symbol": "AAPL.MX", "quoteType": "EQUITY"}
            ],
            "news": []
        });
        let hits = search_hits(body).unwrap();
        assert_eq!(hits.as_array().map(Vec::len), Some(2));
        assert_eq!(hits[0]["symbol"], "AAPL");
    }

    #[test]
    fn empty_search_is_an_error() {
        let err = search_hits(json!({"quotes": []})).unwrap_err();
        assert_eq!(err.to_string(), "No results from Yahoo search");
    }

    #[test]
    fn quote_takes_first_result() {
        let body = json!({"quoteResponse": {"result": [{"symbol": "MSFT", "regularMarketPrice": 410.2}], "error": null}});
        assert_eq!(quote_record(body).unwrap()["symbol"], "MSFT");
    }

    #[test]
    fn quote_surfaces_in_band_error() {
        let body = json!({"quoteResponse": {"result": null, "error": {"code": "Unauthorized", "description": "Invalid Crumb"}}});
        assert_eq!(quote_record(body).unwrap_err().to_string(), "Invalid Crumb");
    }

    #[test]
    fn unauthorized_quote_is_unsupported() {
        let err = without_crumb(ProviderError::Status {
            url: "https://query2.finance.yahoo.com/v7/finance/quote".to_string(),
            status: 401,
        });
        assert!(matches!(err, ProviderError::Unsupported(_)));
        assert_eq!(err.to_string(), "Yahoo quote without a crumb is not supported");

        let err = without_crumb(ProviderError::Status { url: String::new(), status: 500 });
        assert!(matches!(err, ProviderError::Status { status: 500, .. }));
    }

    #[test]
    fn chart_meta_gets_change_percent() {
        let body = json!({"chart": {"result": [{"meta": {
            "symbol": "AAPL",
            "currency": "USD",
            "regularMarketPrice": 110.0,
            "chartPreviousClose": 100.0,
            "regularMarketVolume": 1000
        }}], "error": null}});
        let meta = chart_record(body).unwrap();
        let pct = meta["regularMarketChangePercent"].as_f64().unwrap();
        assert!((pct - 10.0).abs() < 1e-9);
        assert_eq!(meta["currency"], "USD");
    }

    #[test]
    fn chart_without_previous_close_has_no_change() {
        let body = json!({"chart": {"result": [{"meta": {"symbol": "AAPL", "regularMarketPrice": 110.0}}]}});
        let meta = chart_record(body).unwrap();
        assert!(meta.get("regularMarketChangePercent").is_none());
    }

    #[test]
    fn chart_not_found() {
        let body = json!({"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}});
        assert_eq!(
            chart_record(body).unwrap_err().to_string(),
            "No data found, symbol may be delisted"
        );
    }
}
