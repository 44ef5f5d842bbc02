//! Moneycontrol provider.
//!
//! The autosuggest endpoint maps a name or ticker to Moneycontrol's scrip id (`sc_id`),
//! which the price feed is keyed by. The feed is tried on NSE first, then BSE. There is
//! no single-call quote.
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::ProviderError;
use crate::net::{MONEYCONTROL_PRICE_HOST, MONEYCONTROL_SEARCH_HOST, https, https_segment};
use crate::provider::{FnStrategy, Provider};
use crate::providers::get_json;

/// Provider name, also used as the cooldown key.
pub const NAME: &str = "moneycontrol";

/// Currency of every NSE/BSE cash quote; the feed does not report one.
pub const CURRENCY: &str = "INR";

/// Exchanges queried by the price feed, in order.
const EXCHANGES: [&str; 2] = ["nse", "bse"];

/// Build the Moneycontrol provider over `http`.
pub fn provider(http: &Client) -> Provider {
    let client = http.clone();
    let mut provider = Provider::new(NAME).with_search(FnStrategy::new("autosuggest", move |q: &str| {
        search(&client, q)
    }));
    for exchange in EXCHANGES {
        let client = http.clone();
        provider = provider.with_detail(FnStrategy::new(format!("pricefeed/{}", exchange), move |sc_id: &str| {
            price_feed(&client, exchange, sc_id)
        }));
    }
    provider
}

fn search(http: &Client, query: &str) -> Result<Value, ProviderError> {
    let body = get_json(
        http,
        &https(MONEYCONTROL_SEARCH_HOST, "/mccode/common/autosuggestion_solr.php"),
        &[("classic", "true"), ("query", query), ("type", "1"), ("format", "json")],
    )?;
    suggestions(body)
}

fn price_feed(http: &Client, exchange: &str, sc_id: &str) -> Result<Value, ProviderError> {
    let path = format!("/pricefeed/{}/equitycash", exchange);
    let url = https_segment(MONEYCONTROL_PRICE_HOST, &path, sc_id)?;
    let body = get_json(http, url.as_str(), &[])?;
    price_record(body)
}

/// Autosuggest entries that carry a scrip id.
///
/// An unknown query still returns one entry ("No result found") without an id.
pub fn suggestions(body: Value) -> Result<Value, ProviderError> {
    let entries: Vec<Value> = match body {
        Value::Array(entries) => entries
            .into_iter()
            .filter(|e| e.get("sc_id").and_then(Value::as_str).is_some_and(|id| !id.is_empty()))
            .collect(),
        _ => Vec::new(),
    };
    if entries.is_empty() {
        return Err(ProviderError::Empty("No results from Moneycontrol search".to_string()));
    }
    Ok(Value::Array(entries))
}

/// The `data` block of a price feed response with `code == "200"`, with
/// `currency` set to INR when the block has none.
pub fn price_record(mut body: Value) -> Result<Value, ProviderError> {
    let code = match &body["code"] {
        Value::String(code) => code.clone(),
        Value::Number(code) => code.to_string(),
        _ => String::new(),
    };
    if code != "200" {
        let message = body["message"].as_str().unwrap_or("unexpected response");
        return Err(ProviderError::Rejected(format!("Moneycontrol price feed: {}", message)));
    }
    match body.get_mut("data").map(Value::take) {
        Some(Value::Object(mut data)) => {
            data.entry("currency")
                .or_insert_with(|| Value::String(CURRENCY.to_string()));
            Ok(Value::Object(data))
        }
        _ => Err(ProviderError::Empty("Moneycontrol data not available".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quote_common::{NormalizedQuote, QuoteQuery};
    use serde_json::json;

    use crate::config::ResolverConfig;

    #[test]
    fn suggestions_need_a_scrip_id() {
        let body = json!([
            {"link_src": "https://www.moneycontrol.com/india/stockpricequote/refineries/relianceindustries/RI", "pdt_dis_nm": "Reliance Industries", "sc_id": "RI", "stock_name": "Reliance Industries"},
            {"pdt_dis_nm": "No result found", "sc_id": ""}
        ]);
        let entries = suggestions(body).unwrap();
        assert_eq!(entries.as_array().map(Vec::len), Some(1));
        assert_eq!(entries[0]["sc_id"], "RI");
    }

    #[test]
    fn no_suggestions_is_an_error() {
        let err = suggestions(json!([{"pdt_dis_nm": "No result found"}])).unwrap_err();
        assert_eq!(err.to_string(), "No results from Moneycontrol search");
        assert!(suggestions(json!({"error": "bad"})).is_err());
    }

    #[test]
    fn price_record_returns_data() {
        let body = json!({"code": "200", "message": "Success", "data": {
            "SC_FULLNM": "Reliance Industries",
            "NSEID": "RELIANCE",
            "pricecurrent": "2931.45",
            "pricepercentchange": "0.85",
            "VOLUME": "5123456"
        }});
        let data = price_record(body).unwrap();
        assert_eq!(data["NSEID"], "RELIANCE");
    }

    #[test]
    fn price_feed_quotes_are_in_rupees() {
        let body = json!({"code": "200", "data": {"NSEID": "RELIANCE", "pricecurrent": "2931.45"}});
        let data = price_record(body).unwrap();
        assert_eq!(data["currency"], "INR");

        let query = QuoteQuery::new("reliance").unwrap();
        let config = ResolverConfig::default();
        let quote = NormalizedQuote::from_raw(&query, data, &config.default_currency, Utc::now()).unwrap();
        assert_eq!(quote.symbol(), "RELIANCE");
        assert_eq!(quote.price(), Some(2931.45));
        assert_eq!(quote.currency(), "INR");
    }

    #[test]
    fn reported_currency_is_kept() {
        let body = json!({"code": "200", "data": {"NSEID": "X", "currency": "USD"}});
        assert_eq!(price_record(body).unwrap()["currency"], "USD");
    }

    #[test]
    fn price_record_rejects_failed_code() {
        let body = json!({"code": "404", "message": "Invalid scid", "data": null});
        assert_eq!(
            price_record(body).unwrap_err().to_string(),
            "Moneycontrol price feed: Invalid scid"
        );
    }

    #[test]
    fn price_record_without_data_is_empty() {
        let err = price_record(json!({"code": 200, "data": null})).unwrap_err();
        assert_eq!(err.to_string(), "Moneycontrol data not available");
    }
}
