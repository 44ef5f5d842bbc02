//! Rendering of the single JSON line printed on stdout.
//!
//! Success prints the serialized `NormalizedQuote`; any failure prints
//! `{"error": "<message>"}`. Non-ASCII text is written as-is.
use quote_common::{NormalizedQuote, QuoteError};
use serde_json::json;

/// Render a resolution outcome as one JSON line (without the trailing newline).
pub fn render(outcome: &Result<NormalizedQuote, QuoteError>) -> String {
    match outcome {
        Ok(quote) => match serde_json::to_string(quote) {
            Ok(line) => line,
            Err(e) => error_line(&QuoteError::from(e).to_string()),
        },
        Err(err) => error_line(&err.to_string()),
    }
}

/// `{"error": message}` as a JSON line.
pub fn error_line(message: &str) -> String {
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quote_common::QuoteQuery;
    use serde_json::Value;

    #[test]
    fn error_outcome_is_in_band() {
        let line = render(&Err(QuoteError::MissingQuery));
        assert_eq!(line, r#"{"error":"Missing query"}"#);
    }

    #[test]
    fn quote_outcome_has_client_fields() {
        let query = QuoteQuery::new("AAPL").unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap();
        let raw = json!({"symbol": "AAPL", "shortName": "Apple Inc.", "price": 150.0, "currency": "USD"});
        let quote = NormalizedQuote::from_raw(&query, raw.clone(), "USD", at).unwrap();

        let line = render(&Ok(quote));
        assert!(!line.contains('\n'));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["symbol"], "AAPL");
        assert_eq!(value["name"], "Apple Inc.");
        assert_eq!(value["price"], json!(150.0));
        assert_eq!(value["change"], Value::Null);
        assert_eq!(value["volume"], Value::Null);
        assert_eq!(value["marketCap"], Value::Null);
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["raw"], raw);
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let line = error_line("Aktie nicht gefunden: Bayerische Motoren Werke für München");
        assert!(line.contains("für München"));
    }
}
