//! Shared networking constants used by the HTTP providers.
use reqwest::Url;

use crate::error::ProviderError;

/// User agent sent with every provider request. Both services reject bare clients.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Per-request timeout applied by the HTTP client, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum delay between two requests to the same provider, in milliseconds.
pub const COOLDOWN_MS: u64 = 2000;

/// Yahoo Finance API hosts, tried in this order.
pub const YAHOO_HOSTS: [&str; 2] = ["query2.finance.yahoo.com", "query1.finance.yahoo.com"];

/// Moneycontrol autosuggest host.
pub const MONEYCONTROL_SEARCH_HOST: &str = "www.moneycontrol.com";

/// Moneycontrol price feed host.
pub const MONEYCONTROL_PRICE_HOST: &str = "priceapi.moneycontrol.com";

/// Helper to build an `https` URL from a host and a path like "/v1/finance/search".
pub fn https(host: &str, path: &str) -> String {
    format!("https://{}{}", host, path)
}

/// Build an `https` URL from a host, a base path and one caller-supplied trailing
/// segment. The segment is percent-encoded, so `#`, `?` and `/` inside it stay part
/// of the path.
pub fn https_segment(host: &str, path: &str, segment: &str) -> Result<Url, ProviderError> {
    let base = https(host, path);
    let mut url = Url::parse(&base).map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidUrl(format!("{} cannot take path segments", base)))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}
