//! Concrete HTTP providers.
//!
//! - `yahoo` - Yahoo Finance JSON API, the primary source.
//! - `moneycontrol` - Moneycontrol autosuggest and price feed, the fallback for Indian
//!   listings.
//!
//! Each module builds a [`Provider`] out of closures over a shared blocking
//! `reqwest` client. The response-shaping steps are plain functions over
//! `serde_json::Value` so they can be checked without the network.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::config::ResolverConfig;
use crate::error::ProviderError;
use crate::net::USER_AGENT;
use crate::provider::Provider;

pub mod moneycontrol;
pub mod yahoo;

/// Build the blocking HTTP client shared by the providers.
pub fn http_client(timeout: Duration) -> Result<Client, ProviderError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Providers in fallback order: Yahoo Finance, then Moneycontrol.
pub fn default_providers(config: &ResolverConfig) -> Result<Vec<Provider>, ProviderError> {
    let http = http_client(config.request_timeout)?;
    Ok(vec![yahoo::provider(&http), moneycontrol::provider(&http)])
}

/// GET `url` with `query` parameters and decode the body as JSON.
pub(crate) fn get_json(http: &Client, url: &str, query: &[(&str, &str)]) -> Result<Value, ProviderError> {
    debug!("GET {} {:?}", url, query);
    let response = http
        .get(url)
        .query(query)
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let text = response.text()?;
    Ok(serde_json::from_str(&text)?)
}
