//!
//! Resilient single-quote resolution.
//!
//! This crate aggregates:
//! - `provider` - the capability model: `Capability`, `Strategy`, `Provider`.
//! - `error` - `ProviderError`, the failure of a single provider call.
//! - `cooldown` - per-provider minimum delay between requests.
//! - `config` - `ResolverConfig` with the cooldown and defaults.
//! - `net` - endpoint hosts and HTTP client constants.
//! - `providers` - concrete HTTP providers (Yahoo Finance, Moneycontrol).
//! - `resolver` - `QuoteResolver`, which walks the providers and normalizes the result.
#![warn(missing_docs)]
pub mod config;
pub mod cooldown;
pub mod error;
pub mod net;
pub mod provider;
pub mod providers;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::ProviderError;
pub use provider::{Capability, FnStrategy, Provider, Strategy};
pub use resolver::QuoteResolver;
