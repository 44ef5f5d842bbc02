//! Quote Client - looks up a single stock quote and prints it to stdout as one JSON
//! line. The query is resolved through Yahoo Finance, with Moneycontrol as a fallback
//! (see `quote_resolver`).
//!
//! Usage example (CLI):
//! ```bash
//! quote AAPL
//! quote "tata motors"
//! ```
//!
//! Failures are reported in-band as `{"error": "..."}` and the process always exits
//! with status 0. Logs go to stderr; set `RUST_LOG=debug` to see every provider call.
#![warn(missing_docs)]
mod args;
mod output;

use crate::args::Args;
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, error, warn};
use quote_common::{NormalizedQuote, QuoteError};
use quote_resolver::{QuoteResolver, ResolverConfig};
use std::io::{self, Write};

fn main() {
    init_logger();
    let line = match Args::try_parse() {
        Ok(args) => output::render(&run(args.query.as_deref())),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            warn!("Invalid arguments: {}", e);
            output::error_line(&usage_message(&e))
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", line) {
        error!("Failed to write output: {}", e);
    }
}

/// Resolve `query` with the default providers.
fn run(query: Option<&str>) -> Result<NormalizedQuote, QuoteError> {
    let Some(query) = query else {
        return Err(QuoteError::MissingQuery);
    };
    let mut resolver = QuoteResolver::with_default_providers(ResolverConfig::default())
        .map_err(|e| QuoteError::unavailable(Some(e.to_string())))?;
    debug!("Resolver config: {:?}", resolver.config());
    resolver.resolve(query)
}

/// First line of a clap error without its `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let text = err.to_string();
    let first = text.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
