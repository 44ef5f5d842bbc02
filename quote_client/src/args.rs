//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Print one stock quote as a JSON line", long_about = None)]
pub struct Args {
    /// Ticker symbol or company name to look up (quote multi-word names).
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,
}
