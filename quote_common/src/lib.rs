//!
//! Common types and utilities shared by the quote resolver and the CLI client.
//!
//! This crate aggregates:
//! - `error` - unified error type `QuoteError` used across the workspace.
//! - `result` - handy `Result<T, QuoteError>` alias.
//! - `query` - the validated `QuoteQuery` search string.
//! - `fields` - priority-ordered field synonyms and the pick helpers applying them.
//! - `quote` - the `NormalizedQuote` record built from a raw provider response.
#![warn(missing_docs)]
pub mod error;
pub mod fields;
pub mod query;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use query::QuoteQuery;
pub use quote::NormalizedQuote;
pub use result::Result;
