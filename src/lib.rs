//! promissoria-cli - Brazilian promissory note generator
//!
//! This library backs the `promissoria` command line tool. It generates
//! Brazilian promissory notes ("notas promissórias"): amounts spelled out in
//! Portuguese, installment series with monthly due dates, terminal previews
//! and printable HTML / JSON / CSV exports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, notes, ids)
//! - `extenso`: Amount-to-words conversion for pt-BR currency
//! - `dates`: Portuguese date formatting
//! - `services`: Business logic (installments, numbering)
//! - `display`: Terminal rendering
//! - `export`: HTML, JSON and CSV exporters
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use promissoria_cli::extenso::amount_to_words;
//! use promissoria_cli::models::Money;
//!
//! let amount = Money::from_reais(2090);
//! assert_eq!(amount_to_words(amount), "DOIS MIL E NOVENTA REAIS");
//! ```

pub mod cli;
pub mod config;
pub mod dates;
pub mod display;
pub mod error;
pub mod export;
pub mod extenso;
pub mod models;
pub mod services;

pub use error::{PromissoriaError, PromissoriaResult};
