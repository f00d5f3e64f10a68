//! ql - quick entry creation for plain-text ledger files
//!
//! ql asks for a merchant, an expense category, an account and an amount,
//! then appends one transaction to a ledger file:
//!
//! ```text
//! 2024-01-01 * Coffee Shop
//!     Expenses:Food       $4.50
//!     Assets:Checking
//! ```
//!
//! # Architecture
//!
//! - `config`: settings file, path handling and per-run resolution
//! - `setup`: first-run selection of the ledger file
//! - `services`: the interactive entry collector
//! - `storage`: the append-only ledger writer
//! - `terminal`: the prompt abstraction and its rustyline implementation
//! - `cli`: glue between the command line and the flows above
//!
//! # Example
//!
//! ```rust,ignore
//! use quick_ledger::config::{ConfigResolver, Overrides, QlPaths};
//! use quick_ledger::terminal::Terminal;
//!
//! let resolver = ConfigResolver::new(QlPaths::new()?);
//! let mut terminal = Terminal::new()?;
//! let today = chrono::Local::now().date_naive();
//! quick_ledger::cli::add_entry(&resolver, Overrides::default(), &mut terminal, today)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;
pub mod terminal;

pub use error::{QlError, QlResult};
