//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the resolver, the entry
//! collector and the ledger writer.

pub mod entry;

pub use entry::{add_entry, SET_ACCT_MESSAGE};
