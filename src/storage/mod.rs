//! Storage layer for ql
//!
//! ql persists exactly one thing of its own (the settings file, see
//! [`crate::config::settings`]). Everything else is appended to the user's
//! ledger file.

pub mod ledger;

pub use ledger::LedgerWriter;
