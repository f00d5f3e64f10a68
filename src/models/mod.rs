//! Core data models for ql
//!
//! A transaction entry and the amount it posts. Both are built by the entry
//! collector and consumed once by the ledger writer.

pub mod amount;
pub mod entry;

pub use amount::{Amount, AmountParseError};
pub use entry::{asset_account, expense_category, TransactionEntry};
