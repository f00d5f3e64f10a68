//! First-run setup
//!
//! Picks a ledger file for a user who has never run ql before.

pub mod wizard;

pub use wizard::{parse_yes_no, SetupWizard};
