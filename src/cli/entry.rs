//! The default ql command: add one entry to the ledger
//!
//! Control flows strictly forward: resolve the configuration, collect the
//! entry, append it, report what was written.

use chrono::NaiveDate;

use crate::config::{ConfigResolver, Overrides};
use crate::error::QlResult;
use crate::services::EntryCollector;
use crate::storage::LedgerWriter;
use crate::terminal::Prompter;

/// Printed by the reserved `--set-acct` flag
pub const SET_ACCT_MESSAGE: &str = "You are a star.";

/// Resolve, collect and append a single entry dated `date`
///
/// Returns the text appended to the ledger.
pub fn add_entry<P: Prompter>(
    resolver: &ConfigResolver,
    overrides: Overrides,
    prompter: &mut P,
    date: NaiveDate,
) -> QlResult<String> {
    let config = resolver.resolve(overrides, prompter)?;

    let entry = EntryCollector::new(config.account).collect(prompter, date)?;

    let writer = LedgerWriter::new(config.ledger_file);
    let text = writer.append(&entry)?;

    prompter.say(&format!(
        "\n\nWrote entry to {}:\n\n{}",
        writer.path().display(),
        text
    ));
    Ok(text)
}
