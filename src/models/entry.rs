//! Transaction entry model
//!
//! One entry becomes one block in the ledger file:
//!
//! ```text
//! 2024-01-01 * Coffee Shop
//!     Expenses:Food       $4.50
//!     Assets:Checking
//! ```
//!
//! The posting lines start with a single tab and the amount is separated from
//! the category by two tabs.

use std::fmt;

use chrono::NaiveDate;

use super::amount::Amount;

/// Account prefix added to every category the user types
pub const EXPENSES_PREFIX: &str = "Expenses:";

/// Account prefix added to an account typed at the prompt
pub const ASSETS_PREFIX: &str = "Assets:";

/// Date format used in the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single transaction ready to be appended to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    /// Transaction date
    pub date: NaiveDate,

    /// Payee line text
    pub merchant: String,

    /// Full expense account, including the `Expenses:` prefix
    pub category: String,

    /// Full balancing account
    pub account: String,

    /// Amount posted to the expense account
    pub amount: Amount,
}

impl fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} * {}", self.date.format(DATE_FORMAT), self.merchant)?;
        writeln!(f, "\t{}\t\t${}", self.category, self.amount)?;
        writeln!(f, "\t{}", self.account)
    }
}

/// Build the expense account for a category typed by the user
pub fn expense_category(input: &str) -> String {
    format!("{}{}", EXPENSES_PREFIX, input)
}

/// Build the asset account for an account typed by the user
pub fn asset_account(input: &str) -> String {
    format!("{}{}", ASSETS_PREFIX, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> TransactionEntry {
        TransactionEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            merchant: "Coffee Shop".into(),
            category: expense_category("Food"),
            account: asset_account("Checking"),
            amount: Amount::parse("4.5").unwrap(),
        }
    }

    #[test]
    fn test_ledger_block_format() {
        assert_eq!(
            coffee().to_string(),
            "2024-01-01 * Coffee Shop\n\tExpenses:Food\t\t$4.50\n\tAssets:Checking\n"
        );
    }

    #[test]
    fn test_configured_account_used_verbatim() {
        let mut entry = coffee();
        entry.account = "Liabilities:Visa".into();
        entry.amount = Amount::parse("-12").unwrap();

        let text = entry.to_string();
        assert!(text.ends_with("\t\t$-12.00\n\tLiabilities:Visa\n"));
    }

    #[test]
    fn test_prefix_helpers() {
        assert_eq!(expense_category("Dining:Lunch"), "Expenses:Dining:Lunch");
        assert_eq!(asset_account(""), "Assets:");
    }
}
