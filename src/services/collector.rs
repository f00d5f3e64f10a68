//! Entry collector
//!
//! Walks the user through merchant, category, account and amount and builds
//! a [`TransactionEntry`]. Bad input is retried in place: a malformed amount
//! re-asks only the amount, and a failed read during the free-text prompts
//! replays merchant, category and account. Cancellation ends the run.

use chrono::NaiveDate;

use crate::error::{QlError, QlResult};
use crate::models::{asset_account, expense_category, Amount, TransactionEntry};
use crate::terminal::{PromptError, Prompter};

pub const MERCHANT_PROMPT: &str = "Merchant name:\n\t";
pub const CATEGORY_PROMPT: &str = "Expense category:\n\tExpenses:";
pub const ACCOUNT_PROMPT: &str = "Account:\n\tAssets:";
pub const AMOUNT_PROMPT: &str = "Amount: $";

const SYNTAX_ERROR: &str = "Syntax error.";
const AMOUNT_ERROR: &str = "Amount must be a number.";

/// Free-text fields collected before the amount
#[derive(Debug, Clone, PartialEq, Eq)]
struct Details {
    merchant: String,
    category: String,
    account: String,
}

/// Collects one transaction entry interactively
#[derive(Debug, Clone, Default)]
pub struct EntryCollector {
    /// Account resolved from the command line or settings; skips the account prompt
    preset_account: Option<String>,
}

impl EntryCollector {
    /// Create a collector, optionally with an account that is used verbatim
    pub fn new(preset_account: Option<String>) -> Self {
        Self { preset_account }
    }

    /// Run the prompt chain for an entry dated `date`
    pub fn collect<P: Prompter>(
        &self,
        prompter: &mut P,
        date: NaiveDate,
    ) -> QlResult<TransactionEntry> {
        let details = self.collect_details(prompter)?;
        let amount = collect_amount(prompter)?;

        Ok(TransactionEntry {
            date,
            merchant: details.merchant,
            category: details.category,
            account: details.account,
            amount,
        })
    }

    fn collect_details<P: Prompter>(&self, prompter: &mut P) -> QlResult<Details> {
        loop {
            match self.ask_details(prompter) {
                Ok(details) => return Ok(details),
                Err(PromptError::Cancelled) => return Err(QlError::Cancelled),
                Err(PromptError::Failed(reason)) => {
                    log::debug!("replaying entry details after read failure: {}", reason);
                    prompter.say(SYNTAX_ERROR);
                }
            }
        }
    }

    fn ask_details<P: Prompter>(&self, prompter: &mut P) -> Result<Details, PromptError> {
        let merchant = prompter.ask(MERCHANT_PROMPT)?;
        let category = expense_category(&prompter.ask(CATEGORY_PROMPT)?);
        let account = match &self.preset_account {
            Some(account) => account.clone(),
            None => asset_account(&prompter.ask(ACCOUNT_PROMPT)?),
        };

        Ok(Details {
            merchant,
            category,
            account,
        })
    }
}

fn collect_amount<P: Prompter>(prompter: &mut P) -> QlResult<Amount> {
    loop {
        let input = match prompter.ask(AMOUNT_PROMPT) {
            Ok(input) => input,
            Err(PromptError::Cancelled) => return Err(QlError::Cancelled),
            Err(PromptError::Failed(reason)) => {
                log::debug!("amount read failed: {}", reason);
                prompter.say(AMOUNT_ERROR);
                continue;
            }
        };

        match Amount::parse(&input) {
            Ok(amount) => return Ok(amount),
            Err(e) => {
                log::debug!("rejected amount: {}", e);
                prompter.say(AMOUNT_ERROR);
            }
        }
    }
}
