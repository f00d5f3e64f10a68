//! First-run setup
//!
//! Runs when no settings file exists. Offers the ledger file named by the
//! `LEDGER` or `LEDGER_FILE` environment variable, falls back to asking for a
//! path, and saves the chosen path as the only option of a fresh settings
//! file.

use std::path::PathBuf;

use crate::config::paths::{expand_home, QlPaths};
use crate::config::settings::Settings;
use crate::error::{QlError, QlResult};
use crate::terminal::Prompter;

/// Environment variables consulted for a ledger file, highest priority first
pub const LEDGER_ENV_VARS: [&str; 2] = ["LEDGER", "LEDGER_FILE"];

pub const CONFIRM_PROMPT: &str = "Use this file for ql? [y/n] ";
pub const MANUAL_PROMPT: &str = "Ledger file location: ";

const YES_NO_ERROR: &str = "Must enter yes or no.";

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// The first-run setup flow
pub struct SetupWizard {
    paths: QlPaths,
    env: EnvLookup,
}

impl SetupWizard {
    /// Create a setup wizard reading the process environment
    pub fn new(paths: QlPaths) -> Self {
        Self::with_env(paths, |key| std::env::var(key).ok())
    }

    /// Create a setup wizard with a custom environment lookup
    pub fn with_env<F>(paths: QlPaths, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        Self {
            paths,
            env: Box::new(env),
        }
    }

    /// Check if setup is needed (first run)
    pub fn needs_setup(&self) -> bool {
        !self.paths.is_initialized()
    }

    /// Ledger file suggested by the environment, if any
    ///
    /// Unset and empty variables are skipped.
    pub fn env_candidate(&self) -> Option<PathBuf> {
        LEDGER_ENV_VARS.iter().find_map(|&key| {
            (self.env)(key)
                .filter(|value| !value.is_empty())
                .map(|value| {
                    log::debug!("found ledger candidate in ${}", key);
                    expand_home(&value)
                })
        })
    }

    /// Choose a ledger file and persist it
    ///
    /// An unrecognised answer to the confirmation question starts the whole
    /// flow over, including the environment check.
    pub fn run<P: Prompter>(&self, prompter: &mut P) -> QlResult<PathBuf> {
        let ledger_file = loop {
            let mut chosen = None;

            if let Some(candidate) = self.env_candidate() {
                prompter.say(&format!(
                    "\nLooks like your default ledger file is\n{}\n",
                    candidate.display()
                ));
                let answer = prompter.ask(CONFIRM_PROMPT)?;
                match parse_yes_no(&answer) {
                    Some(true) => chosen = Some(candidate),
                    Some(false) => {}
                    None => {
                        prompter.say(YES_NO_ERROR);
                        continue;
                    }
                }
            }

            let path = match chosen {
                Some(path) => path,
                None => ask_manual_path(prompter)?,
            };
            break path;
        };

        if !ledger_file.is_file() {
            return Err(QlError::LedgerNotFound(ledger_file));
        }

        Settings::with_ledger_file(ledger_file.clone()).save(&self.paths)?;
        log::info!("first-run setup chose {}", ledger_file.display());
        Ok(ledger_file)
    }
}

fn ask_manual_path<P: Prompter>(prompter: &mut P) -> QlResult<PathBuf> {
    let input = prompter.ask(MANUAL_PROMPT)?;
    let path = expand_home(input.trim());
    if !path.is_file() {
        return Err(QlError::ManualPathNotFound(path));
    }
    Ok(path)
}

/// Interpret a yes/no answer
///
/// Recognises `y, yes, t, true, on, 1` and `n, no, f, false, off, 0` in any
/// case. Returns `None` for anything else.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
