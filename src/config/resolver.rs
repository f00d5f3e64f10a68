//! Configuration resolution
//!
//! Decides which ledger file to append to and which account to post against.
//!
//! ## Resolution Order
//!
//! 1. No settings file at all: run first-run setup, then continue with the
//!    chosen ledger file as if it had been given on the command line
//! 2. Ledger file: `--file`, otherwise `ledger_file` from the settings file
//! 3. Account: `--account` verbatim, otherwise the account named by
//!    `default_account`, otherwise none (the collector will ask)

use std::path::PathBuf;

use super::paths::QlPaths;
use super::settings::Settings;
use crate::error::{QlError, QlResult};
use crate::setup::SetupWizard;
use crate::terminal::Prompter;

/// Per-run values from the command line; never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub ledger_file: Option<PathBuf>,
    pub account: Option<String>,
}

/// Where and against what account the entry will be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Existing ledger file
    pub ledger_file: PathBuf,
    /// Account used verbatim; `None` means ask the user
    pub account: Option<String>,
}

/// Resolves a [`ResolvedConfig`] from overrides, settings and first-run setup
pub struct ConfigResolver {
    paths: QlPaths,
    wizard: SetupWizard,
}

impl ConfigResolver {
    /// Create a resolver using the process environment for first-run setup
    pub fn new(paths: QlPaths) -> Self {
        let wizard = SetupWizard::new(paths.clone());
        Self { paths, wizard }
    }

    /// Create a resolver with a preconfigured setup wizard
    pub fn with_wizard(paths: QlPaths, wizard: SetupWizard) -> Self {
        Self { paths, wizard }
    }

    /// Resolve the configuration, running first-run setup if needed
    pub fn resolve<P: Prompter>(
        &self,
        mut overrides: Overrides,
        prompter: &mut P,
    ) -> QlResult<ResolvedConfig> {
        if self.wizard.needs_setup() {
            log::info!(
                "no settings at {}, starting first-run setup",
                self.paths.settings_file().display()
            );
            overrides.ledger_file = Some(self.wizard.run(prompter)?);
        }

        self.resolve_from_settings(overrides)
    }

    /// Resolve the configuration without any interaction
    ///
    /// An unreadable settings file counts as an empty one.
    pub fn resolve_from_settings(&self, overrides: Overrides) -> QlResult<ResolvedConfig> {
        let settings = match Settings::load(&self.paths) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                log::warn!(
                    "ignoring settings file {}: {}",
                    self.paths.settings_file().display(),
                    e
                );
                Settings::default()
            }
        };

        let ledger_file = overrides
            .ledger_file
            .or_else(|| settings.ledger_file.clone())
            .ok_or_else(|| {
                QlError::NoLedgerConfigured(self.paths.settings_file().to_path_buf())
            })?;

        let account = overrides
            .account
            .or_else(|| settings.resolve_default_account().map(str::to_string));

        if !ledger_file.is_file() {
            return Err(QlError::LedgerNotFound(ledger_file));
        }

        log::debug!(
            "resolved ledger {} with account {:?}",
            ledger_file.display(),
            account
        );
        Ok(ResolvedConfig {
            ledger_file,
            account,
        })
    }
}
