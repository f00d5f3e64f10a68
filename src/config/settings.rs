//! User settings for ql
//!
//! Settings live in a small INI file with a single `[ql]` section:
//!
//! ```ini
//! [ql]
//! ledger_file = /home/me/finances.ledger
//! default_account = checking
//! checking = Assets:Bank:Checking
//! ```
//!
//! `default_account` does not hold an account itself; it names another key in
//! the same section whose value is the account. Only named account keys are
//! followed: `default_account = ledger_file` resolves to no account rather
//! than to the ledger path.
//!
//! A leading `~` in `ledger_file` is expanded when the file is read.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use super::paths::{expand_home, QlPaths};
use crate::error::{QlError, QlResult};

/// Section of the settings file that ql reads and writes
pub const SECTION: &str = "ql";

const LEDGER_FILE_KEY: &str = "ledger_file";
const DEFAULT_ACCOUNT_KEY: &str = "default_account";

/// Persisted settings for ql
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Ledger file that entries are appended to
    pub ledger_file: Option<PathBuf>,

    /// Key of the named account used when none is given on the command line
    pub default_account: Option<String>,

    /// Named account shortcuts (key -> account string)
    pub accounts: BTreeMap<String, String>,
}

impl Settings {
    /// Settings holding only a ledger file, as written by first-run setup
    pub fn with_ledger_file(ledger_file: PathBuf) -> Self {
        Self {
            ledger_file: Some(ledger_file),
            ..Self::default()
        }
    }

    /// Look up a named account
    pub fn account(&self, key: &str) -> Option<&str> {
        self.accounts
            .get(&key.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Follow `default_account` to the account string it names
    ///
    /// Returns `None` when no default is set or when the named key is missing.
    pub fn resolve_default_account(&self) -> Option<&str> {
        let key = self.default_account.as_deref()?;
        let account = self.account(key);
        if account.is_none() {
            log::debug!("default_account points at missing key '{}'", key);
        }
        account
    }

    /// Load settings from disk
    ///
    /// Returns `Ok(None)` if the settings file doesn't exist.
    pub fn load(paths: &QlPaths) -> QlResult<Option<Self>> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(settings_path)
            .map_err(|e| QlError::Io(format!("Failed to read settings file: {}", e)))?;

        log::debug!("loaded settings from {}", settings_path.display());
        Self::parse(&contents).map(Some)
    }

    /// Save settings to disk, replacing whatever the file held before
    pub fn save(&self, paths: &QlPaths) -> QlResult<()> {
        let settings_path = paths.settings_file();

        if let Some(parent) = settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                QlError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(settings_path, self.render())
            .map_err(|e| QlError::Io(format!("Failed to write settings file: {}", e)))?;

        log::info!("saved settings to {}", settings_path.display());
        Ok(())
    }

    /// Parse the INI text of a settings file
    ///
    /// Keys are case-insensitive. Sections other than `[ql]` are skipped.
    pub fn parse(contents: &str) -> QlResult<Self> {
        let mut settings = Self::default();
        let mut section: Option<String> = None;

        for (index, raw_line) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| {
                    QlError::Config(format!("line {}: unterminated section header", line_no))
                })?;
                section = Some(name.trim().to_string());
                continue;
            }

            let Some(current) = section.as_deref() else {
                return Err(QlError::Config(format!(
                    "line {}: option outside of a section",
                    line_no
                )));
            };

            let (key, value) = split_option(line).ok_or_else(|| {
                QlError::Config(format!("line {}: expected 'key = value'", line_no))
            })?;

            if current != SECTION {
                continue;
            }

            settings.set(&key.to_lowercase(), value);
        }

        Ok(settings)
    }

    /// Render settings as INI text
    pub fn render(&self) -> String {
        let mut out = format!("[{}]\n", SECTION);
        if let Some(ledger_file) = &self.ledger_file {
            let _ = writeln!(out, "{} = {}", LEDGER_FILE_KEY, ledger_file.display());
        }
        if let Some(default_account) = &self.default_account {
            let _ = writeln!(out, "{} = {}", DEFAULT_ACCOUNT_KEY, default_account);
        }
        for (key, account) in &self.accounts {
            let _ = writeln!(out, "{} = {}", key, account);
        }
        out.push('\n');
        out
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            // An empty value means the option was never really set
            LEDGER_FILE_KEY => {
                self.ledger_file = (!value.is_empty()).then(|| expand_home(value));
            }
            DEFAULT_ACCOUNT_KEY => {
                self.default_account = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {
                self.accounts.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// Split `key = value` or `key: value` at whichever delimiter comes first
fn split_option(line: &str) -> Option<(&str, &str)> {
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[at + 1..].trim()))
}
