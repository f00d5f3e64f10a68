//! Append-only ledger writer
//!
//! The ledger file belongs to the user. ql never reads it back; it only opens
//! it in append mode and writes one complete block per entry.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{QlError, QlResult};
use crate::models::TransactionEntry;

/// Appends entries to a ledger file
#[derive(Debug, Clone)]
pub struct LedgerWriter {
    path: PathBuf,
}

impl LedgerWriter {
    /// Create a writer for an existing ledger file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry and return the exact text written
    ///
    /// The file is never created; a missing file is reported as such. The
    /// block goes out in a single write so a failure leaves no partial entry.
    pub fn append(&self, entry: &TransactionEntry) -> QlResult<String> {
        let text = entry.to_string();

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.classify(e))?;

        file.write_all(text.as_bytes()).map_err(|e| self.classify(e))?;
        file.flush().map_err(|e| self.classify(e))?;

        log::info!("appended {} bytes to {}", text.len(), self.path.display());
        Ok(text)
    }

    fn classify(&self, err: std::io::Error) -> QlError {
        match err.kind() {
            ErrorKind::PermissionDenied => QlError::PermissionDenied(self.path.clone()),
            ErrorKind::NotFound => QlError::LedgerNotFound(self.path.clone()),
            _ => QlError::Io(format!("Failed to write {}: {}", self.path.display(), err)),
        }
    }
}
