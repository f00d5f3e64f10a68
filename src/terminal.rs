//! Terminal interaction
//!
//! All interactive input goes through the [`Prompter`] trait so the setup
//! and entry flows can be driven by a script in tests. The production
//! implementation is [`Terminal`], a thin wrapper around a `rustyline`
//! editor.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{QlError, QlResult};

/// Why a prompt produced no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Ctrl-C or end of input
    Cancelled,
    /// Any other failure while reading the answer
    Failed(String),
}

impl From<PromptError> for QlError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => QlError::Cancelled,
            PromptError::Failed(msg) => QlError::Io(msg),
        }
    }
}

/// Source of interactive answers and sink for user-facing messages
pub trait Prompter {
    /// Show `prompt` and read one line of input, without its line terminator
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Print a message for the user
    fn say(&mut self, message: &str);
}

/// Interactive terminal backed by rustyline
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    /// Create a terminal reading from stdin
    pub fn new() -> QlResult<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| QlError::Io(format!("Failed to open terminal: {}", e)))?;
        Ok(Self { editor })
    }
}

impl Prompter for Terminal {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(PromptError::Cancelled)
            }
            Err(e) => Err(PromptError::Failed(e.to_string())),
        }
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
