//! Configuration module for ql
//!
//! This module provides configuration management including:
//! - Settings file location
//! - INI settings persistence
//! - Resolution of the ledger file and account for a run

pub mod paths;
pub mod resolver;
pub mod settings;

pub use paths::QlPaths;
pub use resolver::{ConfigResolver, Overrides, ResolvedConfig};
pub use settings::Settings;
