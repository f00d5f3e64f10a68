//! Interactive flows
//!
//! Services sit between the command line and the storage layer.

pub mod collector;

pub use collector::EntryCollector;
