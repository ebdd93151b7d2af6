//! Console session orchestration
//!
//! This module provides the interactive runner together with the two
//! boundaries it is built on: the line console and the outcome source.

pub mod console;
pub mod runner;
pub mod source;

// Re-export commonly used types
pub use console::{Console, TerminalConsole};
pub use runner::{SessionOutcome, SessionRunner, SessionState};
pub use source::{OutcomeSource, RandomOutcomeSource};

#[cfg(test)]
pub use source::MockOutcomeSource;
