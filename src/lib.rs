//! Rating Ledger - console bookkeeping for two-player game accounts
//!
//! This crate models player accounts whose ratings move according to a
//! per-account points policy, an Elo-style formula path selected by game
//! mode, and an interactive session that simulates games between them.

pub mod account;
pub mod config;
pub mod error;
pub mod rating;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LedgerError, Result};
pub use types::*;

// Re-export key components
pub use account::{GameAccount, GameHistoryLog, GameRecord};
pub use rating::{GameMode, PointsPolicy, RatingFormula};
pub use session::{Console, OutcomeSource, SessionRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
