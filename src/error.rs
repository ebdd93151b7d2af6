//! Error types for the rating ledger
//!
//! Session-level failures carry the exact message shown to the user, so the
//! runner can print them verbatim. Everything else flows through anyhow.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ledger scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid choice. Exiting.")]
    InvalidChoice { input: String },

    #[error("Invalid initial rating for player {player}. Exiting.")]
    InvalidInitialRating { player: u8, input: String },

    #[error("Invalid rating. Game {game} not recorded.")]
    InvalidOpponentRating { game: u32, input: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
