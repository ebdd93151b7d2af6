//! Player accounts and their game history

pub mod game_account;
pub mod history;

// Re-export commonly used types
pub use game_account::{GameAccount, PlayReport};
pub use history::{GameHistoryLog, GameRecord};
