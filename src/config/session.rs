//! Session configuration

use serde::{Deserialize, Serialize};

/// Games simulated per player when nothing else is configured
pub const DEFAULT_GAMES_PER_PLAYER: u32 = 3;

/// How a console session is run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated games for each of the two players
    pub games_per_player: u32,
    /// Fixed seed for the outcome source; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Print both accounts as JSON after the stats
    pub emit_json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games_per_player: DEFAULT_GAMES_PER_PLAYER,
            seed: None,
            emit_json: false,
        }
    }
}
