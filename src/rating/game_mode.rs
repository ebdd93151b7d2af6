//! Game modes that decide how the formula path treats a result

use crate::rating::formula::RatingFormula;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// Mode an account plays its formula-path games in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Ratings move according to the Elo formula
    #[default]
    Standard,
    /// Ratings never move
    Practice,
}

impl GameMode {
    /// Rating produced for `player_rating` after a game against `opponent_rating`
    pub fn calculate_rating(
        &self,
        formula: &RatingFormula,
        player_rating: Rating,
        opponent_rating: Rating,
        outcome: &str,
    ) -> Rating {
        match self {
            GameMode::Standard => formula.new_rating(player_rating, opponent_rating, outcome),
            GameMode::Practice => player_rating,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Standard => write!(f, "Standard"),
            GameMode::Practice => write!(f, "Practice"),
        }
    }
}
