//! Rating system configuration

use crate::rating::formula::K_FACTOR;
use crate::rating::points::{DEFAULT_STREAK_BONUS, DEFAULT_STREAK_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Lowest opponent rating drawn for formula-path games (inclusive)
pub const DEFAULT_OPPONENT_RATING_MIN: i32 = 1000;

/// Highest opponent rating drawn for formula-path games (exclusive)
pub const DEFAULT_OPPONENT_RATING_MAX: i32 = 2000;

/// Parameters of the formula and points policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub k_factor: f64,
    pub win_streak_threshold: u32,
    pub win_streak_bonus: i32,
    pub opponent_rating_min: i32,
    pub opponent_rating_max: i32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: K_FACTOR,
            win_streak_threshold: DEFAULT_STREAK_THRESHOLD,
            win_streak_bonus: DEFAULT_STREAK_BONUS,
            opponent_rating_min: DEFAULT_OPPONENT_RATING_MIN,
            opponent_rating_max: DEFAULT_OPPONENT_RATING_MAX,
        }
    }
}

impl RatingConfig {
    /// Half-open range opponent ratings are drawn from
    pub fn opponent_rating_range(&self) -> std::ops::Range<i32> {
        self.opponent_rating_min..self.opponent_rating_max
    }
}
