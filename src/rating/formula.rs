//! Elo-style rating formula
//!
//! Used by the game-mode path (`win_game` / `lose_game`). The points
//! policies in [`crate::rating::points`] are a separate computation.

use crate::types::{OutcomeKind, Rating};
use crate::utils::truncate_toward_zero;
use serde::{Deserialize, Serialize};

/// K-factor for Elo updates
pub const K_FACTOR: f64 = 32.0;

/// Rating gap that corresponds to a tenfold difference in odds
const ELO_SCALE: f64 = 400.0;

/// Elo formula parameterised by its K-factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingFormula {
    pub k_factor: f64,
}

impl Default for RatingFormula {
    fn default() -> Self {
        Self { k_factor: K_FACTOR }
    }
}

impl RatingFormula {
    pub fn new(k_factor: f64) -> Self {
        Self { k_factor }
    }

    /// Expected score of a player rated `rating_a` against `rating_b`
    pub fn expected(rating_a: Rating, rating_b: Rating) -> f64 {
        let gap = f64::from(rating_b) - f64::from(rating_a);
        1.0 / (1.0 + 10.0_f64.powf(gap / ELO_SCALE))
    }

    /// New rating for `rating_a` after a game against `rating_b`
    ///
    /// The adjusted rating is truncated toward zero as a whole, so a win
    /// worth 16.7 points from 1200 lands on 1216. Outcomes other than
    /// win/loss leave the rating untouched.
    pub fn new_rating(&self, rating_a: Rating, rating_b: Rating, outcome: &str) -> Rating {
        let actual = match OutcomeKind::classify(outcome) {
            OutcomeKind::Win => 1.0,
            OutcomeKind::Loss => 0.0,
            OutcomeKind::Other => return rating_a,
        };
        let expected = Self::expected(rating_a, rating_b);
        truncate_toward_zero(f64::from(rating_a) + self.k_factor * (actual - expected))
    }
}
