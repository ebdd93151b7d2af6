//! Points policies applied by `record_result`
//!
//! Each account variant converts an outcome and the opponent's rating into
//! a signed points change. Arithmetic wraps on overflow so that arbitrary
//! typed ratings never abort a session.

use crate::config::RatingConfig;
use crate::types::{AccountKind, OutcomeKind, PointsChange, Rating};
use serde::{Deserialize, Serialize};

/// Consecutive wins needed before the streak bonus applies
pub const DEFAULT_STREAK_THRESHOLD: u32 = 3;

/// Flat bonus added to each win once the streak threshold is reached
pub const DEFAULT_STREAK_BONUS: PointsChange = 10;

/// Point calculation rule owned by a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointsPolicy {
    /// Win +rating, loss -rating
    Standard,
    /// Win +rating, loss -rating/2
    HalfLossPenalty,
    /// Win +rating plus a bonus during a streak, loss -rating and reset
    WinStreakBonus {
        consecutive_wins: u32,
        threshold: u32,
        bonus: PointsChange,
    },
}

impl PointsPolicy {
    /// Streak-bonus policy with the default threshold and bonus
    pub fn win_streak_bonus() -> Self {
        Self::WinStreakBonus {
            consecutive_wins: 0,
            threshold: DEFAULT_STREAK_THRESHOLD,
            bonus: DEFAULT_STREAK_BONUS,
        }
    }

    /// Fresh policy instance for an account variant
    pub fn for_kind(kind: AccountKind, config: &RatingConfig) -> Self {
        match kind {
            AccountKind::Standard => PointsPolicy::Standard,
            AccountKind::HalfPointsDeducted => PointsPolicy::HalfLossPenalty,
            AccountKind::VictorySeriesBonus => PointsPolicy::WinStreakBonus {
                consecutive_wins: 0,
                threshold: config.win_streak_threshold,
                bonus: config.win_streak_bonus,
            },
        }
    }

    /// Account variant this policy belongs to
    pub fn kind(&self) -> AccountKind {
        match self {
            PointsPolicy::Standard => AccountKind::Standard,
            PointsPolicy::HalfLossPenalty => AccountKind::HalfPointsDeducted,
            PointsPolicy::WinStreakBonus { .. } => AccountKind::VictorySeriesBonus,
        }
    }

    /// Points change for one game
    ///
    /// Only the streak policy carries state; it is updated as part of the
    /// computation.
    pub fn compute(&mut self, outcome: &str, opponent_rating: Rating) -> PointsChange {
        let kind = OutcomeKind::classify(outcome);
        match self {
            PointsPolicy::Standard => match kind {
                OutcomeKind::Win => opponent_rating,
                OutcomeKind::Loss => opponent_rating.wrapping_neg(),
                OutcomeKind::Other => 0,
            },
            PointsPolicy::HalfLossPenalty => match kind {
                OutcomeKind::Win => opponent_rating,
                OutcomeKind::Loss => opponent_rating.wrapping_neg() / 2,
                OutcomeKind::Other => 0,
            },
            PointsPolicy::WinStreakBonus {
                consecutive_wins,
                threshold,
                bonus,
            } => match kind {
                OutcomeKind::Win => {
                    *consecutive_wins = consecutive_wins.saturating_add(1);
                    if *consecutive_wins >= *threshold {
                        opponent_rating.wrapping_add(*bonus)
                    } else {
                        opponent_rating
                    }
                }
                OutcomeKind::Loss => {
                    *consecutive_wins = 0;
                    opponent_rating.wrapping_neg()
                }
                OutcomeKind::Other => 0,
            },
        }
    }

    /// Current streak length, if this policy tracks one
    pub fn consecutive_wins(&self) -> Option<u32> {
        match self {
            PointsPolicy::WinStreakBonus {
                consecutive_wins, ..
            } => Some(*consecutive_wins),
            _ => None,
        }
    }
}
