//! Common types used throughout the rating ledger

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};

/// Rating value for accounts and opponents
pub type Rating = i32;

/// Points gained or lost in a single game
pub type PointsChange = i32;

/// Classification of a raw outcome string
///
/// Outcomes are stored exactly as entered; only the comparison is
/// case-insensitive. Anything other than "win" or "loss" is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Win,
    Loss,
    Other,
}

impl OutcomeKind {
    /// Classify a raw outcome string
    pub fn classify(outcome: &str) -> Self {
        if outcome.eq_ignore_ascii_case("win") {
            OutcomeKind::Win
        } else if outcome.eq_ignore_ascii_case("loss") {
            OutcomeKind::Loss
        } else {
            OutcomeKind::Other
        }
    }

    /// Label used when an outcome is generated rather than typed
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Win => "Win",
            OutcomeKind::Loss => "Loss",
            OutcomeKind::Other => "Draw",
        }
    }
}

/// Account variant offered in the session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Standard,
    HalfPointsDeducted,
    VictorySeriesBonus,
}

impl AccountKind {
    /// All variants in menu order
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Standard,
        AccountKind::HalfPointsDeducted,
        AccountKind::VictorySeriesBonus,
    ];

    /// Parse a menu selection (1-3)
    pub fn from_choice(input: &str) -> Result<Self, LedgerError> {
        match crate::utils::parse_integer(input) {
            Some(1) => Ok(AccountKind::Standard),
            Some(2) => Ok(AccountKind::HalfPointsDeducted),
            Some(3) => Ok(AccountKind::VictorySeriesBonus),
            _ => Err(LedgerError::InvalidChoice {
                input: input.to_string(),
            }),
        }
    }

    /// Menu number for this variant
    pub fn choice(&self) -> u8 {
        match self {
            AccountKind::Standard => 1,
            AccountKind::HalfPointsDeducted => 2,
            AccountKind::VictorySeriesBonus => 3,
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Standard => write!(f, "Standard Game Account"),
            AccountKind::HalfPointsDeducted => write!(f, "Half Points Deducted Game Account"),
            AccountKind::VictorySeriesBonus => write!(f, "Victory Series Bonus Game Account"),
        }
    }
}

/// Name and starting rating collected for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub initial_rating: Rating,
}
