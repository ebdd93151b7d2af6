//! Per-account game history

use crate::types::{PointsChange, Rating};
use serde::{Deserialize, Serialize};

/// A single recorded game, fixed once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub opponent_name: String,
    /// Outcome exactly as it was recorded
    pub outcome: String,
    pub opponent_rating: Rating,
    pub points_change: PointsChange,
    /// Zero-based position in the owning history
    pub index: u32,
}

impl std::fmt::Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game {}: Against {}, {} with rating {}. Points Change: {}",
            u64::from(self.index) + 1,
            self.opponent_name,
            self.outcome,
            self.opponent_rating,
            self.points_change
        )
    }
}

/// Append-only, chronologically ordered list of game records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistoryLog {
    records: Vec<GameRecord>,
}

impl GameHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return it
    pub fn append(&mut self, record: GameRecord) -> &GameRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[GameRecord] {
        &self.records
    }

    /// Sum of all points changes, wrapping like the account rating does
    pub fn total_points_change(&self) -> PointsChange {
        self.records
            .iter()
            .fold(0, |total: PointsChange, record| total.wrapping_add(record.points_change))
    }
}

impl<'a> IntoIterator for &'a GameHistoryLog {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
