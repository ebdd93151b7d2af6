//! Game account with its rating, counters and history
//!
//! An account updates its rating through two separate paths:
//! - `record_result` / `play_games` use the account's [`PointsPolicy`]
//! - `win_game` / `lose_game` use the account's [`GameMode`] and the Elo
//!   formula, against a randomly rated opponent
//!
//! Both paths append to the same history and keep
//! `games_played == history.len()`.

use crate::account::history::{GameHistoryLog, GameRecord};
use crate::config::RatingConfig;
use crate::error::{LedgerError, Result};
use crate::rating::{GameMode, PointsPolicy, RatingFormula};
use crate::session::{Console, OutcomeSource};
use crate::types::{AccountKind, OutcomeKind, PlayerSetup, PointsChange, Rating};
use crate::utils::parse_integer;
use serde::Serialize;
use tracing::{debug, warn};

/// A player's account for one session
#[derive(Debug, Clone, Serialize)]
pub struct GameAccount {
    name: String,
    rating: Rating,
    games_played: u32,
    policy: PointsPolicy,
    mode: GameMode,
    #[serde(skip)]
    formula: RatingFormula,
    history: GameHistoryLog,
}

/// What a batch of simulated games did to an account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayReport {
    pub recorded: u32,
    pub skipped: Vec<LedgerError>,
}

impl GameAccount {
    /// Create an account in `Standard` mode with the default formula
    pub fn new(name: impl Into<String>, initial_rating: Rating, policy: PointsPolicy) -> Self {
        Self {
            name: name.into(),
            rating: initial_rating,
            games_played: 0,
            policy,
            mode: GameMode::default(),
            formula: RatingFormula::default(),
            history: GameHistoryLog::new(),
        }
    }

    /// Create an account of the given variant from a player's setup
    pub fn from_setup(kind: AccountKind, setup: PlayerSetup, config: &RatingConfig) -> Self {
        Self::new(
            setup.name,
            setup.initial_rating,
            PointsPolicy::for_kind(kind, config),
        )
        .with_formula(RatingFormula::new(config.k_factor))
    }

    pub fn with_formula(mut self, formula: RatingFormula) -> Self {
        self.formula = formula;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn policy(&self) -> &PointsPolicy {
        &self.policy
    }

    pub fn kind(&self) -> AccountKind {
        self.policy.kind()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn history(&self) -> &GameHistoryLog {
        &self.history
    }

    /// Switch the mode used by `win_game` / `lose_game`
    pub fn set_game_mode(&mut self, mode: GameMode) {
        debug!(account = %self.name, from = %self.mode, to = %mode, "Switching game mode");
        self.mode = mode;
    }

    /// Record a game using the account's points policy
    ///
    /// Unrecognised outcomes are recorded with no points change.
    pub fn record_result(
        &mut self,
        opponent_name: impl Into<String>,
        outcome: impl Into<String>,
        opponent_rating: Rating,
    ) -> &GameRecord {
        let outcome = outcome.into();
        let points_change = self.policy.compute(&outcome, opponent_rating);
        self.push_record(opponent_name.into(), outcome, opponent_rating, points_change)
    }

    /// Record a win against a randomly rated opponent using the game mode
    pub fn win_game(
        &mut self,
        opponent_name: impl Into<String>,
        source: &mut dyn OutcomeSource,
    ) -> &GameRecord {
        self.record_formula_game(opponent_name.into(), OutcomeKind::Win, source)
    }

    /// Record a loss against a randomly rated opponent using the game mode
    pub fn lose_game(
        &mut self,
        opponent_name: impl Into<String>,
        source: &mut dyn OutcomeSource,
    ) -> &GameRecord {
        self.record_formula_game(opponent_name.into(), OutcomeKind::Loss, source)
    }

    fn record_formula_game(
        &mut self,
        opponent_name: String,
        outcome: OutcomeKind,
        source: &mut dyn OutcomeSource,
    ) -> &GameRecord {
        let opponent_rating = source.opponent_rating();
        // The mode yields a full rating, which is applied as the points change.
        let points_change =
            self.mode
                .calculate_rating(&self.formula, self.rating, opponent_rating, outcome.label());
        self.push_record(
            opponent_name,
            outcome.label().to_string(),
            opponent_rating,
            points_change,
        )
    }

    fn push_record(
        &mut self,
        opponent_name: String,
        outcome: String,
        opponent_rating: Rating,
        points_change: PointsChange,
    ) -> &GameRecord {
        self.games_played += 1;
        self.rating = self.rating.wrapping_add(points_change);

        debug!(
            account = %self.name,
            opponent = %opponent_name,
            outcome = %outcome,
            opponent_rating,
            points_change,
            rating = self.rating,
            "Recorded game"
        );

        debug_assert_eq!(self.games_played as usize, self.history.len() + 1);
        self.history.append(GameRecord {
            opponent_name,
            outcome,
            opponent_rating,
            points_change,
            index: self.games_played - 1,
        })
    }

    /// Simulate `games` games, reading each opponent from the console
    ///
    /// A rating that does not parse skips that game only.
    pub fn play_games(
        &mut self,
        games: u32,
        console: &mut dyn Console,
        source: &mut dyn OutcomeSource,
    ) -> Result<PlayReport> {
        let mut report = PlayReport::default();

        for game in 1..=games {
            let opponent_name = console.ask(&format!("Enter opponent name for game {}: ", game))?;
            let input = console.ask(&format!("Enter rating for game {}: ", game))?;

            let Some(opponent_rating) = parse_integer(&input) else {
                let err = LedgerError::InvalidOpponentRating { game, input };
                warn!(account = %self.name, "{}", err);
                console.say(&err.to_string())?;
                report.skipped.push(err);
                continue;
            };

            let outcome = source.next_outcome().label();
            console.say(&format!("Game result for game {}: {}", game, outcome))?;
            self.record_result(opponent_name, outcome, opponent_rating);
            report.recorded += 1;
        }

        Ok(report)
    }

    /// Lines describing the history and current standing
    pub fn stats_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.history.len() + 2);
        lines.push(format!(
            "Game history for {} ({} mode):",
            self.name, self.mode
        ));
        lines.extend(self.history.iter().map(ToString::to_string));
        lines.push(format!(
            "Total games played: {}, Current Rating: {}",
            self.games_played, self.rating
        ));
        lines
    }

    /// Write the history and current standing to the console
    pub fn print_stats(&self, console: &mut dyn Console) -> Result<()> {
        for line in self.stats_lines() {
            console.say(&line)?;
        }
        Ok(())
    }
}
