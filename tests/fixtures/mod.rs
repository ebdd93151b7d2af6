//! Test fixtures for driving sessions deterministically

#![allow(dead_code)]

use rating_ledger::config::AppConfig;
use rating_ledger::session::{OutcomeSource, SessionRunner, TerminalConsole};
use rating_ledger::types::{OutcomeKind, Rating};
use std::collections::VecDeque;
use std::io::Cursor;

/// Console that reads a fixed script and captures everything written
pub type ScriptedConsole = TerminalConsole<Cursor<String>, Vec<u8>>;

/// Build a console from the lines a user would type
pub fn scripted_console(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    TerminalConsole::new(Cursor::new(input), Vec::new())
}

/// Captured console output as text
pub fn console_text(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).to_string()
}

/// Outcome source replaying a fixed script and logging what it handed out
#[derive(Debug, Default)]
pub struct ScriptedOutcomeSource {
    outcomes: VecDeque<OutcomeKind>,
    opponent_ratings: VecDeque<Rating>,
    drawn_outcomes: Vec<OutcomeKind>,
}

impl ScriptedOutcomeSource {
    pub fn new(outcomes: &[OutcomeKind]) -> Self {
        Self {
            outcomes: outcomes.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_opponent_ratings(mut self, ratings: &[Rating]) -> Self {
        self.opponent_ratings = ratings.iter().copied().collect();
        self
    }

    /// Outcomes handed out so far, in order
    pub fn drawn_outcomes(&self) -> &[OutcomeKind] {
        &self.drawn_outcomes
    }
}

impl OutcomeSource for ScriptedOutcomeSource {
    fn next_outcome(&mut self) -> OutcomeKind {
        let outcome = self.outcomes.pop_front().unwrap_or(OutcomeKind::Loss);
        self.drawn_outcomes.push(outcome);
        outcome
    }

    fn opponent_rating(&mut self) -> Rating {
        self.opponent_ratings.pop_front().unwrap_or(1500)
    }
}

/// Session runner over a scripted console and outcome source
pub fn scripted_runner(
    lines: &[&str],
    outcomes: &[OutcomeKind],
    config: AppConfig,
) -> SessionRunner<ScriptedConsole, ScriptedOutcomeSource> {
    SessionRunner::new(
        scripted_console(lines),
        ScriptedOutcomeSource::new(outcomes),
        config,
    )
}
