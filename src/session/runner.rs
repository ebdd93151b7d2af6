//! Interactive session driving two accounts through simulated games
//!
//! The session is a small state machine:
//! `SelectVariant -> CollectPlayer1Setup -> CollectPlayer2Setup ->
//! SimulateAndReport -> Done`. A bad menu choice or initial rating jumps
//! straight to `Done` before any account exists.

use crate::account::GameAccount;
use crate::config::AppConfig;
use crate::error::{LedgerError, Result};
use crate::session::{Console, OutcomeSource};
use crate::types::{AccountKind, PlayerSetup};
use crate::utils::parse_integer;
use tracing::{debug, info, warn};

/// Where a session currently stands
#[derive(Debug, Clone)]
pub enum SessionState {
    SelectVariant,
    CollectPlayer1Setup {
        kind: AccountKind,
    },
    CollectPlayer2Setup {
        kind: AccountKind,
        player1: PlayerSetup,
    },
    SimulateAndReport {
        kind: AccountKind,
        player1: PlayerSetup,
        player2: PlayerSetup,
    },
    Done(SessionOutcome),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::SelectVariant => "SelectVariant",
            SessionState::CollectPlayer1Setup { .. } => "CollectPlayer1Setup",
            SessionState::CollectPlayer2Setup { .. } => "CollectPlayer2Setup",
            SessionState::SimulateAndReport { .. } => "SimulateAndReport",
            SessionState::Done(_) => "Done",
        }
    }
}

/// How a session ended
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    Completed {
        player1: GameAccount,
        player2: GameAccount,
    },
    Aborted(LedgerError),
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed { .. })
    }
}

/// Runs one console session with an injected console and outcome source
pub struct SessionRunner<C, S> {
    console: C,
    source: S,
    config: AppConfig,
}

impl<C: Console, S: OutcomeSource> SessionRunner<C, S> {
    pub fn new(console: C, source: S, config: AppConfig) -> Self {
        Self {
            console,
            source,
            config,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the session to completion
    ///
    /// Only console I/O failures are returned as errors; bad input ends in
    /// `SessionOutcome::Aborted`.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        info!(service = %self.config.service.name, "Starting session");

        let mut state = SessionState::SelectVariant;
        loop {
            state = match state {
                SessionState::Done(outcome) => {
                    info!(completed = outcome.is_completed(), "Session finished");
                    return Ok(outcome);
                }
                state => {
                    let from = state.name();
                    let next = self.step(state)?;
                    debug!(from, to = next.name(), "Session transition");
                    next
                }
            };
        }
    }

    /// Advance the state machine by one state
    pub fn step(&mut self, state: SessionState) -> Result<SessionState> {
        let next = match state {
            SessionState::SelectVariant => match self.select_variant()? {
                Ok(kind) => SessionState::CollectPlayer1Setup { kind },
                Err(err) => self.abort(err)?,
            },
            SessionState::CollectPlayer1Setup { kind } => match self.collect_setup(1)? {
                Ok(player1) => SessionState::CollectPlayer2Setup { kind, player1 },
                Err(err) => self.abort(err)?,
            },
            SessionState::CollectPlayer2Setup { kind, player1 } => {
                match self.collect_setup(2)? {
                    Ok(player2) => SessionState::SimulateAndReport {
                        kind,
                        player1,
                        player2,
                    },
                    Err(err) => self.abort(err)?,
                }
            }
            SessionState::SimulateAndReport {
                kind,
                player1,
                player2,
            } => self.simulate_and_report(kind, player1, player2)?,
            done @ SessionState::Done(_) => done,
        };
        Ok(next)
    }

    fn select_variant(&mut self) -> Result<std::result::Result<AccountKind, LedgerError>> {
        self.console.say("Select a game account type:")?;
        for kind in AccountKind::ALL {
            self.console.say(&format!("{}. {}", kind.choice(), kind))?;
        }
        let input = self.console.read_line()?.unwrap_or_default();
        Ok(AccountKind::from_choice(&input))
    }

    fn collect_setup(&mut self, player: u8) -> Result<std::result::Result<PlayerSetup, LedgerError>> {
        let name = self.console.ask(&format!("Enter player name {}: ", player))?;
        let input = self
            .console
            .ask(&format!("Enter initial rating for player {}: ", player))?;

        Ok(match parse_integer(&input) {
            Some(initial_rating) => Ok(PlayerSetup {
                name,
                initial_rating,
            }),
            None => Err(LedgerError::InvalidInitialRating { player, input }),
        })
    }

    fn abort(&mut self, err: LedgerError) -> Result<SessionState> {
        warn!("Session aborted: {:?}", err);
        self.console.say(&err.to_string())?;
        Ok(SessionState::Done(SessionOutcome::Aborted(err)))
    }

    fn simulate_and_report(
        &mut self,
        kind: AccountKind,
        player1: PlayerSetup,
        player2: PlayerSetup,
    ) -> Result<SessionState> {
        let games = self.config.session.games_per_player;
        let mut accounts = [
            GameAccount::from_setup(kind, player1, &self.config.rating),
            GameAccount::from_setup(kind, player2, &self.config.rating),
        ];

        for account in accounts.iter_mut() {
            info!(account = %account.name(), %kind, games, "Simulating games");
            let report = account.play_games(games, &mut self.console, &mut self.source)?;
            debug!(
                account = %account.name(),
                recorded = report.recorded,
                skipped = report.skipped.len(),
                "Simulation finished"
            );
            account.print_stats(&mut self.console)?;
        }

        if self.config.session.emit_json {
            let json = serde_json::to_string_pretty(&accounts)?;
            self.console.say(&json)?;
        }

        let [player1, player2] = accounts;
        Ok(SessionState::Done(SessionOutcome::Completed { player1, player2 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MockOutcomeSource, TerminalConsole};
    use crate::types::OutcomeKind;
    use std::io::Cursor;

    fn runner(
        input: &str,
        source: MockOutcomeSource,
    ) -> SessionRunner<TerminalConsole<Cursor<String>, Vec<u8>>, MockOutcomeSource> {
        SessionRunner::new(
            TerminalConsole::new(Cursor::new(input.to_string()), Vec::new()),
            source,
            AppConfig::default(),
        )
    }

    fn output<S: OutcomeSource>(
        runner: &SessionRunner<TerminalConsole<Cursor<String>, Vec<u8>>, S>,
    ) -> String {
        String::from_utf8_lossy(runner.console().output()).to_string()
    }

    #[test]
    fn test_invalid_choice_aborts() {
        let mut source = MockOutcomeSource::new();
        source.expect_next_outcome().never();

        let mut runner = runner("4\n", source);
        let outcome = runner.run().unwrap();

        assert!(matches!(
            outcome,
            SessionOutcome::Aborted(LedgerError::InvalidChoice { .. })
        ));
        assert_eq!(
            output(&runner),
            "Select a game account type:\n\
             1. Standard Game Account\n\
             2. Half Points Deducted Game Account\n\
             3. Victory Series Bonus Game Account\n\
             Invalid choice. Exiting.\n"
        );
    }

    #[test]
    fn test_invalid_player1_rating_aborts() {
        let mut source = MockOutcomeSource::new();
        source.expect_next_outcome().never();

        let mut runner = runner("1\nA\nhigh\n", source);
        let outcome = runner.run().unwrap();

        assert!(matches!(
            outcome,
            SessionOutcome::Aborted(LedgerError::InvalidInitialRating { player: 1, .. })
        ));
        let text = output(&runner);
        assert!(text.ends_with(
            "Enter player name 1: Enter initial rating for player 1: \
             Invalid initial rating for player 1. Exiting.\n"
        ));
        assert!(!text.contains("player name 2"));
    }

    #[test]
    fn test_invalid_player2_rating_aborts() {
        let mut source = MockOutcomeSource::new();
        source.expect_next_outcome().never();

        let mut runner = runner("3\nA\n1000\nB\n\n", source);
        let outcome = runner.run().unwrap();

        assert!(matches!(
            outcome,
            SessionOutcome::Aborted(LedgerError::InvalidInitialRating { player: 2, .. })
        ));
        assert!(output(&runner).ends_with("Invalid initial rating for player 2. Exiting.\n"));
    }

    #[test]
    fn test_empty_input_aborts_at_menu() {
        let mut runner = runner("", MockOutcomeSource::new());
        let outcome = runner.run().unwrap();
        assert!(!outcome.is_completed());
    }

    #[test]
    fn test_completed_session_plays_both_players() {
        let mut source = MockOutcomeSource::new();
        source
            .expect_next_outcome()
            .times(6)
            .return_const(OutcomeKind::Win);

        let input = "1\nA\n1000\nB\n2000\nx\n10\ny\n20\nz\n30\nu\n1\nv\n2\nw\n3\n";
        let mut runner = runner(input, source);
        let outcome = runner.run().unwrap();

        let SessionOutcome::Completed { player1, player2 } = outcome else {
            panic!("session should complete");
        };
        assert_eq!(player1.rating(), 1060);
        assert_eq!(player2.rating(), 2006);
        assert_eq!(player1.games_played(), 3);
        assert_eq!(player2.games_played(), 3);

        let text = output(&runner);
        let a_total = text.find("Total games played: 3, Current Rating: 1060").unwrap();
        let b_prompt = text.find("Enter opponent name for game 1: Enter rating for game 1: Game result for game 1: Win\nEnter opponent name for game 2: Enter rating for game 2: Game result for game 2: Win\nEnter opponent name for game 3: Enter rating for game 3: Game result for game 3: Win\nGame history for B").unwrap();
        assert!(a_total < b_prompt);
        assert!(text.ends_with("Total games played: 3, Current Rating: 2006\n"));
    }

    #[test]
    fn test_step_from_done_is_stable() {
        let mut runner = runner("", MockOutcomeSource::new());
        let done = SessionState::Done(SessionOutcome::Aborted(LedgerError::InvalidChoice {
            input: String::new(),
        }));
        let next = runner.step(done).unwrap();
        assert_eq!(next.name(), "Done");
        assert!(output(&runner).is_empty());
    }
}
