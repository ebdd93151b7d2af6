//! Sources of simulated outcomes and opponent ratings

use crate::types::{OutcomeKind, Rating};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Supplies the random parts of a simulated game
#[cfg_attr(test, mockall::automock)]
pub trait OutcomeSource {
    /// Outcome of the next simulated game, either `Win` or `Loss`
    fn next_outcome(&mut self) -> OutcomeKind;

    /// Rating of an opponent that has no rating on record
    fn opponent_rating(&mut self) -> Rating;
}

/// Outcome source backed by a seedable PRNG
#[derive(Debug, Clone)]
pub struct RandomOutcomeSource {
    rng: StdRng,
    opponent_ratings: Range<Rating>,
}

impl RandomOutcomeSource {
    /// Create a source drawing opponent ratings from `opponent_ratings`
    ///
    /// With a seed the sequence is reproducible; without one the generator
    /// is seeded from system entropy.
    pub fn new(seed: Option<u64>, opponent_ratings: Range<Rating>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            opponent_ratings,
        }
    }
}

impl OutcomeSource for RandomOutcomeSource {
    fn next_outcome(&mut self) -> OutcomeKind {
        if self.rng.gen_range(0..2) == 0 {
            OutcomeKind::Win
        } else {
            OutcomeKind::Loss
        }
    }

    fn opponent_rating(&mut self) -> Rating {
        self.rng.gen_range(self.opponent_ratings.clone())
    }
}
