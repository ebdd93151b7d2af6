//! Rating computations
//!
//! Two independent paths live here: the Elo-style formula selected through
//! a [`GameMode`], and the per-account [`PointsPolicy`] that drives the
//! simulated games.

pub mod formula;
pub mod game_mode;
pub mod points;

// Re-export commonly used types
pub use formula::{RatingFormula, K_FACTOR};
pub use game_mode::GameMode;
pub use points::PointsPolicy;
