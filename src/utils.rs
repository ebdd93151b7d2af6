//! Utility functions for the rating ledger

use crate::types::Rating;

/// Parse an integer typed at the console
///
/// Surrounding whitespace is accepted; anything else that is not a plain
/// signed 32-bit integer yields `None`.
pub fn parse_integer(input: &str) -> Option<Rating> {
    input.trim().parse::<Rating>().ok()
}

/// Truncate a floating point value toward zero into a rating
///
/// Values beyond the `i32` range saturate and NaN becomes 0.
pub fn truncate_toward_zero(value: f64) -> Rating {
    value.trunc() as Rating
}
