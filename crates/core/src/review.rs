//! Review rating rules.

use crate::error::CoreError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

/// Reject ratings outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}

/// Round an average rating to one decimal place for display.
pub fn round_rating(avg: f64) -> f64 {
    (avg * 10.0).round() / 10.0
}
