//! Exercise frequency discretization

/// Highest bucket the model was trained on
pub const MAX_EXERCISE_BUCKET: u8 = 3;

/// Map exercise days per week onto the 0-3 scale of the training data.
///
/// 0 days -> 0, 1-2 -> 1, 3-4 -> 2, 5 or more -> 3.
pub fn exercise_bucket(days_per_week: u8) -> u8 {
    match days_per_week {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        _ => MAX_EXERCISE_BUCKET,
    }
}
