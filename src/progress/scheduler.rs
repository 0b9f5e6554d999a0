//! Review interval scheduling
//!
//! A five-bucket approximation of spaced repetition: intervals climb a fixed
//! ladder on correct answers and fall back to the bottom on a wrong one.

/// Review interval ladder, in days
pub const LADDER: [u32; 5] = [1, 3, 7, 14, 30];

/// Compute the next review interval in days
///
/// Wrong answers reset to 1 regardless of the current interval. Correct
/// answers advance one rung; an interval that is off the ladder or already
/// at the top maps to the 30-day ceiling.
pub fn next_interval(current: u32, correct: bool) -> u32 {
    if !correct {
        return LADDER[0];
    }

    match LADDER.iter().position(|&rung| rung == current) {
        Some(i) if i + 1 < LADDER.len() => LADDER[i + 1],
        _ => LADDER[LADDER.len() - 1],
    }
}
