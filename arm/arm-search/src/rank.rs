//! Torque ranking and comparison statistics.

use arm_types::{Arm, Massive};

/// Indices of `arms` sorted by ascending base torque.
///
/// The sort is stable, so arms with equal torque keep their generated order.
#[must_use]
pub fn rank_by_torque(arms: &[Arm]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..arms.len()).collect();
    ranking.sort_by(|&a, &b| {
        arms[a]
            .torque_at_base()
            .total_cmp(&arms[b].torque_at_base())
    });
    ranking
}

/// Symmetric percent difference: `|a − b| / ((a + b) / 2) × 100`.
///
/// # Example
///
/// ```
/// use arm_search::rank::percent_difference;
///
/// assert_eq!(percent_difference(90.0, 110.0), 20.0);
/// assert_eq!(percent_difference(110.0, 90.0), 20.0);
/// ```
#[must_use]
pub fn percent_difference(a: f64, b: f64) -> f64 {
    let mean = (a + b) / 2.0;
    debug_assert!(mean != 0.0, "percent difference of values summing to zero");
    (a - b).abs() / mean * 100.0
}

/// First arm, in the given order, whose segments all have equal length.
#[must_use]
pub fn find_symmetric(arms: &[Arm]) -> Option<&Arm> {
    arms.iter().find(|arm| arm.is_symmetric())
}
