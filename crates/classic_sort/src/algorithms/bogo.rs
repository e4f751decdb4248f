//! Shuffle until sorted. Expected running time grows factorially, so only
//! trivially small inputs finish in practice.

use rand::Rng;
use rand::seq::SliceRandom;

use super::common::is_sorted_non_decreasing;

pub fn bogo<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    while !is_sorted_non_decreasing(data) {
        data.shuffle(rng);
    }
}

/// Bogo sort that gives up after `max_shuffles` shuffles.
///
/// Returns the number of shuffles that were needed, or `None` when the limit
/// was reached with `data` still unsorted.
pub fn bogo_bounded<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    rng: &mut R,
    max_shuffles: usize,
) -> Option<usize> {
    for shuffles in 0..=max_shuffles {
        if is_sorted_non_decreasing(data) {
            return Some(shuffles);
        }
        if shuffles < max_shuffles {
            data.shuffle(rng);
        }
    }
    None
}
