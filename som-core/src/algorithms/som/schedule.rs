#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/schedule_test.rs"]
mod schedule_test;

use super::*;
use std::ops::Range;

/// Returns a linear decay factor for the iteration: `1 - iteration / total`.
/// It is 1 at the first iteration and `1 / total` at the last one.
pub fn get_decay_factor(iteration: usize, total: usize) -> Float {
    debug_assert!(total > 0 && iteration < total);

    (total - iteration) as Float / total as Float
}

/// Returns the learning rate for the given decay factor.
pub fn get_learning_rate(initial_rate: Float, factor: Float) -> Float {
    initial_rate * factor
}

/// Returns the neighbourhood radius for the given decay factor, rounded up to an integer.
pub fn get_radius(initial_radius: Float, factor: Float) -> usize {
    (initial_radius * factor).ceil().max(0.) as usize
}

/// Returns rows and columns of the window `[j - d, j + d)` around the winner node, clipped by
/// the grid bounds. A zero radius window contains only the winner itself.
pub fn get_neighbourhood(winner: &Coordinate, radius: usize, size: usize) -> (Range<usize>, Range<usize>) {
    let Coordinate(row, col) = *winner;
    debug_assert!(row < size && col < size);

    let clip = |center: usize| center.saturating_sub(radius)..center.saturating_add(radius.max(1)).min(size);

    (clip(row), clip(col))
}
