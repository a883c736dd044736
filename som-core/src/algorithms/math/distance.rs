#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates squared euclidean distance between two vectors of the same size.
/// It is used to compare distances, so the square root is not taken.
#[inline]
pub fn squared_euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    })
}

/// Calculates euclidean distance between two vectors of the same size.
pub fn euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    squared_euclidean_distance(a, b).sqrt()
}
