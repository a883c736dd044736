#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/map_test.rs"]
mod map_test;

use super::*;
use crate::algorithms::math::squared_euclidean_distance;
use crate::utils::Random;
use std::ops::Range;

/// Specifies a range used to initialize node weights.
#[derive(Clone, Debug, PartialEq)]
pub struct InitRange {
    /// Inclusive minimum.
    pub min: Float,
    /// Exclusive maximum.
    pub max: Float,
}

impl Default for InitRange {
    /// Returns a narrow range around the center of the unit square, so the map starts
    /// inside of a data cloud spread over `[0, 1)` in each dimension.
    fn default() -> Self {
        Self { min: 0.45, max: 0.55 }
    }
}

/// A Self-Organizing Map: a square grid of `size x size` nodes, each of them keeps a weight
/// vector of `dimension` components. Weights are stored contiguously in row-major order.
#[derive(Clone, Debug)]
pub struct Map {
    size: usize,
    dimension: usize,
    weights: Vec<Float>,
}

impl Map {
    /// Creates a new instance of `Map` with weights drawn from the default initialization range.
    pub fn new(size: usize, dimension: usize, random: &dyn Random) -> Result<Self, MapError> {
        Self::new_with_range(size, dimension, InitRange::default(), random)
    }

    /// Creates a new instance of `Map` with weights drawn uniformly from the given range.
    pub fn new_with_range(
        size: usize,
        dimension: usize,
        range: InitRange,
        random: &dyn Random,
    ) -> Result<Self, MapError> {
        if size == 0 || dimension == 0 {
            return Err(MapError::InvalidDimension { size, dimension });
        }

        if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
            return Err(MapError::InvalidParameter(format!("init range is empty: [{}, {})", range.min, range.max)));
        }

        let weights = (0..size * size * dimension).map(|_| random.uniform_real(range.min, range.max)).collect();

        Ok(Self { size, dimension, weights })
    }

    /// Creates a new instance of `Map` from explicit grid of weights indexed as `grid[row][col]`.
    pub fn from_weights(grid: Vec<Vec<Vec<Float>>>) -> Result<Self, MapError> {
        let size = grid.len();
        let dimension = grid.first().and_then(|row| row.first()).map_or(0, |node| node.len());

        if size == 0 || dimension == 0 || grid.iter().any(|row| row.len() != size) {
            return Err(MapError::InvalidDimension { size, dimension });
        }

        let weights = grid.into_iter().flatten().enumerate().try_fold(
            Vec::with_capacity(size * size * dimension),
            |mut weights, (index, node)| {
                if node.len() != dimension {
                    return Err(MapError::DimensionMismatch { expected: dimension, actual: node.len() });
                }

                if node.iter().any(|value| !value.is_finite()) {
                    return Err(MapError::NonFiniteInput { index });
                }

                weights.extend(node);
                Ok(weights)
            },
        )?;

        Ok(Self { size, dimension, weights })
    }

    /// Returns grid side size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns dimension of node weights.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns all weights as a flat slice in row-major node order.
    pub fn weights(&self) -> &[Float] {
        self.weights.as_slice()
    }

    /// Returns weights of the node at given coordinate.
    pub fn node(&self, coordinate: &Coordinate) -> Option<&[Float]> {
        let Coordinate(row, col) = *coordinate;
        if row < self.size && col < self.size { Some(self.node_weights(row * self.size + col)) } else { None }
    }

    /// Iterates over nodes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &[Float])> + '_ {
        self.weights
            .chunks_exact(self.dimension)
            .enumerate()
            .map(|(index, weights)| (self.to_coordinate(index), weights))
    }

    /// Finds the node with weights closest to the sample by squared euclidean distance.
    /// Nodes are scanned in row-major order, ties are resolved in favor of the first one.
    pub fn locate_winner(&self, sample: &[Float]) -> Result<Coordinate, MapError> {
        self.ensure_dimension(sample)?;

        Ok(self.find_winner(sample))
    }

    pub(crate) fn ensure_dimension(&self, sample: &[Float]) -> Result<(), MapError> {
        if sample.len() == self.dimension {
            Ok(())
        } else {
            Err(MapError::DimensionMismatch { expected: self.dimension, actual: sample.len() })
        }
    }

    pub(crate) fn find_winner(&self, sample: &[Float]) -> Coordinate {
        let (index, _) = self.weights.chunks_exact(self.dimension).enumerate().fold(
            (0, Float::INFINITY),
            |(best_index, best_distance), (index, weights)| {
                let distance = squared_euclidean_distance(weights, sample);
                // NOTE strict comparison keeps the first node on ties
                if distance < best_distance { (index, distance) } else { (best_index, best_distance) }
            },
        );

        self.to_coordinate(index)
    }

    /// Moves every node inside the window towards the target with the same learning rate.
    pub(crate) fn adjust(&mut self, rows: Range<usize>, cols: Range<usize>, target: &[Float], learning_rate: Float) {
        debug_assert!(rows.end <= self.size && cols.end <= self.size);
        debug_assert_eq!(target.len(), self.dimension);

        for row in rows {
            let start = (row * self.size + cols.start) * self.dimension;
            let end = (row * self.size + cols.end) * self.dimension;

            self.weights[start..end].chunks_exact_mut(self.dimension).for_each(|weights| {
                weights.iter_mut().zip(target.iter()).for_each(|(weight, value)| {
                    *weight += learning_rate * (*value - *weight);
                });
            });
        }
    }

    fn node_weights(&self, index: usize) -> &[Float] {
        &self.weights[index * self.dimension..(index + 1) * self.dimension]
    }

    fn to_coordinate(&self, index: usize) -> Coordinate {
        Coordinate(index / self.size, index % self.size)
    }
}
