//! Provides an implementation of the classic Self-Organizing Map on a square lattice.

use crate::utils::Float;

mod error;
pub use self::error::*;

mod map;
pub use self::map::*;

mod schedule;
pub use self::schedule::*;

mod state;
pub use self::state::*;

mod training;
pub use self::training::*;

/// Represents an input for the map.
pub trait Input {
    /// Returns weights.
    fn weights(&self) -> &[Float];
}

impl Input for Vec<Float> {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<const N: usize> Input for [Float; N] {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

/// Coordinate of the node in the grid as (row, column).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinate(pub usize, pub usize);
