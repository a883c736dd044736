//! This crate exposes a Self-Organizing Map (also known as Kohonen map): a square grid of prototype
//! vectors which is trained by competitive learning to approximate a distribution of input points
//! while keeping neighbouring grid nodes close in data space.
//!
//! A typical flow is:
//! - create an [`Environment`](utils::Environment) with an explicit random source
//! - create a [`Map`](algorithms::som::Map) with random initial weights
//! - train it with [`Map::train`](algorithms::som::Map::train) on a set of points
//! - query it with [`Map::locate_winner`](algorithms::som::Map::locate_winner) or take a
//!   [`MapState`](algorithms::som::MapState) snapshot to render it.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod telemetry;
pub mod utils;
