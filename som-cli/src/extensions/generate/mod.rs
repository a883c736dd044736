//! Generates synthetic datasets of 2-dimensional points.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal, Uniform};
use som_core::prelude::Float;
use std::str::FromStr;

/// Specifies a shape of generated data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataShape {
    /// Points uniformly distributed in the unit square.
    Square,
    /// Points of the unit square with distance to its center in (0.2, 0.5).
    Ring,
    /// Points around a few gaussian cluster centers inside of the unit square.
    Blobs,
}

impl FromStr for DataShape {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "square" => Ok(DataShape::Square),
            "ring" => Ok(DataShape::Ring),
            "blobs" => Ok(DataShape::Blobs),
            _ => Err(format!("unknown data shape: '{value}'")),
        }
    }
}

const RING_INNER_RADIUS: Float = 0.2;
const RING_OUTER_RADIUS: Float = 0.5;
const BLOB_CENTERS: [(Float, Float); 3] = [(0.25, 0.25), (0.75, 0.35), (0.45, 0.75)];
const BLOB_DEVIATION: Float = 0.07;

/// Generates `size` points of the given shape. Uses a repeatable generator when seed is specified.
pub fn generate_points(shape: DataShape, size: usize, seed: Option<u64>) -> Result<Vec<Vec<Float>>, String> {
    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let unit = Uniform::<Float>::new(0., 1.);

    let points = match shape {
        DataShape::Square => (0..size).map(|_| vec![unit.sample(&mut rng), unit.sample(&mut rng)]).collect(),
        DataShape::Ring => {
            let mut points = Vec::with_capacity(size);
            while points.len() < size {
                let (x, y) = (unit.sample(&mut rng), unit.sample(&mut rng));
                let radius = ((x - 0.5) * (x - 0.5) + (y - 0.5) * (y - 0.5)).sqrt();

                if radius > RING_INNER_RADIUS && radius < RING_OUTER_RADIUS {
                    points.push(vec![x, y]);
                }
            }
            points
        }
        DataShape::Blobs => {
            let noise = Normal::new(0., BLOB_DEVIATION).map_err(|err| format!("cannot create distribution: {err}"))?;
            (0..size)
                .map(|idx| {
                    let (x, y) = BLOB_CENTERS[idx % BLOB_CENTERS.len()];
                    vec![(x + noise.sample(&mut rng)).clamp(0., 1.), (y + noise.sample(&mut rng)).clamp(0., 1.)]
                })
                .collect()
        }
    };

    Ok(points)
}
