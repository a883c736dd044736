#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::algorithms::math::euclidean_distance;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents a read-only snapshot of the map, e.g. to render it.
pub struct MapState {
    /// Grid side size.
    pub size: usize,
    /// Dimension of node weights.
    pub dimension: usize,
    /// Nodes of the map in row-major order.
    pub nodes: Vec<NodeState>,
}

/// Contains information about map node state.
pub struct NodeState {
    /// Node coordinate in the grid.
    pub coordinate: Coordinate,
    /// Node weights.
    pub weights: Vec<Float>,
    /// Mean distance to the closest grid neighbours (U-matrix value).
    pub unified_distance: Float,
}

/// Gets map state.
pub fn get_map_state(map: &Map) -> MapState {
    let size = map.size();

    let nodes = map
        .iter()
        .map(|(coordinate, weights)| {
            let Coordinate(row, col) = coordinate;
            let neighbours = [
                row.checked_sub(1).map(|row| Coordinate(row, col)),
                Some(Coordinate(row + 1, col)),
                col.checked_sub(1).map(|col| Coordinate(row, col)),
                Some(Coordinate(row, col + 1)),
            ];

            let (sum, count) = neighbours
                .iter()
                .flatten()
                .filter_map(|neighbour| map.node(neighbour))
                .fold((0., 0), |(sum, count), other| (sum + euclidean_distance(weights, other), count + 1));

            NodeState {
                coordinate,
                weights: weights.to_vec(),
                unified_distance: if count > 0 { sum / count as Float } else { 0. },
            }
        })
        .collect();

    MapState { size, dimension: map.dimension(), nodes }
}

/// Calculates quantization error: mean euclidean distance between samples and their winner nodes.
pub fn get_quantization_error<I: Input>(map: &Map, data: &[I]) -> std::result::Result<Float, MapError> {
    if data.is_empty() {
        return Err(MapError::EmptyDataset);
    }

    let total = data.iter().try_fold(0., |acc, input| {
        let sample = input.weights();
        let winner = map.locate_winner(sample)?;
        let distance = map.node(&winner).map_or(0., |weights| euclidean_distance(sample, weights));

        Ok::<_, MapError>(acc + distance)
    })?;

    Ok(total / data.len() as Float)
}

impl MapState {
    /// Returns node at given coordinate.
    pub fn node(&self, coordinate: &Coordinate) -> Option<&NodeState> {
        let Coordinate(row, col) = *coordinate;
        if row < self.size && col < self.size { self.nodes.get(row * self.size + col) } else { None }
    }

    /// Iterates over pairs of grid neighbours which form the map mesh: each node is paired with
    /// its next row neighbour and its next column neighbour.
    pub fn mesh_edges(&self) -> impl Iterator<Item = (&NodeState, &NodeState)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            let Coordinate(row, col) = node.coordinate;

            [Coordinate(row + 1, col), Coordinate(row, col + 1)]
                .into_iter()
                .filter_map(move |neighbour| self.node(&neighbour).map(|other| (node, other)))
        })
    }
}

impl Display for MapState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let nodes = self.nodes.iter().fold(String::new(), |mut res, n| {
            let Coordinate(row, col) = n.coordinate;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            // NOTE writing to string cannot fail
            let _ = write!(&mut res, "({row},{col},{:.7},[{weights}]),", n.unified_distance);

            res
        });

        write!(f, "({},{},[{}])", self.size, self.dimension, nodes)
    }
}
