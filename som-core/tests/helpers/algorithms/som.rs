use crate::algorithms::som::Map;
use crate::utils::Float;

/// Creates a 2x2 map with nodes placed at the unit square corners: node (j, k) has weights (j, k).
pub fn create_corner_map() -> Map {
    create_grid_map(2, 1.)
}

/// Creates a map where node (j, k) has weights (j * step, k * step).
pub fn create_grid_map(size: usize, step: Float) -> Map {
    let grid = (0..size)
        .map(|row| (0..size).map(|col| vec![row as Float * step, col as Float * step]).collect())
        .collect();

    Map::from_weights(grid).unwrap()
}

/// Returns weights of all nodes in row-major order.
pub fn get_node_weights(map: &Map) -> Vec<Vec<Float>> {
    map.iter().map(|(_, weights)| weights.to_vec()).collect()
}
