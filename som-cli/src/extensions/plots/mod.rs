//! Renders a trained map together with its data as an svg image.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plots/plots_test.rs"]
mod plots_test;

use som_core::prelude::*;

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Specifies drawing configuration of the map.
pub struct MapDrawConfig<'a> {
    /// A chart caption.
    pub caption: String,
    /// A map state to draw.
    pub state: &'a MapState,
    /// Data points used to train the map.
    pub data: &'a [Vec<Float>],
    /// Side size of square chart in pixels.
    pub chart_size: u32,
}

/// Returns a caption with run hyperparameters.
pub fn get_caption(grid_size: usize, learning_rate: Float, radius: Float, iterations: usize) -> String {
    format!("M={grid_size} alpha0={learning_rate} d0={radius} T={iterations}")
}

/// Draws the map as svg document: data points, a marker per node and lines between grid neighbours.
pub fn draw_map_svg(config: &MapDrawConfig) -> DrawResult<String> {
    if config.state.dimension != 2 {
        return Err(format!("only 2-dimensional map can be rendered, got {}", config.state.dimension).into());
    }

    if let Some(point) = config.data.iter().find(|point| point.len() != 2) {
        return Err(format!("only 2-dimensional data can be rendered, got {}", point.len()).into());
    }

    actual::draw(config)
}

/// Returns axis ranges of equal span which include all points.
#[cfg_attr(not(feature = "plots"), allow(dead_code))]
fn get_square_bounds<'a>(points: impl Iterator<Item = &'a [Float]>) -> ((Float, Float), (Float, Float)) {
    let ((x_min, x_max), (y_min, y_max)) = points.fold(
        ((Float::INFINITY, Float::NEG_INFINITY), (Float::INFINITY, Float::NEG_INFINITY)),
        |((x_min, x_max), (y_min, y_max)), point| {
            ((x_min.min(point[0]), x_max.max(point[0])), (y_min.min(point[1]), y_max.max(point[1])))
        },
    );

    if !x_min.is_finite() || !y_min.is_finite() {
        return ((0., 1.), (0., 1.));
    }

    let span = (x_max - x_min).max(y_max - y_min).max(Float::EPSILON) * 1.1;
    let (x_center, y_center) = ((x_min + x_max) / 2., (y_min + y_max) / 2.);

    ((x_center - span / 2., x_center + span / 2.), (y_center - span / 2., y_center + span / 2.))
}

#[cfg(feature = "plots")]
mod actual {
    use super::{DrawResult, MapDrawConfig, get_square_bounds};
    use plotters::prelude::*;

    const TITLE_HEIGHT: u32 = 40;

    pub(super) fn draw(config: &MapDrawConfig) -> DrawResult<String> {
        let mut buffer = String::new();

        {
            let size = config.chart_size;
            let root = SVGBackend::with_string(&mut buffer, (size, size + TITLE_HEIGHT)).into_drawing_area();
            root.fill(&WHITE)?;

            let (title_area, chart_area) = root.split_vertically(TITLE_HEIGHT);
            title_area.titled(config.caption.as_str(), ("sans-serif", 20))?;

            let node_weights = config.state.nodes.iter().map(|node| node.weights.as_slice());
            let ((x_min, x_max), (y_min, y_max)) =
                get_square_bounds(config.data.iter().map(|point| point.as_slice()).chain(node_weights));

            // NOTE equal label area sizes and margins keep plotting area square
            let mut chart = ChartBuilder::on(&chart_area)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(40)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

            chart.configure_mesh().disable_mesh().draw()?;

            chart.draw_series(
                config.data.iter().map(|point| Circle::new((point[0], point[1]), 1, BLUE.mix(0.4).filled())),
            )?;

            chart.draw_series(config.state.mesh_edges().map(|(from, to)| {
                PathElement::new(vec![(from.weights[0], from.weights[1]), (to.weights[0], to.weights[1])], BLUE)
            }))?;

            chart.draw_series(
                config.state.nodes.iter().map(|node| Circle::new((node.weights[0], node.weights[1]), 3, RED.filled())),
            )?;

            root.present()?;
        }

        Ok(buffer)
    }
}

#[cfg(not(feature = "plots"))]
mod actual {
    use super::*;

    pub(super) fn draw(_config: &MapDrawConfig) -> DrawResult<String> {
        Err("plots feature is not included".into())
    }
}
