#[cfg(test)]
#[path = "../../../tests/unit/extensions/train/report_test.rs"]
mod report_test;

use super::{TrainingOutput, TrainingSettings};
use serde::Serialize;
use som_core::prelude::*;
use std::io::{BufWriter, Write};

/// A json friendly report of a training run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    /// Run hyperparameters.
    pub parameters: ParametersReport,
    /// Training outcome.
    pub result: ResultReport,
    /// Final state of the grid.
    pub map: MapReport,
    /// Collected metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsReport>,
}

/// Run hyperparameters.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersReport {
    pub grid_size: usize,
    pub iterations: usize,
    pub learning_rate: Float,
    pub radius: Float,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub data_size: usize,
}

/// Training outcome.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    pub iterations: usize,
    pub is_interrupted: bool,
    pub quantization_error: Float,
}

/// Final state of the grid.
#[derive(Serialize)]
pub struct MapReport {
    pub size: usize,
    pub dimension: usize,
    pub nodes: Vec<NodeReport>,
}

/// A single grid node.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeReport {
    pub row: usize,
    pub col: usize,
    pub weights: Vec<Float>,
    pub unified_distance: Float,
}

/// Metrics collected during training.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// Duration in milliseconds.
    pub duration: usize,
    pub speed: Float,
    pub progress: Vec<ProgressReport>,
}

/// A tracked iteration.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub iteration: usize,
    pub timestamp: Float,
    pub learning_rate: Float,
    pub radius: usize,
}

impl TrainingReport {
    /// Creates a report from training output.
    pub fn new(output: &TrainingOutput, settings: &TrainingSettings, data_size: usize) -> Self {
        let state = get_map_state(&output.map);

        Self {
            parameters: ParametersReport {
                grid_size: settings.grid_size,
                iterations: settings.iterations,
                learning_rate: settings.learning_rate,
                radius: settings.radius,
                seed: settings.seed,
                data_size,
            },
            result: ResultReport {
                iterations: output.result.iterations,
                is_interrupted: output.result.is_interrupted,
                quantization_error: output.quantization_error,
            },
            map: MapReport {
                size: state.size,
                dimension: state.dimension,
                nodes: state
                    .nodes
                    .into_iter()
                    .map(|node| NodeReport {
                        row: node.coordinate.0,
                        col: node.coordinate.1,
                        weights: node.weights,
                        unified_distance: node.unified_distance,
                    })
                    .collect(),
            },
            metrics: output.result.metrics.as_ref().map(|metrics| MetricsReport {
                duration: metrics.duration,
                speed: metrics.speed,
                progress: metrics
                    .progress
                    .iter()
                    .map(|progress| ProgressReport {
                        iteration: progress.iteration,
                        timestamp: progress.timestamp,
                        learning_rate: progress.learning_rate,
                        radius: progress.radius,
                    })
                    .collect(),
            }),
        }
    }
}

/// Serializes training report as pretty json.
pub fn serialize_training_report<W: Write>(writer: BufWriter<W>, report: &TrainingReport) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot serialize report: '{err}'"))
}
