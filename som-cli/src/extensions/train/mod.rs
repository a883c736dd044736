//! Contains logic to train a map on points with settings coming from the command line.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/train/train_test.rs"]
mod train_test;

mod interruption;
pub use self::interruption::create_interruption_quota;

mod report;
pub use self::report::*;

use som_core::algorithms::som::get_quantization_error;
use som_core::prelude::*;
use std::sync::Arc;

/// Specifies training settings.
#[derive(Clone, Debug)]
pub struct TrainingSettings {
    /// Grid side size.
    pub grid_size: usize,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Initial learning rate.
    pub learning_rate: Float,
    /// Initial neighbourhood radius.
    pub radius: Float,
    /// How often training progress is reported, zero disables it.
    pub progress_period: usize,
    /// A random seed used for the run, if any.
    pub seed: Option<u64>,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self { grid_size: 10, iterations: 4000, learning_rate: 0.02, radius: 4., progress_period: 100, seed: None }
    }
}

/// Keeps everything produced by a training run.
pub struct TrainingOutput {
    /// A trained map.
    pub map: Map,
    /// A snapshot of the map before training.
    pub initial_state: MapState,
    /// A training result.
    pub result: TrainingResult,
    /// Quantization error of the trained map on the training data.
    pub quantization_error: Float,
}

/// Creates a map with random weights and trains it on given points.
pub fn train_map(
    points: &[Vec<Float>],
    settings: &TrainingSettings,
    environment: &Environment,
) -> Result<TrainingOutput, String> {
    let dimension = points.first().map(|point| point.len()).ok_or_else(|| MapError::EmptyDataset.to_string())?;

    let mut map = Map::new(settings.grid_size, dimension, environment.random.as_ref())
        .map_err(|err| format!("cannot create map: '{err}'"))?;
    let initial_state = get_map_state(&map);

    let config = create_training_config(settings, environment);
    let result = map.train(points, &config, environment).map_err(|err| format!("cannot train map: '{err}'"))?;

    let quantization_error = get_quantization_error(&map, points).map_err(|err| err.to_string())?;

    Ok(TrainingOutput { map, initial_state, result, quantization_error })
}

fn create_training_config(settings: &TrainingSettings, environment: &Environment) -> TrainingConfig {
    let builder = TrainingConfigBuilder::default()
        .with_iterations(settings.iterations)
        .with_learning_rate(settings.learning_rate)
        .with_radius(settings.radius)
        .with_telemetry(TelemetryMode::OnlyMetrics { track_every: settings.progress_period });

    if settings.progress_period > 0 {
        let logger = environment.logger.clone();
        builder
            .with_progress(
                settings.progress_period,
                Arc::new(move |current: usize, total: usize| logger(format!("progress {current}/{total}").as_str())),
            )
            .build()
    } else {
        builder.build()
    }
}
