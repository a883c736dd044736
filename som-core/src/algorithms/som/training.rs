#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/training_test.rs"]
mod training_test;

use super::*;
use crate::telemetry::{ProgressObserver, Telemetry, TelemetryMetrics, TelemetryMode};
use crate::utils::Environment;

/// Specifies training parameters.
#[derive(Clone)]
pub struct TrainingConfig {
    /// Total amount of training iterations.
    pub iterations: usize,
    /// Initial learning rate.
    pub learning_rate: Float,
    /// Initial neighbourhood radius.
    pub radius: Float,
    /// Telemetry mode.
    pub telemetry: TelemetryMode,
    /// How often progress observer is notified.
    pub progress_period: usize,
    /// An optional progress observer.
    pub progress_observer: Option<ProgressObserver>,
}

/// Provides configurable way to build a training config using fluent interface style.
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl Default for TrainingConfigBuilder {
    fn default() -> Self {
        Self {
            config: TrainingConfig {
                iterations: 4000,
                learning_rate: 0.02,
                radius: 4.,
                telemetry: TelemetryMode::None,
                progress_period: 100,
                progress_observer: None,
            },
        }
    }
}

impl TrainingConfigBuilder {
    /// Sets total amount of iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets initial learning rate.
    pub fn with_learning_rate(mut self, learning_rate: Float) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Sets initial neighbourhood radius.
    pub fn with_radius(mut self, radius: Float) -> Self {
        self.config.radius = radius;
        self
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Sets progress observer and how often it is notified.
    pub fn with_progress(mut self, period: usize, observer: ProgressObserver) -> Self {
        self.config.progress_period = period;
        self.config.progress_observer = Some(observer);
        self
    }

    /// Builds a training config.
    pub fn build(self) -> TrainingConfig {
        self.config
    }
}

/// Keeps result of the training.
pub struct TrainingResult {
    /// Amount of completed iterations.
    pub iterations: usize,
    /// True if training was stopped by the environment's quota.
    pub is_interrupted: bool,
    /// Collected metrics, if telemetry mode includes them.
    pub metrics: Option<TelemetryMetrics>,
}

impl Map {
    /// Trains the map on given data. Each iteration picks a random sample, finds its winner node
    /// and moves every node inside the square window around the winner towards the sample.
    /// Learning rate and window radius decay linearly with training progress.
    ///
    /// All parameters and data are validated before the map is modified.
    pub fn train<I: Input>(
        &mut self,
        data: &[I],
        config: &TrainingConfig,
        environment: &Environment,
    ) -> Result<TrainingResult, MapError> {
        self.validate(data, config)?;

        let total = config.iterations;
        let last_index = i32::try_from(data.len() - 1)
            .map_err(|_| MapError::InvalidParameter(format!("dataset is too large: {}", data.len())))?;

        let mut telemetry = Telemetry::new(config.telemetry.clone());
        if let Some(observer) = config.progress_observer.clone() {
            telemetry = telemetry.with_observer(config.progress_period, observer);
        }
        telemetry.start();

        let mut iterations = 0;
        let mut is_interrupted = false;

        for iteration in 0..total {
            if environment.is_quota_reached() {
                is_interrupted = true;
                break;
            }

            let factor = get_decay_factor(iteration, total);
            let learning_rate = get_learning_rate(config.learning_rate, factor);
            let radius = get_radius(config.radius, factor);

            telemetry.on_iteration(iteration, total, learning_rate, radius);

            let sample = data[environment.random.uniform_int(0, last_index) as usize].weights();
            let winner = self.find_winner(sample);
            let (rows, cols) = get_neighbourhood(&winner, radius, self.size());

            self.adjust(rows, cols, sample, learning_rate);

            iterations = iteration + 1;
        }

        if is_interrupted {
            (environment.logger)(format!("training is interrupted at iteration {iterations} of {total}").as_str());
        }

        let metrics = telemetry.on_result(iterations, total);

        Ok(TrainingResult { iterations, is_interrupted, metrics })
    }

    fn validate<I: Input>(&self, data: &[I], config: &TrainingConfig) -> Result<(), MapError> {
        if data.is_empty() {
            return Err(MapError::EmptyDataset);
        }

        if config.iterations == 0 {
            return Err(MapError::InvalidIterationCount);
        }

        if !config.learning_rate.is_finite() || config.learning_rate < 0. {
            return Err(MapError::invalid_parameter("learning rate", config.learning_rate));
        }

        if !config.radius.is_finite() || config.radius < 0. {
            return Err(MapError::invalid_parameter("radius", config.radius));
        }

        if config.progress_observer.is_some() && config.progress_period == 0 {
            return Err(MapError::InvalidParameter("progress period should be positive".to_string()));
        }

        data.iter().enumerate().try_for_each(|(index, input)| {
            let weights = input.weights();
            self.ensure_dimension(weights)?;

            if weights.iter().all(|value| value.is_finite()) { Ok(()) } else { Err(MapError::NonFiniteInput { index }) }
        })
    }
}
