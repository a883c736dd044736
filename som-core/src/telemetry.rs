//! A module which provides the logic to collect metrics about training and simple logging.

#[cfg(test)]
#[path = "../tests/unit/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger, Timer};
use std::sync::Arc;

/// An observer which is notified about training progress with (current iteration, total iterations).
/// It is purely informational and has no effect on training.
pub type ProgressObserver = Arc<dyn Fn(usize, usize)>;

/// Encapsulates different measurements regarding training.
pub struct TelemetryMetrics {
    /// Training duration in milliseconds.
    pub duration: usize,
    /// Total amount of completed iterations.
    pub iterations: usize,
    /// Speed: iterations per second.
    pub speed: Float,
    /// Decay schedule progress.
    pub progress: Vec<TelemetryProgress>,
}

/// Represents information about a tracked iteration.
pub struct TelemetryProgress {
    /// Iteration sequence number.
    pub iteration: usize,
    /// Time since training started, in seconds.
    pub timestamp: Float,
    /// Learning rate used at the iteration.
    pub learning_rate: Float,
    /// Neighbourhood radius used at the iteration.
    pub radius: usize,
}

/// Specifies a telemetry mode. A zero period disables the corresponding activity.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often progress is logged.
        log_every: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often progress is tracked.
        track_every: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often progress is logged.
        log_every: usize,
        /// Specifies how often progress is tracked.
        track_every: usize,
    },
}

/// Provides way to collect metrics, notify progress observer and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    observer: Option<(usize, ProgressObserver)>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            metrics: TelemetryMetrics { duration: 0, iterations: 0, speed: 0., progress: vec![] },
            time: Timer::start(),
            mode,
            observer: None,
        }
    }

    /// Sets a progress observer which is called every `period` iterations.
    pub fn with_observer(mut self, period: usize, observer: ProgressObserver) -> Self {
        self.observer = Some((period, observer));
        self
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Reports an iteration which is about to be run with given decay parameters.
    pub fn on_iteration(&mut self, iteration: usize, total: usize, learning_rate: Float, radius: usize) {
        if let Some((period, observer)) = &self.observer {
            if is_due(iteration, *period) {
                observer(iteration, total);
            }
        }

        let (log_every, track_every) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_every, .. } => (*log_every, 0),
            TelemetryMode::OnlyMetrics { track_every } => (0, *track_every),
            TelemetryMode::All { log_every, track_every, .. } => (*log_every, *track_every),
        };

        if is_due(iteration, log_every) {
            self.log(
                format!(
                    "[{}s] iteration {} of {}, learning rate: {:.5}, radius: {}",
                    self.time.elapsed_secs(),
                    iteration,
                    total,
                    learning_rate,
                    radius
                )
                .as_str(),
            );
        }

        if is_due(iteration, track_every) {
            self.metrics.progress.push(TelemetryProgress {
                iteration,
                timestamp: self.time.elapsed_secs_as_float(),
                learning_rate,
                radius,
            });
        }
    }

    /// Reports final statistic and returns collected metrics, if metrics collection is enabled.
    pub fn on_result(mut self, iterations: usize, total: usize) -> Option<TelemetryMetrics> {
        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { iterations as Float / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] training completed {} of {} iterations, speed: {:.2} it/sec",
                self.time.elapsed_secs(),
                iterations,
                total,
                speed
            )
            .as_str(),
        );

        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => {
                self.metrics.duration = self.time.elapsed_millis() as usize;
                self.metrics.iterations = iterations;
                self.metrics.speed = speed;

                Some(self.metrics)
            }
            _ => None,
        }
    }

    fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => logger(message),
            TelemetryMode::All { logger, .. } => logger(message),
            _ => {}
        }
    }
}

fn is_due(iteration: usize, period: usize) -> bool {
    iteration.checked_rem(period) == Some(0)
}
