//! This module reimports a common used types.

pub use crate::algorithms::som::get_map_state;
pub use crate::algorithms::som::Coordinate;
pub use crate::algorithms::som::InitRange;
pub use crate::algorithms::som::Input;
pub use crate::algorithms::som::Map;
pub use crate::algorithms::som::MapError;
pub use crate::algorithms::som::MapState;
pub use crate::algorithms::som::TrainingConfig;
pub use crate::algorithms::som::TrainingConfigBuilder;
pub use crate::algorithms::som::TrainingResult;

pub use crate::telemetry::ProgressObserver;
pub use crate::telemetry::TelemetryMetrics;
pub use crate::telemetry::TelemetryMode;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Random;
