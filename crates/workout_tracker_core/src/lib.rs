//! Workout metrics calculator: classify raw readings into one of three
//! workout kinds and derive distance, average speed and calorie expenditure.

use thiserror::Error;

pub mod batch;
pub mod reading;
pub mod report;

pub use batch::{OutputLine, process_packages};
pub use reading::{WorkoutReading, classify};
pub use report::WorkoutReport;

/// Per-entry classification errors. Both kinds are recoverable: the caller
/// skips the offending entry and continues with the rest of the batch.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("unknown workout type \"{tag}\"")]
    UnknownWorkoutType { tag: String },

    #[error("malformed reading for \"{tag}\": {reason}")]
    MalformedReading { tag: String, reason: String },
}

impl WorkoutError {
    /// The workout-type tag of the entry that failed to classify.
    pub fn tag(&self) -> &str {
        match self {
            WorkoutError::UnknownWorkoutType { tag } => tag,
            WorkoutError::MalformedReading { tag, .. } => tag,
        }
    }
}
