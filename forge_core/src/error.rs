//! Error types for the forge_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for forge_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Action targeted a day id not present in the schedule
    #[error("unknown day id '{0}'")]
    UnknownDay(String),

    /// Exercise completion targeted an index outside the day's exercise list
    #[error("exercise index {index} out of range for day '{day}' ({len} exercises)")]
    ExerciseOutOfRange {
        day: String,
        index: usize,
        len: usize,
    },

    /// Day selected for training was already fully completed
    #[error("day '{0}' is already completed")]
    DayAlreadyComplete(String),

    /// Day selected for training is still locked by its predecessor
    #[error("day '{0}' is locked; complete the previous day first")]
    DayLocked(String),

    /// State management error
    #[error("State error: {0}")]
    State(String),
}
