//! Error types for timeprogram operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeprogramError {
    /// A time string did not match the 24h `HH:MM` pattern, or a weekday
    /// key was not one of `mon`..`sun`.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured entity is missing from host state.
    #[error("Entity {0} not found")]
    NotFound(String),

    /// A stop time was picked that is not strictly after the start time.
    #[error("Stop time {stop} must be after start time {start}")]
    ValidationRejected { start: String, stop: String },

    /// An add flow received an answer its current step does not take.
    #[error("Invalid add step: {0}")]
    InvalidStep(String),

    /// A device register string could not be decoded.
    #[error("Invalid timeprogram register: {0}")]
    Register(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimeprogramError>;
