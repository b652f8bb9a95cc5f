//! Error types for the repetition counting system.

use thiserror::Error;

use crate::types::ExerciseKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported exercise kind: {0:?}")]
    UnsupportedExerciseKind(String),

    #[error("Malformed angle snapshot: {field} = {value}")]
    MalformedAngleSnapshot { field: &'static str, value: f64 },

    #[error("Exercise not tracked in this session: {0}")]
    ExerciseNotTracked(ExerciseKind),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub fn malformed(field: &'static str, value: f64) -> Self {
        Error::MalformedAngleSnapshot { field, value }
    }

    /// Whether the error concerns a single frame and leaves state untouched
    pub fn is_frame_error(&self) -> bool {
        matches!(self, Error::MalformedAngleSnapshot { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
