//! Fundamental types for the repetition counting system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Workout session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

/// Closed set of supported exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    PushUp,
    Squat,
    ArmStretch,
    Lunges,
    Walk,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 5] = [
        ExerciseKind::PushUp,
        ExerciseKind::Squat,
        ExerciseKind::ArmStretch,
        ExerciseKind::Lunges,
        ExerciseKind::Walk,
    ];

    /// Wire tag used by callers to select an exercise
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::PushUp => "push-up",
            ExerciseKind::Squat => "squat",
            ExerciseKind::ArmStretch => "arm-stretch",
            ExerciseKind::Lunges => "lunges",
            ExerciseKind::Walk => "walk",
        }
    }

    /// Human-readable label used in feedback text
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::PushUp => "Push-up",
            ExerciseKind::Squat => "Squat",
            ExerciseKind::ArmStretch => "Arm stretch",
            ExerciseKind::Lunges => "Lunges",
            ExerciseKind::Walk => "Walk",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        ExerciseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| Error::UnsupportedExerciseKind(tag.to_string()))
    }
}

/// Per-exercise state threaded by the caller across frames
///
/// `in_progress` is the debounce flag for most exercises. For walking it
/// records which knee is expected to lead next.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseState {
    /// Repetitions completed so far
    pub counter: u32,
    /// Mid-repetition flag
    pub in_progress: bool,
    /// Knee angle of the previous classified frame (lunges only)
    pub last_knee_angle: Option<f64>,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(counter: u32, in_progress: bool) -> Self {
        Self {
            counter,
            in_progress,
            last_knee_angle: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_kind_tags() {
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.as_str().parse::<ExerciseKind>().unwrap(), kind);
        }
        assert!(matches!(
            "burpee".parse::<ExerciseKind>(),
            Err(Error::UnsupportedExerciseKind(tag)) if tag == "burpee"
        ));
        // Tags are case sensitive
        assert!("Push-Up".parse::<ExerciseKind>().is_err());
    }

    #[test]
    fn test_exercise_kind_serde_matches_tags() {
        for kind in ExerciseKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_state_reset() {
        let mut state = ExerciseState {
            counter: 4,
            in_progress: true,
            last_knee_angle: Some(92.0),
        };
        state.reset();
        assert_eq!(state, ExerciseState::new());
    }
}
