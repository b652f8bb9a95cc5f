//! Feedback events produced by classifiers and the sinks that deliver them.
//!
//! Classifiers never log. They return a [`Feedback`] value and the caller
//! decides where it goes: tracing, a UI overlay, or nowhere.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ExerciseKind;

/// Corrective form cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormCue {
    ElbowTooLarge,
    ShoulderTooLarge,
    HipTooSmall,
    HipTooLarge,
    KneeTooLarge,
    KeepElbowStraight,
}

impl FormCue {
    pub fn message(&self) -> &'static str {
        match self {
            FormCue::ElbowTooLarge => "Elbow angle too large.",
            FormCue::ShoulderTooLarge => "Shoulder angle too large.",
            FormCue::HipTooSmall => "Hip angle is too small.",
            FormCue::HipTooLarge => "Hip angle too large.",
            FormCue::KneeTooLarge => "Knee angle too large.",
            FormCue::KeepElbowStraight => "Try to keep your elbow straight.",
        }
    }
}

/// A single advisory emitted for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedbackEvent {
    /// A repetition was confirmed; `count` is the new counter value
    RepCompleted { exercise: ExerciseKind, count: u32 },
    /// Form needs adjusting before repetition `rep` can count
    Correction {
        exercise: ExerciseKind,
        rep: u32,
        cue: FormCue,
    },
}

impl FeedbackEvent {
    pub fn exercise(&self) -> ExerciseKind {
        match self {
            FeedbackEvent::RepCompleted { exercise, .. } => *exercise,
            FeedbackEvent::Correction { exercise, .. } => *exercise,
        }
    }

    pub fn is_correction(&self) -> bool {
        matches!(self, FeedbackEvent::Correction { .. })
    }

    pub fn message(&self) -> String {
        match self {
            FeedbackEvent::RepCompleted {
                exercise: ExerciseKind::Walk,
                count,
            } => format!("{count} step(s) completed"),
            FeedbackEvent::RepCompleted { exercise, count } => {
                format!("{} {count} done", exercise.label())
            }
            FeedbackEvent::Correction { cue, .. } => cue.message().to_string(),
        }
    }
}

impl fmt::Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered advisories for one classified frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feedback {
    events: Vec<FeedbackEvent>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: FeedbackEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    pub fn has_correction(&self) -> bool {
        self.events.iter().any(FeedbackEvent::is_correction)
    }

    /// All advisories joined into one line; empty when there are none
    pub fn message(&self) -> String {
        self.events
            .iter()
            .map(FeedbackEvent::message)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Destination for feedback events
pub trait FeedbackSink: Send + Sync {
    fn deliver(&self, event: &FeedbackEvent);

    fn deliver_all(&self, feedback: &Feedback) {
        for event in feedback.events() {
            self.deliver(event);
        }
    }
}

/// Logs confirmed repetitions at info and corrections at warn
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FeedbackSink for TracingSink {
    fn deliver(&self, event: &FeedbackEvent) {
        let exercise = event.exercise();
        match event {
            FeedbackEvent::RepCompleted { count, .. } => {
                tracing::info!(
                    target: "repcount::feedback",
                    exercise = %exercise,
                    rep = count,
                    "{}",
                    event
                );
            }
            FeedbackEvent::Correction { rep, .. } => {
                tracing::warn!(
                    target: "repcount::feedback",
                    exercise = %exercise,
                    rep = rep,
                    "{}",
                    event
                );
            }
        }
    }
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn deliver(&self, _event: &FeedbackEvent) {}
}

/// Keeps delivered events in memory, e.g. for an overlay to drain
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<FeedbackEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FeedbackEvent> {
        self.events.lock().clone()
    }

    pub fn drain(&self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl FeedbackSink for RecordingSink {
    fn deliver(&self, event: &FeedbackEvent) {
        self.events.lock().push(*event);
    }
}
