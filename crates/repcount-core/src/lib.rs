//! # Repcount-Core
//!
//! Core types for turning per-frame joint angles into exercise
//! repetition counts and form feedback.
//!
//! Angles arrive from an external pose/angle layer through the
//! [`AngleProvider`] trait and are frozen into a validated
//! [`AngleSnapshot`]. Each exercise keeps an [`ExerciseState`] that the
//! caller threads from frame to frame.

pub mod error;
pub mod feedback;
pub mod snapshot;
pub mod types;

pub use error::{Error, Result};
pub use feedback::*;
pub use snapshot::*;
pub use types::*;
