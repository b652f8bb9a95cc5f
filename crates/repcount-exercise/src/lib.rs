//! # Repcount-Exercise
//!
//! Per-exercise repetition state machines.
//!
//! Each classifier is a pure transition:
//!
//! ```text
//! (AngleSnapshot, ExerciseState) -> (ExerciseState, Feedback)
//! ```
//!
//! ## Exercises
//!
//! - **Push-up**: counts at the bottom, re-arms when the arms lock out
//! - **Squat**: counts when knee and hip bend to 120°, re-arms standing tall
//! - **Arm stretch**: counts a straight arm raised overhead
//! - **Lunges**: counts a knee in [90°, 94°] reached through real motion
//! - **Walk**: counts alternating knee crossings
//!
//! [`ExerciseDispatcher`] picks the classifier for an [`ExerciseKind`] or a
//! string tag.
//!
//! [`ExerciseKind`]: repcount_core::ExerciseKind

pub mod arm_stretch;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod lunges;
pub mod push_up;
pub mod squat;
pub mod walk;

pub use arm_stretch::*;
pub use classifier::*;
pub use config::*;
pub use dispatcher::*;
pub use lunges::*;
pub use push_up::*;
pub use squat::*;
pub use walk::*;
