//! # Repcount-Session
//!
//! Session layer around the exercise classifiers.
//!
//! - [`WorkoutSession`] owns one exercise state per tracked kind and
//!   delivers feedback to a [`FeedbackSink`](repcount_core::FeedbackSink)
//! - [`SessionConfig`] loads from a file and `REPCOUNT_` environment
//!   variables
//! - [`replay_jsonl`] feeds recorded frames through a session

pub mod config;
pub mod replay;
pub mod session;

pub use config::*;
pub use replay::*;
pub use session::*;
