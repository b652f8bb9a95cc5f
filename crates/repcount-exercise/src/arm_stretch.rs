//! Overhead arm stretch counting.
//!
//! Dropping the arm (shoulder < 80°) or bending the elbow below 90° re-arms
//! the counter. The success check and the straight-elbow cue are evaluated
//! independently, so both may fire for the same frame.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, FormCue};

use crate::classifier::{strictly_within, ExerciseClassifier, Transition};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArmStretchClassifier;

impl ArmStretchClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ExerciseClassifier for ArmStretchClassifier {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::ArmStretch
    }

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition {
        let angles = snapshot.angles();
        let (shoulder, elbow) = (angles.shoulder, angles.elbow);
        let mut transition = Transition::unchanged(state);

        if shoulder < 80.0 || elbow < 90.0 {
            transition.state.in_progress = false;
        }

        if !transition.state.in_progress {
            if (90.0..=180.0).contains(&shoulder) && strictly_within(elbow, 150.0, 180.0) {
                transition.state.in_progress = true;
                transition.count_rep(ExerciseKind::ArmStretch);
            }
            if strictly_within(elbow, 90.0, 150.0) {
                transition.correct(ExerciseKind::ArmStretch, FormCue::KeepElbowStraight);
            }
        }

        transition
    }
}
