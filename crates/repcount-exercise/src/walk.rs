//! Step counting from alternating knee positions.
//!
//! Here `in_progress` records which knee is expected to cross next: false
//! waits for the left knee to pass left of the right knee, true waits for
//! it to pass back. Every crossing is one step.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState};

use crate::classifier::{ExerciseClassifier, Transition};

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkClassifier;

impl WalkClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ExerciseClassifier for WalkClassifier {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Walk
    }

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition {
        let landmarks = snapshot.landmarks();
        let (left, right) = (landmarks.left_knee.x, landmarks.right_knee.x);
        let mut transition = Transition::unchanged(state);

        let crossed = if state.in_progress {
            left > right
        } else {
            left < right
        };
        if crossed {
            transition.count_rep(ExerciseKind::Walk);
            transition.state.in_progress = !state.in_progress;
        }

        transition
    }
}
