//! Lunge counting.
//!
//! A lunge counts when the front knee settles in [90°, 94°]. A reading in
//! that band only counts on the first observation or when the knee moved
//! more than `min_knee_delta` since the previous frame, so a body parked in
//! the band cannot rack up reps. Straightening past 110° or collapsing below
//! 50° re-arms the counter.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, FormCue};

use crate::classifier::{strictly_within, ExerciseClassifier, Transition};
use crate::config::ClassifierConfig;

#[derive(Debug, Clone, Copy)]
pub struct LungesClassifier {
    min_knee_delta: f64,
}

impl LungesClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            min_knee_delta: config.min_knee_delta,
        }
    }

    fn knee_moved(&self, knee: f64, previous: Option<f64>) -> bool {
        match previous {
            None => true,
            Some(previous) => (knee - previous).abs() > self.min_knee_delta,
        }
    }
}

impl Default for LungesClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl ExerciseClassifier for LungesClassifier {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Lunges
    }

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition {
        let knee = snapshot.angles().knee;
        let mut transition = Transition::unchanged(state);

        if knee < 50.0 || knee > 110.0 {
            transition.state.in_progress = false;
        }

        if !transition.state.in_progress {
            if strictly_within(knee, 100.0, 110.0) {
                transition.correct(ExerciseKind::Lunges, FormCue::KneeTooLarge);
            }
            if (90.0..=94.0).contains(&knee) && self.knee_moved(knee, state.last_knee_angle) {
                transition.state.in_progress = true;
                transition.count_rep(ExerciseKind::Lunges);
            }
        }

        transition.state.last_knee_angle = Some(knee);
        transition
    }
}
