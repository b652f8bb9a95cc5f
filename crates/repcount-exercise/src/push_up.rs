//! Push-up counting.
//!
//! A repetition counts at the bottom of the movement: elbows bent to 90° or
//! less, shoulders tucked, hips straight. The in-progress flag then holds
//! until the arms re-extend with an open shoulder and straight hips.
//!
//! ## Arm extension
//!
//! The elbow angle is mapped linearly from [90°, 160°] onto [0, 100] and
//! clamped, so 90° or less reads 0 (fully bent) and 160° or more reads 100
//! (locked out). Bottom-position checks only run below 30.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, FormCue};

use crate::classifier::{within, ExerciseClassifier, Transition};
use crate::config::ClassifierConfig;

const BENT_ELBOW: f64 = 90.0;
const EXTENDED_ELBOW: f64 = 160.0;

/// Extension below this enters the bottom-position checks
pub const BOTTOM_EXTENSION_PERCENT: f64 = 30.0;

/// Map the elbow angle onto 0 (fully bent) .. 100 (fully extended)
pub fn arm_extension_percent(elbow_angle: f64) -> f64 {
    ((elbow_angle - BENT_ELBOW) / (EXTENDED_ELBOW - BENT_ELBOW) * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy)]
pub struct PushUpClassifier {
    standing_margin: f64,
}

impl PushUpClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            standing_margin: config.standing_margin,
        }
    }

    /// Hip sitting well below the shoulder in image space means upright
    fn is_standing(&self, snapshot: &AngleSnapshot) -> bool {
        let landmarks = snapshot.landmarks();
        landmarks.left_hip.y - landmarks.left_shoulder.y > self.standing_margin
    }

    /// Which single joint is off while the other two roughly hold
    fn bottom_correction(elbow: f64, shoulder: f64, hip: f64) -> Option<FormCue> {
        let shoulder_tucked = within(shoulder, 10.0, 45.0);
        let elbow_near_bent = within(elbow, 10.0, 100.0);

        // The three bands are disjoint, so at most one cue can apply
        if elbow > 100.0 && shoulder_tucked && hip > 140.0 {
            Some(FormCue::ElbowTooLarge)
        } else if elbow_near_bent && shoulder > 45.0 && hip > 140.0 {
            Some(FormCue::ShoulderTooLarge)
        } else if elbow_near_bent && shoulder_tucked && hip <= 140.0 {
            Some(FormCue::HipTooSmall)
        } else {
            None
        }
    }
}

impl Default for PushUpClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl ExerciseClassifier for PushUpClassifier {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::PushUp
    }

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition {
        if self.is_standing(snapshot) {
            return Transition::unchanged(state);
        }

        let angles = snapshot.angles();
        let (elbow, shoulder, hip) = (angles.elbow, angles.shoulder, angles.hip);
        let mut transition = Transition::unchanged(state);

        if arm_extension_percent(elbow) < BOTTOM_EXTENSION_PERCENT {
            if !state.in_progress {
                if within(elbow, 10.0, 90.0) && within(shoulder, 10.0, 45.0) && hip > 150.0 {
                    transition.count_rep(ExerciseKind::PushUp);
                    transition.state.in_progress = true;
                } else if let Some(cue) = Self::bottom_correction(elbow, shoulder, hip) {
                    transition.correct(ExerciseKind::PushUp, cue);
                }
            }
        } else if elbow > 90.0 && shoulder > 45.0 && hip > 150.0 && state.in_progress {
            transition.state.in_progress = false;
        }

        transition
    }
}
