//! Squat counting.
//!
//! Standing tall (knee > 169°, hip > 160°) re-arms the counter. A squat
//! counts once knee and hip are both bent to 120° or less. The two
//! corrective bands are checked first and the bottom check last.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, FormCue};

use crate::classifier::{within, ExerciseClassifier, Transition};
use crate::config::ClassifierConfig;

const STANDING_KNEE: f64 = 169.0;
const STANDING_HIP: f64 = 160.0;
const BOTTOM_ANGLE: f64 = 120.0;

#[derive(Debug, Clone, Copy)]
pub struct SquatClassifier {
    ankle_tolerance: f64,
}

impl SquatClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            ankle_tolerance: config.ankle_tolerance,
        }
    }

    /// One foot lifted off the floor
    fn feet_uneven(&self, snapshot: &AngleSnapshot) -> bool {
        let landmarks = snapshot.landmarks();
        (landmarks.left_ankle.y - landmarks.right_ankle.y).abs() > self.ankle_tolerance
    }
}

impl Default for SquatClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl ExerciseClassifier for SquatClassifier {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Squat
    }

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition {
        if self.feet_uneven(snapshot) {
            return Transition::unchanged(state);
        }

        let angles = snapshot.angles();
        let (knee, hip) = (angles.knee, angles.hip);
        let mut transition = Transition::unchanged(state);

        if knee > STANDING_KNEE && hip > STANDING_HIP {
            transition.state.in_progress = false;
        }

        if !transition.state.in_progress {
            if within(knee, BOTTOM_ANGLE, STANDING_KNEE) && within(hip, 0.0, BOTTOM_ANGLE) {
                transition.correct(ExerciseKind::Squat, FormCue::KneeTooLarge);
            }
            if within(knee, 0.0, BOTTOM_ANGLE) && hip > BOTTOM_ANGLE {
                transition.correct(ExerciseKind::Squat, FormCue::HipTooLarge);
            }
            if within(knee, 0.0, BOTTOM_ANGLE) && within(hip, 0.0, BOTTOM_ANGLE) {
                transition.state.in_progress = true;
                transition.count_rep(ExerciseKind::Squat);
            }
        }

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::test_support::{point, snapshot, snapshot_with};
    use repcount_core::{FeedbackEvent, JointAngles};

    fn run(frames: &[(f64, f64)]) -> (ExerciseState, Vec<Transition>) {
        let classifier = SquatClassifier::default();
        let mut state = ExerciseState::new();
        let mut transitions = Vec::new();
        for &(knee, hip) in frames {
            let transition = classifier.classify(&snapshot(170.0, 20.0, hip, knee), state);
            state = transition.state;
            transitions.push(transition);
        }
        (state, transitions)
    }

    #[test]
    fn test_squat_cycle() {
        let (state, transitions) = run(&[
            (175.0, 170.0),
            (140.0, 130.0),
            (100.0, 95.0),
            (90.0, 85.0),
            (140.0, 140.0),
            (175.0, 170.0),
            (110.0, 100.0),
        ]);
        assert_eq!(state.counter, 2);
        assert_eq!(transitions[2].state.counter, 1);
        assert!(transitions[3].feedback.is_empty());
        assert!(!transitions[5].state.in_progress);
        assert_eq!(transitions[6].message(), "Squat 2 done");
    }

    #[test]
    fn test_partial_stand_does_not_rearm() {
        let (state, _) = run(&[(100.0, 95.0), (165.0, 165.0), (100.0, 95.0)]);
        assert_eq!(state.counter, 1);
    }

    #[test]
    fn test_knee_too_large() {
        let (state, transitions) = run(&[(140.0, 100.0)]);
        assert_eq!(state.counter, 0);
        assert_eq!(
            transitions[0].feedback.events(),
            &[FeedbackEvent::Correction {
                exercise: ExerciseKind::Squat,
                rep: 1,
                cue: FormCue::KneeTooLarge
            }]
        );
    }

    #[test]
    fn test_hip_too_large() {
        let (state, transitions) = run(&[(100.0, 130.0)]);
        assert_eq!(state.counter, 0);
        assert_eq!(transitions[0].message(), "Hip angle too large.");
    }

    #[test]
    fn test_band_edges() {
        // Knee exactly 120 counts, knee exactly 169 is still the corrective band
        let (state, _) = run(&[(120.0, 120.0)]);
        assert_eq!(state.counter, 1);

        let (state, transitions) = run(&[(169.0, 110.0)]);
        assert_eq!(state.counter, 0);
        assert!(transitions[0].feedback.has_correction());

        // Zero degree angles sit outside every band
        let (state, transitions) = run(&[(0.0, 0.0)]);
        assert_eq!(state.counter, 0);
        assert!(transitions[0].feedback.is_empty());
    }

    #[test]
    fn test_uneven_feet_never_count() {
        let classifier = SquatClassifier::default();
        let angle_grid = [0.0, 60.0, 100.0, 120.0, 150.0, 170.0, 180.0];
        for &knee in &angle_grid {
            for &hip in &angle_grid {
                let uneven = snapshot_with(JointAngles::new(170.0, 20.0, hip, knee), |l| {
                    l.left_ankle = point(0.4, 0.95);
                    l.right_ankle = point(0.6, 0.75);
                });
                for prior in [ExerciseState::new(), ExerciseState::with_progress(3, true)] {
                    let transition = classifier.classify(&uneven, prior);
                    assert_eq!(transition.state, prior);
                    assert!(transition.feedback.is_empty());
                }
            }
        }
    }
}
