//! Routes a frame to the classifier for an exercise kind.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, Result};

use crate::arm_stretch::ArmStretchClassifier;
use crate::classifier::{ExerciseClassifier, Transition};
use crate::config::ClassifierConfig;
use crate::lunges::LungesClassifier;
use crate::push_up::PushUpClassifier;
use crate::squat::SquatClassifier;
use crate::walk::WalkClassifier;

/// Holds one classifier per exercise kind
#[derive(Debug, Clone)]
pub struct ExerciseDispatcher {
    push_up: PushUpClassifier,
    squat: SquatClassifier,
    arm_stretch: ArmStretchClassifier,
    lunges: LungesClassifier,
    walk: WalkClassifier,
    /// Lunge knee memory for the tag-based entry point
    lunge_knee_angle: Option<f64>,
}

impl ExerciseDispatcher {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            push_up: PushUpClassifier::new(config),
            squat: SquatClassifier::new(config),
            arm_stretch: ArmStretchClassifier::new(),
            lunges: LungesClassifier::new(config),
            walk: WalkClassifier::new(),
            lunge_knee_angle: None,
        }
    }

    pub fn classifier(&self, kind: ExerciseKind) -> &dyn ExerciseClassifier {
        match kind {
            ExerciseKind::PushUp => &self.push_up,
            ExerciseKind::Squat => &self.squat,
            ExerciseKind::ArmStretch => &self.arm_stretch,
            ExerciseKind::Lunges => &self.lunges,
            ExerciseKind::Walk => &self.walk,
        }
    }

    /// Classify one frame with caller-owned state
    pub fn classify(
        &self,
        kind: ExerciseKind,
        snapshot: &AngleSnapshot,
        state: ExerciseState,
    ) -> Transition {
        tracing::debug!(exercise = %kind, counter = state.counter, "classifying frame");
        let transition = self.classifier(kind).classify(snapshot, state);
        if transition.counted_from(&state) {
            tracing::debug!(
                exercise = %kind,
                counter = transition.state.counter,
                "repetition confirmed"
            );
        }
        transition
    }

    /// Tag-based entry point returning `(counter, in_progress, message)`
    ///
    /// The message is empty when no advisory applies. Lunge knee memory is
    /// kept inside the dispatcher between calls. Unknown tags fail before
    /// anything is touched.
    pub fn calculate_exercise(
        &mut self,
        tag: &str,
        snapshot: &AngleSnapshot,
        counter: u32,
        in_progress: bool,
    ) -> Result<(u32, bool, String)> {
        let kind: ExerciseKind = tag.parse()?;

        let mut state = ExerciseState::with_progress(counter, in_progress);
        if kind == ExerciseKind::Lunges {
            state.last_knee_angle = self.lunge_knee_angle;
        }

        let transition = self.classify(kind, snapshot, state);
        if kind == ExerciseKind::Lunges {
            self.lunge_knee_angle = transition.state.last_knee_angle;
        }

        Ok((
            transition.state.counter,
            transition.state.in_progress,
            transition.message(),
        ))
    }

    /// Forget lunge knee memory, e.g. when a new session starts
    pub fn reset(&mut self) {
        self.lunge_knee_angle = None;
    }
}

impl Default for ExerciseDispatcher {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::test_support::snapshot;
    use repcount_core::{BodyLandmarks, Error, JointAngles, Landmark2D};

    /// Deterministic xorshift stream for frame sweeps
    struct FrameStream(u64);

    impl FrameStream {
        fn unit(&mut self) -> f64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }

        fn angle(&mut self) -> f64 {
            // Bias towards whole degrees so band edges get hit
            if self.unit() < 0.5 {
                (self.unit() * 180.0).round()
            } else {
                self.unit() * 180.0
            }
        }

        fn point(&mut self) -> Landmark2D {
            Landmark2D::new(self.unit(), self.unit())
        }

        fn next_snapshot(&mut self) -> AngleSnapshot {
            let angles = JointAngles::new(self.angle(), self.angle(), self.angle(), self.angle());
            let landmarks = BodyLandmarks {
                left_shoulder: self.point(),
                left_hip: self.point(),
                left_knee: self.point(),
                right_knee: self.point(),
                left_ankle: self.point(),
                right_ankle: self.point(),
            };
            AngleSnapshot::new(angles, landmarks).unwrap()
        }
    }

    #[test]
    fn test_routes_by_kind() {
        let dispatcher = ExerciseDispatcher::default();
        for kind in ExerciseKind::ALL {
            assert_eq!(dispatcher.classifier(kind).kind(), kind);
        }
    }

    #[test]
    fn test_calculate_exercise_push_up() {
        let mut dispatcher = ExerciseDispatcher::default();
        let bottom = snapshot(85.0, 30.0, 155.0, 170.0);
        let (counter, in_progress, message) = dispatcher
            .calculate_exercise("push-up", &bottom, 0, false)
            .unwrap();
        assert_eq!((counter, in_progress), (1, true));
        assert_eq!(message, "Push-up 1 done");

        let (counter, in_progress, message) = dispatcher
            .calculate_exercise("push-up", &bottom, counter, in_progress)
            .unwrap();
        assert_eq!((counter, in_progress), (1, true));
        assert!(message.is_empty());
    }

    #[test]
    fn test_counter_never_decreases() {
        let dispatcher = ExerciseDispatcher::default();
        for kind in ExerciseKind::ALL {
            let mut frames = FrameStream(0x9E37_79B9_7F4A_7C15);
            let mut state = ExerciseState::new();
            for _ in 0..5_000 {
                let next = dispatcher.classify(kind, &frames.next_snapshot(), state).state;
                assert!(
                    next.counter == state.counter || next.counter == state.counter + 1,
                    "{kind}: counter went from {} to {}",
                    state.counter,
                    next.counter
                );
                state = next;
            }
        }
    }

    #[test]
    fn test_counter_at_max_does_not_overflow() {
        let mut dispatcher = ExerciseDispatcher::default();
        let bottom = snapshot(85.0, 30.0, 155.0, 170.0);
        let (counter, in_progress, message) = dispatcher
            .calculate_exercise("push-up", &bottom, u32::MAX, false)
            .unwrap();
        assert_eq!((counter, in_progress), (u32::MAX, true));
        assert_eq!(message, format!("Push-up {} done", u32::MAX));
    }

    #[test]
    fn test_unknown_tag_fails() {
        let mut dispatcher = ExerciseDispatcher::default();
        let frame = snapshot(92.0, 30.0, 170.0, 92.0);
        for tag in ["jumping-jacks", "", "PUSH-UP", "lunge"] {
            let err = dispatcher.calculate_exercise(tag, &frame, 4, true).unwrap_err();
            assert!(matches!(err, Error::UnsupportedExerciseKind(ref t) if t == tag));
        }
        // Lunge memory untouched: the first real lunge frame still counts
        let (counter, _, _) = dispatcher
            .calculate_exercise("lunges", &frame, 0, false)
            .unwrap();
        assert_eq!(counter, 1);
    }

    #[test]
    fn test_lunge_memory_threaded_between_calls() {
        let mut dispatcher = ExerciseDispatcher::default();
        let mut counter = 0;
        let mut in_progress = false;
        for knee in [92.0, 115.0, 97.0, 92.0] {
            let frame = snapshot(170.0, 20.0, 170.0, knee);
            (counter, in_progress, _) = dispatcher
                .calculate_exercise("lunges", &frame, counter, in_progress)
                .unwrap();
        }
        assert_eq!(counter, 1);

        dispatcher.reset();
        let frame = snapshot(170.0, 20.0, 170.0, 92.0);
        let (counter, _, _) = dispatcher
            .calculate_exercise("lunges", &frame, counter, false)
            .unwrap();
        assert_eq!(counter, 2);
    }
}
