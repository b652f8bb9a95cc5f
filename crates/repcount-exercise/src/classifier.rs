//! Classifier trait and the transition value every classifier returns.

use repcount_core::{AngleSnapshot, ExerciseKind, ExerciseState, Feedback, FeedbackEvent, FormCue};

/// Result of classifying one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub state: ExerciseState,
    pub feedback: Feedback,
}

impl Transition {
    /// State passed through untouched, no feedback
    pub fn unchanged(state: ExerciseState) -> Self {
        Self {
            state,
            feedback: Feedback::new(),
        }
    }

    /// Whether this transition counted a repetition relative to `previous`
    pub fn counted_from(&self, previous: &ExerciseState) -> bool {
        self.state.counter > previous.counter
    }

    pub fn message(&self) -> String {
        self.feedback.message()
    }

    /// Confirm one repetition: bump the counter and record the event
    ///
    /// The counter saturates at `u32::MAX`.
    pub(crate) fn count_rep(&mut self, exercise: ExerciseKind) {
        self.state.counter = self.state.counter.saturating_add(1);
        self.feedback.push(FeedbackEvent::RepCompleted {
            exercise,
            count: self.state.counter,
        });
    }

    /// Record a form cue against the repetition currently being attempted
    pub(crate) fn correct(&mut self, exercise: ExerciseKind, cue: FormCue) {
        self.feedback.push(FeedbackEvent::Correction {
            exercise,
            rep: self.state.counter.saturating_add(1),
            cue,
        });
    }
}

/// Per-exercise state machine
///
/// Implementations are pure: the output depends only on the snapshot and
/// the incoming state.
pub trait ExerciseClassifier: Send + Sync {
    fn kind(&self) -> ExerciseKind;

    fn classify(&self, snapshot: &AngleSnapshot, state: ExerciseState) -> Transition;
}

/// `low < value <= high`
pub(crate) fn within(value: f64, low: f64, high: f64) -> bool {
    value > low && value <= high
}

/// `low < value < high`
pub(crate) fn strictly_within(value: f64, low: f64, high: f64) -> bool {
    value > low && value < high
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_helpers() {
        assert!(within(90.0, 10.0, 90.0));
        assert!(!within(10.0, 10.0, 90.0));
        assert!(strictly_within(91.0, 90.0, 150.0));
        assert!(!strictly_within(150.0, 90.0, 150.0));
    }

    #[test]
    fn test_transition_events() {
        let start = ExerciseState::with_progress(2, false);
        let mut transition = Transition::unchanged(start);
        transition.correct(ExerciseKind::Squat, FormCue::KneeTooLarge);
        assert!(!transition.counted_from(&start));
        assert_eq!(
            transition.feedback.events()[0],
            FeedbackEvent::Correction {
                exercise: ExerciseKind::Squat,
                rep: 3,
                cue: FormCue::KneeTooLarge,
            }
        );

        transition.count_rep(ExerciseKind::Squat);
        assert!(transition.counted_from(&start));
        assert_eq!(transition.state.counter, 3);
    }

    #[test]
    fn test_counter_saturates() {
        let start = ExerciseState::with_progress(u32::MAX, false);
        let mut transition = Transition::unchanged(start);
        transition.correct(ExerciseKind::Walk, FormCue::KneeTooLarge);
        transition.count_rep(ExerciseKind::Walk);

        assert_eq!(transition.state.counter, u32::MAX);
        assert!(!transition.counted_from(&start));
        assert_eq!(
            transition.feedback.events(),
            &[
                FeedbackEvent::Correction {
                    exercise: ExerciseKind::Walk,
                    rep: u32::MAX,
                    cue: FormCue::KneeTooLarge,
                },
                FeedbackEvent::RepCompleted {
                    exercise: ExerciseKind::Walk,
                    count: u32::MAX,
                },
            ]
        );
    }
}
