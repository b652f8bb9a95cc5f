//! Workout session owning one exercise state per tracked kind.

use parking_lot::Mutex;
use repcount_core::{
    AngleProvider, AngleSnapshot, Error, ExerciseKind, ExerciseState, FeedbackSink, NullSink,
    Result, SessionId, Timestamp, TracingSink,
};
use repcount_exercise::{ExerciseDispatcher, Transition};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::SessionConfig;

/// Serializable snapshot of session progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub started_at: Timestamp,
    pub counts: BTreeMap<ExerciseKind, u32>,
    pub total_reps: u32,
}

/// Tracks every configured exercise for one workout
///
/// Each kind's state sits behind its own lock: different kinds may be fed
/// from different threads, while frames of one kind are applied one at a
/// time in arrival order.
pub struct WorkoutSession {
    id: SessionId,
    started_at: Timestamp,
    dispatcher: ExerciseDispatcher,
    states: HashMap<ExerciseKind, Mutex<ExerciseState>>,
    sink: Arc<dyn FeedbackSink>,
}

impl WorkoutSession {
    pub fn new(config: &SessionConfig) -> Self {
        let sink: Arc<dyn FeedbackSink> = if config.log_feedback {
            Arc::new(TracingSink)
        } else {
            Arc::new(NullSink)
        };
        Self::with_sink(config, sink)
    }

    pub fn with_sink(config: &SessionConfig, sink: Arc<dyn FeedbackSink>) -> Self {
        let states = config
            .exercises
            .iter()
            .map(|kind| (*kind, Mutex::new(ExerciseState::new())))
            .collect();

        let session = Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            dispatcher: ExerciseDispatcher::new(&config.classifier),
            states,
            sink,
        };
        tracing::info!(
            "Started workout session {:?} tracking {} exercises",
            session.id,
            session.states.len()
        );
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn is_tracking(&self, kind: ExerciseKind) -> bool {
        self.states.contains_key(&kind)
    }

    /// Apply one validated frame to the state of `kind`
    pub fn process_frame(&self, kind: ExerciseKind, snapshot: &AngleSnapshot) -> Result<Transition> {
        let cell = self.states.get(&kind).ok_or(Error::ExerciseNotTracked(kind))?;

        let transition = {
            let mut state = cell.lock();
            let transition = self.dispatcher.classify(kind, snapshot, *state);
            *state = transition.state;
            transition
        };
        // Lock released first: sinks may read the session back
        self.sink.deliver_all(&transition.feedback);

        Ok(transition)
    }

    /// Capture a frame from an angle provider and apply it
    ///
    /// A malformed frame is rejected with a warning and leaves state untouched.
    pub fn process_provider<P>(&self, kind: ExerciseKind, provider: &P) -> Result<Transition>
    where
        P: AngleProvider + ?Sized,
    {
        if !self.is_tracking(kind) {
            return Err(Error::ExerciseNotTracked(kind));
        }
        match AngleSnapshot::capture(provider) {
            Ok(snapshot) => self.process_frame(kind, &snapshot),
            Err(e) => {
                tracing::warn!(exercise = %kind, "Rejecting frame: {}", e);
                Err(e)
            }
        }
    }

    /// Apply a frame selected by exercise tag
    pub fn process_tagged(&self, tag: &str, snapshot: &AngleSnapshot) -> Result<Transition> {
        let kind: ExerciseKind = tag.parse()?;
        self.process_frame(kind, snapshot)
    }

    pub fn state(&self, kind: ExerciseKind) -> Option<ExerciseState> {
        self.states.get(&kind).map(|cell| *cell.lock())
    }

    pub fn counts(&self) -> BTreeMap<ExerciseKind, u32> {
        self.states
            .iter()
            .map(|(kind, cell)| (*kind, cell.lock().counter))
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        let counts = self.counts();
        let total_reps = counts
            .values()
            .fold(0u32, |total, count| total.saturating_add(*count));
        SessionSummary {
            session_id: self.id,
            started_at: self.started_at,
            counts,
            total_reps,
        }
    }

    /// Begin a new session: fresh id, all states zeroed
    pub fn reset(&mut self) {
        let previous = self.summary();
        for cell in self.states.values_mut() {
            cell.get_mut().reset();
        }
        self.id = SessionId::new();
        self.started_at = Timestamp::now();
        tracing::info!(
            "Reset workout session {:?} (started {}) after {} reps, new session {:?}",
            previous.session_id,
            previous.started_at.to_datetime(),
            previous.total_reps,
            self.id
        );
    }
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
