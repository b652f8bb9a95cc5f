//! Replay recorded frames from JSON lines.
//!
//! Each non-blank line holds one frame:
//!
//! ```text
//! {"exercise": "squat", "snapshot": {"angles": {"elbow": 170, "shoulder": 20, "hip": 95, "knee": 100}, "landmarks": {...}}}
//! ```
//!
//! `landmarks` may be omitted, in which case every landmark sits at the origin.

use repcount_core::{AngleSnapshot, Error, RawAngleSnapshot, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::session::WorkoutSession;

#[derive(Debug, Deserialize)]
struct FrameRecord {
    exercise: String,
    snapshot: RawAngleSnapshot,
}

/// Outcome of a replay run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Frames read, including rejected ones
    pub frames: usize,
    /// Frames with non-finite or out-of-range values
    pub rejected: usize,
    /// Frames naming an unknown or untracked exercise
    pub unsupported: usize,
    /// Repetitions counted during the replay
    pub reps: u32,
}

/// Feed every frame in `reader` to `session`, in order
///
/// Bad frames are skipped and tallied. A line that is not a frame record at
/// all aborts the replay.
pub fn replay_jsonl<R: BufRead>(reader: R, session: &WorkoutSession) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: FrameRecord = serde_json::from_str(&line)
            .map_err(|e| Error::Serialization(format!("line {}: {}", index + 1, e)))?;
        report.frames += 1;

        let snapshot = match AngleSnapshot::try_from(record.snapshot) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Skipping frame on line {}: {}", index + 1, e);
                report.rejected += 1;
                continue;
            }
        };

        match session.process_tagged(&record.exercise, &snapshot) {
            Ok(transition) => {
                let confirmed = transition
                    .feedback
                    .events()
                    .iter()
                    .filter(|e| !e.is_correction())
                    .count();
                report.reps = report
                    .reps
                    .saturating_add(u32::try_from(confirmed).unwrap_or(u32::MAX));
            }
            Err(e @ (Error::UnsupportedExerciseKind(_) | Error::ExerciseNotTracked(_))) => {
                tracing::warn!("Skipping frame on line {}: {}", index + 1, e);
                report.unsupported += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Replayed {} frames ({} rejected, {} unsupported), {} reps counted",
        report.frames,
        report.rejected,
        report.unsupported,
        report.reps
    );
    Ok(report)
}
