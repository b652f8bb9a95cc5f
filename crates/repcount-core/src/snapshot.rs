//! Per-frame angle snapshots and the angle provider contract.
//!
//! Joint angles and landmark coordinates are computed upstream from pose
//! estimation. This module only freezes them into a validated value so
//! classifiers never see non-finite or out-of-range input.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest joint angle accepted, in degrees
pub const MAX_JOINT_ANGLE: f64 = 180.0;

/// 2D landmark in normalized frame coordinates (0-1, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark2D {
    pub x: f64,
    pub y: f64,
}

impl Landmark2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Source of joint angles and landmarks for one frame
///
/// Implemented by the external angle computation layer.
pub trait AngleProvider {
    fn angle_of_elbow(&self) -> f64;
    fn angle_of_shoulder(&self) -> f64;
    fn angle_of_hip(&self) -> f64;
    fn angle_of_knee(&self) -> f64;

    fn left_shoulder(&self) -> Landmark2D;
    fn left_hip(&self) -> Landmark2D;
    fn left_knee(&self) -> Landmark2D;
    fn right_knee(&self) -> Landmark2D;
    fn left_ankle(&self) -> Landmark2D;
    fn right_ankle(&self) -> Landmark2D;
}

/// Joint angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    pub elbow: f64,
    pub shoulder: f64,
    pub hip: f64,
    pub knee: f64,
}

impl JointAngles {
    pub fn new(elbow: f64, shoulder: f64, hip: f64, knee: f64) -> Self {
        Self {
            elbow,
            shoulder,
            hip,
            knee,
        }
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("elbow_angle", self.elbow),
            ("shoulder_angle", self.shoulder),
            ("hip_angle", self.hip),
            ("knee_angle", self.knee),
        ] {
            if !value.is_finite() || !(0.0..=MAX_JOINT_ANGLE).contains(&value) {
                return Err(Error::malformed(field, value));
            }
        }
        Ok(())
    }
}

/// Landmarks read directly by the classifiers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyLandmarks {
    pub left_shoulder: Landmark2D,
    pub left_hip: Landmark2D,
    pub left_knee: Landmark2D,
    pub right_knee: Landmark2D,
    pub left_ankle: Landmark2D,
    pub right_ankle: Landmark2D,
}

impl BodyLandmarks {
    fn validate(&self) -> Result<()> {
        for (field, point) in [
            ("left_shoulder", self.left_shoulder),
            ("left_hip", self.left_hip),
            ("left_knee", self.left_knee),
            ("right_knee", self.right_knee),
            ("left_ankle", self.left_ankle),
            ("right_ankle", self.right_ankle),
        ] {
            if !point.x.is_finite() {
                return Err(Error::malformed(field, point.x));
            }
            if !point.y.is_finite() {
                return Err(Error::malformed(field, point.y));
            }
        }
        Ok(())
    }
}

/// Validated, immutable angle data for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAngleSnapshot", into = "RawAngleSnapshot")]
pub struct AngleSnapshot {
    angles: JointAngles,
    landmarks: BodyLandmarks,
}

/// Unvalidated wire form of an [`AngleSnapshot`]
///
/// Missing landmarks default to the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawAngleSnapshot {
    pub angles: JointAngles,
    #[serde(default)]
    pub landmarks: BodyLandmarks,
}

impl TryFrom<RawAngleSnapshot> for AngleSnapshot {
    type Error = Error;

    fn try_from(raw: RawAngleSnapshot) -> Result<Self> {
        AngleSnapshot::new(raw.angles, raw.landmarks)
    }
}

impl From<AngleSnapshot> for RawAngleSnapshot {
    fn from(snapshot: AngleSnapshot) -> Self {
        Self {
            angles: snapshot.angles,
            landmarks: snapshot.landmarks,
        }
    }
}

impl AngleSnapshot {
    /// Build a snapshot, rejecting non-finite values and angles outside [0, 180]
    pub fn new(angles: JointAngles, landmarks: BodyLandmarks) -> Result<Self> {
        angles.validate()?;
        landmarks.validate()?;
        Ok(Self { angles, landmarks })
    }

    /// Freeze the current values of an angle provider
    pub fn capture<P: AngleProvider + ?Sized>(provider: &P) -> Result<Self> {
        let angles = JointAngles {
            elbow: provider.angle_of_elbow(),
            shoulder: provider.angle_of_shoulder(),
            hip: provider.angle_of_hip(),
            knee: provider.angle_of_knee(),
        };
        let landmarks = BodyLandmarks {
            left_shoulder: provider.left_shoulder(),
            left_hip: provider.left_hip(),
            left_knee: provider.left_knee(),
            right_knee: provider.right_knee(),
            left_ankle: provider.left_ankle(),
            right_ankle: provider.right_ankle(),
        };
        Self::new(angles, landmarks)
    }

    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    pub fn landmarks(&self) -> &BodyLandmarks {
        &self.landmarks
    }
}

impl AngleProvider for AngleSnapshot {
    fn angle_of_elbow(&self) -> f64 {
        self.angles.elbow
    }

    fn angle_of_shoulder(&self) -> f64 {
        self.angles.shoulder
    }

    fn angle_of_hip(&self) -> f64 {
        self.angles.hip
    }

    fn angle_of_knee(&self) -> f64 {
        self.angles.knee
    }

    fn left_shoulder(&self) -> Landmark2D {
        self.landmarks.left_shoulder
    }

    fn left_hip(&self) -> Landmark2D {
        self.landmarks.left_hip
    }

    fn left_knee(&self) -> Landmark2D {
        self.landmarks.left_knee
    }

    fn right_knee(&self) -> Landmark2D {
        self.landmarks.right_knee
    }

    fn left_ankle(&self) -> Landmark2D {
        self.landmarks.left_ankle
    }

    fn right_ankle(&self) -> Landmark2D {
        self.landmarks.right_ankle
    }
}
