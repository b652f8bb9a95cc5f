//! Tunable guard values shared by the classifiers.

use serde::{Deserialize, Serialize};

/// Classifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Push-up guard: hip below shoulder by more than this means standing
    pub standing_margin: f64,
    /// Squat guard: maximum vertical gap between the ankles
    pub ankle_tolerance: f64,
    /// Lunges: knee angle change (degrees) required between counted frames
    pub min_knee_delta: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            standing_margin: 0.2,
            ankle_tolerance: 0.1,
            min_knee_delta: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"ankle_tolerance": 0.05}"#).unwrap();
        assert_eq!(config.ankle_tolerance, 0.05);
        assert_eq!(config.standing_margin, 0.2);
        assert_eq!(config.min_knee_delta, 5.0);
    }
}
