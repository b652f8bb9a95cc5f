//! Session configuration.

use repcount_core::{Error, ExerciseKind, Result};
use repcount_exercise::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `REPCOUNT_LOG_FEEDBACK=false`
pub const ENV_PREFIX: &str = "REPCOUNT";

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Exercises tracked by the session
    pub exercises: Vec<ExerciseKind>,

    /// Guard values passed to the classifiers
    pub classifier: ClassifierConfig,

    /// Send feedback to `tracing` when no sink is supplied
    pub log_feedback: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exercises: ExerciseKind::ALL.to_vec(),
            classifier: ClassifierConfig::default(),
            log_feedback: true,
        }
    }
}

impl SessionConfig {
    /// Load configuration from file, overridden by `REPCOUNT_` environment variables
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()
            .map_err(config_error)?;

        Self::finish(settings)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()
            .map_err(config_error)?;

        Self::finish(settings)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn finish(settings: config::Config) -> Result<Self> {
        let config: Self = settings.try_deserialize().map_err(config_error)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.exercises.is_empty() {
            return Err(Error::Config("no exercises configured".to_string()));
        }

        let classifier = &self.classifier;
        for (name, value) in [
            ("classifier.standing_margin", classifier.standing_margin),
            ("classifier.ankle_tolerance", classifier.ankle_tolerance),
            ("classifier.min_knee_delta", classifier.min_knee_delta),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

fn config_error(e: config::ConfigError) -> Error {
    Error::Config(e.to_string())
}
