use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;

use crate::errors::{ EqlawError, EqlawResult };
use crate::implementations::config::ConfigError;

/// Number of back-to-back calls per pair used by the consistency law
pub const DEFAULT_REPEATS: usize = 3;

/// Options for a verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierOptions {
    /// How many times each pair is compared when checking consistency
    pub repeats: usize,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self { repeats: DEFAULT_REPEATS }
    }
}

impl VerifierOptions {
    pub fn with_repeats(repeats: usize) -> Self {
        Self { repeats }
    }

    /// Load options from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let options: VerifierOptions = serde_yaml::from_str(&contents)?;
        Ok(options)
    }

    pub fn validate(&self) -> EqlawResult<()> {
        if self.repeats < 1 {
            return Err(EqlawError::InvalidRepeats(self.repeats));
        }
        Ok(())
    }
}
