//! Configuration loading and defaults.
//!
//! Settings come from an optional `hookforge.config.json`; CLI flags override
//! file values, and a missing file just means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_pacing_ms() -> u64 {
    200
}

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Custom idea pool file (JSON); the built-in pool when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PathBuf>,

    /// Fixed RNG seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Simulated wait before results render, in milliseconds. Presentation
    /// pacing only; the pipeline itself never sleeps.
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool: None,
            seed: None,
            pacing_ms: default_pacing_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("does/not/exist.json")).unwrap();
        assert!(config.pool.is_none());
        assert!(config.seed.is_none());
        assert_eq!(config.pacing_ms, 200);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 42}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.pacing_ms, 200);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
