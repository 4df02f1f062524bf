//! Player settings
//!
//! Read from a TOML file (`--config PATH`, or `stepviz.toml` in the working
//! directory when present). Every key is optional:
//!
//! ```toml
//! speed_ms = 300
//! array_size = 10
//! seed = 42
//! preset = "nearly"
//! algorithm = "quick"
//! max_floyd_steps = 50
//! ```
//!
//! Command-line flags are applied on top of whatever the file provides.

use crate::errors::{Result, StepvizError};
use crate::input::{ArrayPreset, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::sorting::SortAlgorithm;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "stepviz.toml";

/// Playback never runs faster than one frame per this many milliseconds
pub const MIN_SPEED_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Delay between frames while playing
    pub speed_ms: u64,
    pub array_size: usize,
    pub seed: u64,
    pub preset: ArrayPreset,
    pub algorithm: SortAlgorithm,
    pub max_floyd_steps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            speed_ms: 500,
            array_size: 8,
            seed: 1,
            preset: ArrayPreset::Random,
            algorithm: SortAlgorithm::Bubble,
            max_floyd_steps: 50,
        }
    }
}

impl Settings {
    /// Load `explicit` if given, else `stepviz.toml` if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Settings> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Settings::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| StepvizError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = Settings::from_toml(&text, &path)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings text; `origin` is only used in error messages
    pub fn from_toml(text: &str, origin: &Path) -> Result<Settings> {
        let settings: Settings = toml::from_str(text).map_err(|source| StepvizError::Settings {
            path: origin.to_path_buf(),
            source,
        })?;
        Ok(settings.normalized())
    }

    /// Clamp every field into its usable range
    pub fn normalized(mut self) -> Settings {
        self.speed_ms = self.speed_ms.max(MIN_SPEED_MS);
        self.array_size = self.array_size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        self.seed = self.seed.max(1);
        self.max_floyd_steps = self.max_floyd_steps.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("", Path::new("test.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let text = "speed_ms = 10\nalgorithm = \"quick\"\npreset = \"reverse\"\narray_size = 40\n";
        let settings = Settings::from_toml(text, Path::new("test.toml")).unwrap();
        assert_eq!(settings.speed_ms, MIN_SPEED_MS);
        assert_eq!(settings.algorithm, SortAlgorithm::Quick);
        assert_eq!(settings.preset, ArrayPreset::Reverse);
        assert_eq!(settings.array_size, MAX_ARRAY_SIZE);
        assert_eq!(settings.seed, 1);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::from_toml("colour = \"red\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, StepvizError::Settings { .. }));
        assert!(err.to_string().starts_with("invalid settings in bad.toml"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/stepviz.toml"))).unwrap_err();
        assert!(matches!(err, StepvizError::Io { .. }));
    }
}
