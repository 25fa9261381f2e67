// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Demo driver configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fixtures::DemoKind;
use crate::input::Key;

/// The largest number of decimals the text screen will print.
pub const MAX_PRECISION: usize = 9;

/// An invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The run must last at least one frame.
    #[error("frames must be at least 1")]
    ZeroFrames,
    /// More decimals were requested than `f32` can meaningfully show.
    #[error("precision {precision} exceeds the maximum of {max}")]
    PrecisionTooLarge {
        /// The requested precision.
        precision: usize,
        /// The largest accepted precision.
        max: usize,
    },
    /// A demo name that matches none of [`DemoKind::ALL`].
    #[error("unknown demo '{0}'")]
    UnknownDemo(String),
}

/// Settings for a demo run.
///
/// Missing fields in a JSON file take their [`Default`] values, which reproduce
/// the windowed programs: every demo, four decimals and an Escape press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of frames drawn before the scripted exit key press arrives.
    pub frames: u32,
    /// Decimals printed per component.
    pub precision: usize,
    /// Names of the demos to run, in order. Empty selects all of them.
    pub demos: Vec<String>,
    /// The key whose press (not hold) ends the run.
    pub exit_key: Key,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 1,
            precision: 4,
            demos: Vec::new(),
            exit_key: Key::Escape,
        }
    }
}

impl DemoConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Save the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Checks every field and resolves the demo names.
    ///
    /// Returns the demos to run, in the configured order.
    pub fn validate(&self) -> Result<Vec<DemoKind>, ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        if self.demos.is_empty() {
            return Ok(DemoKind::ALL.to_vec());
        }
        self.demos.iter().map(|name| name.parse::<DemoKind>()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_every_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.validate().unwrap(), DemoKind::ALL.to_vec());
        assert_eq!(config.exit_key, Key::Escape);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DemoConfig::from_json(r#"{ "precision": 6 }"#).unwrap();
        assert_eq!(config.precision, 6);
        assert_eq!(config.frames, 1);
        assert!(config.demos.is_empty());
    }

    #[test]
    fn test_demo_names_resolve_in_order() {
        let config = DemoConfig {
            demos: vec!["slerp".to_string(), "rodrigues".to_string()],
            ..DemoConfig::default()
        };
        assert_eq!(
            config.validate().unwrap(),
            vec![DemoKind::Slerp, DemoKind::Rodrigues]
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let zero_frames = DemoConfig {
            frames: 0,
            ..DemoConfig::default()
        };
        assert_eq!(zero_frames.validate(), Err(ConfigError::ZeroFrames));

        let too_precise = DemoConfig {
            precision: 12,
            ..DemoConfig::default()
        };
        assert_eq!(
            too_precise.validate(),
            Err(ConfigError::PrecisionTooLarge {
                precision: 12,
                max: MAX_PRECISION
            })
        );

        let unknown = DemoConfig {
            demos: vec!["euler".to_string()],
            ..DemoConfig::default()
        };
        assert_eq!(
            unknown.validate(),
            Err(ConfigError::UnknownDemo("euler".to_string()))
        );
    }

    #[test]
    fn test_exit_key_from_json() {
        let config = DemoConfig::from_json(r#"{ "exit_key": "Space" }"#).unwrap();
        assert_eq!(config.exit_key, Key::Space);
    }
}
