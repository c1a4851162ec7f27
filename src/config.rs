// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-run experiment configuration, read from TOML.
//!
//! ```toml
//! [experiment]
//! name = "pilot-03"
//! canvas_width = 1200
//! canvas_height = 720
//! falling = false
//! invert_x = true
//! skip_frames = 2
//!
//! [gaze]
//! tracker = "cursor"
//! regression = "smoothed"
//! smoothing = 0.3
//! ```
//!
//! Every field is optional. Fixed timing and geometry constants are not
//! configurable; they live in `settings`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the working directory when no path is given
pub const DEFAULT_PATH: &str = "gazebench.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub gaze: GazeConfig,
}

/// What the participant sees and how the controls behave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Written into exported documents as the source identifier
    pub name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Unselected windows drift downward while running
    pub falling: bool,
    pub invert_x: bool,
    pub invert_y: bool,
    /// Frames skipped between redraws while dragging (0 = never skip)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_frames: Option<u32>,
    /// Windows move themselves into the target zone
    pub self_guiding: bool,
    /// Place the target zone on a random edge instead of the right one
    pub random_target: bool,
    /// Start as a replay viewer; tracking never starts
    pub replay_only: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "experiment".to_string(),
            canvas_width: 1200.0,
            canvas_height: 720.0,
            falling: false,
            invert_x: false,
            invert_y: false,
            skip_frames: None,
            self_guiding: false,
            random_target: false,
            replay_only: false,
        }
    }
}

/// Gaze backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    /// Tracker backend name
    pub tracker: String,
    /// Regression backend name
    pub regression: String,
    /// Weight of the newest estimate for the `smoothed` regression
    pub smoothing: f64,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            tracker: "cursor".to_string(),
            regression: "identity".to_string(),
            smoothing: 0.3,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let experiment = &self.experiment;
        if !(experiment.canvas_width > 0.0 && experiment.canvas_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                experiment.canvas_width, experiment.canvas_height
            )));
        }
        if !(self.gaze.smoothing > 0.0 && self.gaze.smoothing <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "smoothing must be in (0, 1], got {}",
                self.gaze.smoothing
            )));
        }
        if self.gaze.tracker.trim().is_empty() || self.gaze.regression.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "gaze tracker and regression must be named".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if given, else `gazebench.toml` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_PATH);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
