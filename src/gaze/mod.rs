// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Gaze estimation.
//!
//! A [`GazeEstimator`] turns the inputs available on each sample into an
//! on-canvas point, or nothing when it has no estimate yet. Backends are
//! picked by name from the `[gaze]` config section: a tracker produces raw
//! estimates and a regression post-processes them. [`GazeTracker`] wraps
//! the pair with the session clock.

mod cursor;
mod regression;

pub use cursor::CursorTracker;
pub use regression::Regression;

use crate::config::GazeConfig;
use kurbo::{Point, Size};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GazeError {
    #[error("unknown gaze tracker `{0}`")]
    UnknownTracker(String),
    #[error("unknown gaze regression `{0}`")]
    UnknownRegression(String),
}

/// What an estimator gets to look at for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeInput {
    /// Last canvas-relative pointer position, if any
    pub pointer: Option<Point>,
    pub canvas: Size,
}

/// One gaze estimate stamped with the time since tracking began
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeSample {
    pub point: Point,
    pub elapsed_ms: f64,
}

/// A source of gaze estimates
pub trait GazeEstimator: std::fmt::Debug + Send {
    fn name(&self) -> &'static str;

    /// Start producing estimates.
    fn begin(&mut self) -> Result<(), GazeError>;

    /// Stop producing estimates. Calling it twice is harmless.
    fn end(&mut self);

    fn is_running(&self) -> bool;

    /// The current estimate, or `None` when nothing usable is available.
    fn estimate(&mut self, input: &GazeInput) -> Option<Point>;
}

/// Build a tracker backend by its config name
pub fn tracker_by_name(name: &str) -> Result<Box<dyn GazeEstimator>, GazeError> {
    match name {
        "cursor" => Ok(Box::new(CursorTracker::new())),
        other => Err(GazeError::UnknownTracker(other.to_string())),
    }
}

/// Tracker plus regression plus the session clock
#[derive(Debug)]
pub struct GazeTracker {
    estimator: Box<dyn GazeEstimator>,
    regression: Regression,
    started: Option<Instant>,
    ready: bool,
}

impl GazeTracker {
    pub fn new(estimator: Box<dyn GazeEstimator>, regression: Regression) -> Self {
        Self {
            estimator,
            regression,
            started: None,
            ready: false,
        }
    }

    pub fn from_config(config: &GazeConfig) -> Result<Self, GazeError> {
        let estimator = tracker_by_name(&config.tracker)?;
        let regression = Regression::by_name(&config.regression, config.smoothing)?;
        Ok(Self::new(estimator, regression))
    }

    pub fn begin(&mut self) -> Result<(), GazeError> {
        self.estimator.begin()?;
        self.regression.reset();
        self.started = Some(Instant::now());
        self.ready = false;
        tracing::info!(
            "Gaze tracking started ({} / {})",
            self.estimator.name(),
            self.regression.name()
        );
        Ok(())
    }

    pub fn end(&mut self) {
        if self.estimator.is_running() {
            self.estimator.end();
            tracing::info!("Gaze tracking stopped");
        }
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.estimator.is_running()
    }

    /// Whether at least one estimate has come through since `begin`
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Take one sample. Null estimates are skipped.
    pub fn sample(&mut self, input: &GazeInput) -> Option<GazeSample> {
        let started = self.started?;
        let Some(raw) = self.estimator.estimate(input) else {
            tracing::debug!("No gaze estimate, sample skipped");
            return None;
        };
        let point = self.regression.apply(raw);

        if !self.ready {
            self.ready = true;
            tracing::info!("Gaze tracking ready");
        }

        Some(GazeSample {
            point,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
