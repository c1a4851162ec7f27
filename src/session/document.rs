// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! The session document: parallel per-tick arrays plus window snapshots.
//!
//! ```json
//! {
//!   "x": [..], "y": [..],        // gaze estimate
//!   "mx": [..], "my": [..],      // pointer position
//!   "time": [..],                // elapsed ms reported with the sample
//!   "dragging": [..],
//!   "shapeStates": [[{ "x", "y", "w", "h", "visible", ... }], ..],
//!   "name": "experiment",
//!   "targetDecision": 2          // only when the target edge was randomized
//! }
//! ```
//!
//! The tick index is the only timestamp replay uses. There is no schema
//! version.

use super::SessionError;
use crate::model::Shape;
use crate::render::color::DEFAULT_FILL;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Frozen copy of one window at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "unit_extent")]
    pub w: f64,
    #[serde(default = "unit_extent")]
    pub h: f64,
    #[serde(default = "visible_by_default")]
    pub visible: bool,

    // Carried for completeness; replay ignores them
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default)]
    pub selectable: bool,
    #[serde(default = "default_name")]
    pub name: String,
}

fn unit_extent() -> f64 {
    1.0
}

fn visible_by_default() -> bool {
    true
}

fn default_fill() -> String {
    DEFAULT_FILL.to_string()
}

fn default_name() -> String {
    "default".to_string()
}

impl From<&Shape> for WindowSnapshot {
    fn from(shape: &Shape) -> Self {
        Self {
            x: shape.x,
            y: shape.y,
            w: shape.w,
            h: shape.h,
            visible: shape.visible,
            fill: shape.fill.clone(),
            selectable: shape.selectable,
            name: shape.name.clone(),
        }
    }
}

impl Shape {
    /// Rebuild a window from a snapshot.
    ///
    /// Only geometry and visibility come back; fill, selectability and name
    /// keep their defaults, so replayed windows are never interactive.
    pub fn window_from_snapshot(snapshot: &WindowSnapshot) -> Self {
        let mut window = Shape::window(snapshot.x, snapshot.y, snapshot.w, snapshot.h);
        window.visible = snapshot.visible;
        window
    }
}

/// One tick's worth of observations
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub gaze: Point,
    pub pointer: Point,
    pub elapsed_ms: f64,
    pub dragging: bool,
    pub windows: Vec<WindowSnapshot>,
}

/// Append-only log of observation records, stored column-wise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default)]
    pub y: Vec<f64>,
    #[serde(default)]
    pub mx: Vec<f64>,
    #[serde(default)]
    pub my: Vec<f64>,
    #[serde(default)]
    pub time: Vec<f64>,
    #[serde(default)]
    pub dragging: Vec<bool>,
    #[serde(rename = "shapeStates", default)]
    pub shape_states: Vec<Vec<WindowSnapshot>>,
    /// Identifies the experiment that produced the log
    #[serde(default)]
    pub name: String,
    /// Which edge held the target zone, when it was randomized
    #[serde(
        rename = "targetDecision",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_decision: Option<u8>,
}

impl SessionLog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of recorded ticks
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn push(&mut self, record: ObservationRecord) {
        self.x.push(record.gaze.x);
        self.y.push(record.gaze.y);
        self.mx.push(record.pointer.x);
        self.my.push(record.pointer.y);
        self.time.push(record.elapsed_ms);
        self.dragging.push(record.dragging);
        self.shape_states.push(record.windows);
    }

    /// Reassemble the record at `index`, if every column has it.
    pub fn record(&self, index: usize) -> Option<ObservationRecord> {
        Some(ObservationRecord {
            gaze: Point::new(*self.x.get(index)?, *self.y.get(index)?),
            pointer: Point::new(*self.mx.get(index)?, *self.my.get(index)?),
            elapsed_ms: *self.time.get(index)?,
            dragging: *self.dragging.get(index)?,
            windows: self.shape_states.get(index)?.clone(),
        })
    }

    /// Check that every column has one entry per tick.
    pub fn validate(&self) -> Result<(), SessionError> {
        let expected = self.len();
        let columns = [
            ("y", self.y.len()),
            ("mx", self.mx.len()),
            ("my", self.my.len()),
            ("time", self.time.len()),
            ("dragging", self.dragging.len()),
            ("shapeStates", self.shape_states.len()),
        ];
        for (column, len) in columns {
            if len != expected {
                return Err(SessionError::Malformed(format!(
                    "column `{column}` has {len} entries, expected {expected}"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a session document.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let log: Self = serde_json::from_str(json)?;
        log.validate()?;
        Ok(log)
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let json = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
