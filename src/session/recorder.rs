// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Passive observer that turns gaze samples into session records

use super::{ObservationRecord, SessionLog};
use crate::gaze::GazeSample;
use crate::scene::SceneState;
use kurbo::Point;

/// Appends one observation per gaze sample while active
#[derive(Debug, Clone)]
pub struct Recorder {
    log: SessionLog,
    active: bool,
}

impl Recorder {
    pub fn new(name: impl Into<String>, target_decision: Option<u8>) -> Self {
        let mut log = SessionLog::new(name);
        log.target_decision = target_decision;
        Self { log, active: false }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Capture the scene as seen alongside `sample`.
    ///
    /// Returns false without recording when the recorder is inactive.
    pub fn record(&mut self, sample: &GazeSample, scene: &SceneState) -> bool {
        if !self.active {
            return false;
        }
        self.log.push(ObservationRecord {
            gaze: sample.point,
            // Before the first pointer event the position is reported as 0,0
            pointer: scene.pointer().unwrap_or(Point::ZERO),
            elapsed_ms: sample.elapsed_ms,
            dragging: scene.is_dragging(),
            windows: scene.snapshot_windows(),
        });
        true
    }
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn is_recording(&self) -> bool {
        self.active
    }
}
