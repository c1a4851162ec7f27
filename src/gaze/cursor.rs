// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer-as-gaze tracker, for pilots and development without a camera

use super::{GazeError, GazeEstimator, GazeInput};
use kurbo::{Point, Rect};

#[derive(Debug, Default)]
pub struct CursorTracker {
    running: bool,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GazeEstimator for CursorTracker {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn begin(&mut self) -> Result<(), GazeError> {
        self.running = true;
        Ok(())
    }

    fn end(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn estimate(&mut self, input: &GazeInput) -> Option<Point> {
        if !self.running {
            return None;
        }
        // The pointer can be captured outside the canvas mid-drag
        let bounds = Rect::from_origin_size(Point::ZERO, input.canvas);
        let pointer = input.pointer?;
        Some(Point::new(
            pointer.x.clamp(bounds.x0, bounds.x1),
            pointer.y.clamp(bounds.y0, bounds.y1),
        ))
    }
}
