// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Self-guided mode: windows walk into the target zone on their own.
//!
//! Windows move one at a time, in z-order, a fixed step toward the target
//! edge per guide tick. A window is done once its origin is inside the
//! zone. One that leaves the canvas first is abandoned so the sequence
//! always ends.

use crate::scene::{SceneState, TargetEdge};
use crate::settings;
use kurbo::Vec2;

#[derive(Debug, Clone)]
pub struct AutoGuide {
    /// Shape indices still to move, front first
    queue: Vec<usize>,
    delta: Vec2,
}

impl AutoGuide {
    /// Plan motion toward `edge` for every window currently in `scene`.
    pub fn new(scene: &SceneState, edge: TargetEdge) -> Self {
        let mut queue: Vec<usize> = scene
            .shapes()
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.is_window())
            .map(|(index, _)| index)
            .collect();
        queue.reverse();
        Self {
            queue,
            delta: edge.direction() * settings::motion::GUIDE_STEP,
        }
    }

    /// Advance one guide tick. Returns false once every window is settled.
    pub fn step(&mut self, scene: &mut SceneState) -> bool {
        while let Some(&index) = self.queue.last() {
            let (Some(target), Some(shape)) = (scene.target_zone(), scene.shapes().get(index))
            else {
                self.queue.pop();
                continue;
            };
            if target.contains(shape.origin()) {
                tracing::debug!("{} reached the target zone", shape.name);
                self.queue.pop();
                continue;
            }
            if !shape.is_on_canvas(scene.size()) {
                tracing::warn!("{} left the canvas before reaching the target", shape.name);
                self.queue.pop();
                continue;
            }
            scene.nudge(index, self.delta);
            return true;
        }
        false
    }
}

#[cfg(test)]
impl AutoGuide {
    fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// Index of the window being moved
    fn current(&self) -> Option<usize> {
        self.queue.last().copied()
    }
}
