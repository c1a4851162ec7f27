// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! The periodic frame tick: falling animation, drag throttling, draw gate

use super::SceneState;
use crate::render::Surface;
use crate::settings;

/// Skips redraws while a drag is in progress.
///
/// After `skip` consecutive skipped frames the next frame redraws. During
/// skipped frames the dragged shape is flagged invisible, which is what the
/// recorder sees; it is made visible again for the frame that paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameThrottle {
    skip: u32,
    skipped: u32,
}

impl FrameThrottle {
    /// `None` for 0, which means "don't throttle"
    pub fn new(skip: u32) -> Option<Self> {
        (skip > 0).then_some(Self { skip, skipped: 0 })
    }

    /// Advance one dragging frame; true when this frame should redraw.
    pub fn advance(&mut self) -> bool {
        if self.skipped >= self.skip {
            self.skipped = 0;
            true
        } else {
            self.skipped += 1;
            false
        }
    }
}

impl SceneState {
    /// Run one frame: animate, then paint if dirty.
    ///
    /// A falling step paints right away, before the drag throttle decides
    /// whether this frame is skipped. Returns whether the surface was
    /// painted.
    pub fn frame_tick(&mut self, surface: &mut dyn Surface) -> bool {
        let fell = self.falling && self.step_falling() && self.draw(surface);

        if self.dragging
            && let Some(throttle) = self.throttle.as_mut()
        {
            let redraw = throttle.advance();
            let selection = self.selection;
            if let Some(shape) = selection.and_then(|id| self.shape_mut(id)) {
                shape.visible = redraw;
            }
            if !redraw {
                // Pending changes get picked up by the next full redraw
                self.dirty = false;
                return fell;
            }
            self.dirty = true;
        }

        self.draw(surface) || fell
    }

    /// Drift every visible, unselected window down one step, as long as it
    /// stays inside the canvas. Returns whether anything moved.
    pub fn step_falling(&mut self) -> bool {
        let step = settings::motion::FALL_STEP;
        let size = self.size;
        let selection = self.selection;
        let mut moved = false;

        for shape in &mut self.shapes {
            if !shape.is_window() || !shape.visible || Some(shape.id) == selection {
                continue;
            }
            if shape.x + shape.w + step <= size.width && shape.y + shape.h + step <= size.height {
                shape.y += step;
                moved = true;
            }
        }

        if moved {
            self.dirty = true;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;
    use crate::render::DisplayList;
    use kurbo::{Point, Size};

    fn settled(scene: &mut SceneState) {
        let mut list = DisplayList::new();
        scene.draw(&mut list);
    }

    #[test]
    fn throttle_zero_is_disabled() {
        assert!(FrameThrottle::new(0).is_none());
    }

    #[test]
    fn throttle_redraws_after_skipping() {
        let mut throttle = FrameThrottle::new(2).unwrap();
        let pattern: Vec<bool> = (0..6).map(|_| throttle.advance()).collect();
        assert_eq!(pattern, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn tick_without_changes_paints_nothing() {
        let mut scene = SceneState::new(Size::new(100.0, 100.0));
        scene.add_shape(Shape::window(0.0, 0.0, 10.0, 10.0));
        settled(&mut scene);

        let mut list = DisplayList::new();
        assert!(!scene.frame_tick(&mut list));
        assert!(list.is_empty());
    }

    #[test]
    fn falling_moves_unselected_visible_windows_only() {
        let mut scene = SceneState::new(Size::new(400.0, 400.0));
        scene.add_shape(Shape::window(0.0, 0.0, 50.0, 50.0).selectable(true));
        scene.add_shape(Shape::window(100.0, 0.0, 50.0, 50.0).selectable(true));
        let mut hidden = Shape::window(200.0, 0.0, 50.0, 50.0);
        hidden.visible = false;
        scene.add_shape(hidden);
        scene.add_shape(Shape::rectangle(300.0, 0.0, 50.0, 50.0));
        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_up();
        scene.set_falling(true);
        settled(&mut scene);

        let mut list = DisplayList::new();
        assert!(scene.frame_tick(&mut list));

        let ys: Vec<f64> = scene.shapes().iter().map(|shape| shape.y).collect();
        assert_eq!(ys, vec![0.0, 0.9, 0.0, 0.0]);
    }

    #[test]
    fn falling_stops_at_the_canvas_edge() {
        let mut scene = SceneState::new(Size::new(100.0, 100.0));
        scene.add_shape(Shape::window(0.0, 49.5, 50.0, 50.0));
        scene.set_falling(true);
        settled(&mut scene);

        assert!(!scene.step_falling());
        assert_eq!(scene.shapes()[0].y, 49.5);
        assert!(!scene.is_dirty());
    }

    #[test]
    fn throttled_drag_strobes_the_selection() {
        let mut scene = SceneState::new(Size::new(400.0, 400.0)).with_skip_frames(Some(1));
        scene.add_shape(Shape::window(0.0, 0.0, 50.0, 50.0).selectable(true));
        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_move(Point::new(20.0, 20.0));

        let mut list = DisplayList::new();
        assert!(!scene.frame_tick(&mut list));
        assert!(!scene.selected_shape().unwrap().visible);
        assert!(!scene.is_dirty());

        assert!(scene.frame_tick(&mut list));
        assert!(scene.selected_shape().unwrap().visible);
        assert_eq!(scene.selected_shape().unwrap().origin(), Point::new(10.0, 10.0));

        // Caught mid-skip on release, the window comes back
        assert!(!scene.frame_tick(&mut list));
        scene.pointer_up();
        assert!(scene.selected_shape().unwrap().visible);
        assert!(scene.is_dirty());
    }

    #[test]
    fn falling_repaints_on_throttled_frames() {
        let mut scene = SceneState::new(Size::new(400.0, 400.0)).with_skip_frames(Some(1));
        scene.add_shape(Shape::window(0.0, 0.0, 50.0, 50.0).selectable(true));
        scene.add_shape(Shape::window(100.0, 0.0, 50.0, 50.0).selectable(true));
        scene.set_falling(true);
        settled(&mut scene);
        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_move(Point::new(20.0, 20.0));

        let mut list = DisplayList::new();
        assert!(scene.frame_tick(&mut list));
        assert!(!list.is_empty());
        assert_eq!(scene.shapes()[1].y, 0.9);
        // The throttle still skipped this frame for the dragged window
        assert!(!scene.selected_shape().unwrap().visible);
        assert!(!scene.is_dirty());
    }
}
