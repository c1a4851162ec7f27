// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer handling: selection, dragging and release

use super::SceneState;
use kurbo::Point;

impl SceneState {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Press at a canvas-relative position.
    ///
    /// The topmost selectable shape under the pointer is selected and starts
    /// dragging. A press on empty canvas clears the selection; a press that
    /// only lands on non-selectable shapes changes nothing.
    pub fn pointer_down(&mut self, point: Point) {
        self.pointer = Some(point);

        let hit = self
            .shapes
            .iter()
            .rev()
            .find(|shape| shape.selectable && shape.contains(point))
            .map(|shape| (shape.id, shape.origin()));

        if let Some((id, origin)) = hit {
            tracing::debug!("[SceneState::pointer_down] selected {:?} at {:?}", id, point);
            self.drag_offset = point - origin;
            self.drag_origin = origin;
            self.dragging = true;
            self.selection = Some(id);
            self.dirty = true;
            return;
        }

        if self.shapes.iter().any(|shape| shape.contains(point)) {
            return;
        }

        if self.selection.take().is_some() {
            self.dirty = true;
        }
    }

    /// Pointer moved; drags the selection when a drag is in progress.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer = Some(point);

        if !self.dragging {
            return;
        }
        let Some(id) = self.selection else {
            return;
        };

        let controls = self.controls;
        let anchor = self.drag_origin;
        let target = point - self.drag_offset;

        // Inverted axes mirror the displacement around the press-time origin
        let x = if controls.invert_x {
            anchor.x - (target.x - anchor.x)
        } else {
            target.x
        };
        let y = if controls.invert_y {
            anchor.y - (target.y - anchor.y)
        } else {
            target.y
        };

        if let Some(shape) = self.shape_mut(id) {
            shape.move_to(Point::new(x, y));
            self.dirty = true;
        }
    }

    /// Release ends any drag unconditionally.
    pub fn pointer_up(&mut self) {
        self.dragging = false;

        // A throttled drag may have left the selection hidden
        if let Some(id) = self.selection
            && let Some(shape) = self.shape_mut(id)
            && !shape.visible
        {
            shape.visible = true;
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Shape;
    use crate::scene::{DragControls, SceneState};
    use kurbo::{Point, Size, Vec2};

    fn scene() -> SceneState {
        SceneState::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn press_selects_topmost_overlapping_shape() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        scene.add_shape(Shape::window(50.0, 50.0, 100.0, 100.0).selectable(true));
        let top = scene.shapes()[1].id;

        scene.pointer_down(Point::new(75.0, 75.0));

        assert_eq!(scene.selection(), Some(top));
        assert!(scene.is_dragging());
        assert_eq!(scene.drag_offset(), Vec2::new(25.0, 25.0));
    }

    #[test]
    fn non_selectable_shapes_are_skipped_during_the_scan() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        scene.add_shape(Shape::rectangle(0.0, 0.0, 400.0, 400.0).with_fill("red"));
        let below = scene.shapes()[0].id;

        scene.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(scene.selection(), Some(below));
    }

    #[test]
    fn press_on_non_selectable_shape_only_is_a_noop() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        scene.add_shape(Shape::rectangle(600.0, 0.0, 200.0, 600.0).with_fill("red"));
        let window = scene.shapes()[0].id;

        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_up();
        let mut list = crate::render::DisplayList::new();
        scene.draw(&mut list);

        scene.pointer_down(Point::new(700.0, 300.0));
        assert_eq!(scene.selection(), Some(window));
        assert!(!scene.is_dirty());
        assert!(!scene.is_dragging());
    }

    #[test]
    fn press_on_empty_canvas_clears_selection_without_moving_anything() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_up();
        let mut list = crate::render::DisplayList::new();
        scene.draw(&mut list);
        assert!(!scene.is_dirty());

        scene.pointer_down(Point::new(500.0, 500.0));

        assert_eq!(scene.selection(), None);
        assert!(scene.is_dirty());
        assert_eq!(scene.shapes()[0].origin(), Point::ZERO);
    }

    #[test]
    fn drag_keeps_the_press_offset() {
        let mut scene = scene();
        scene.add_shape(Shape::window(100.0, 300.0, 200.0, 100.0).selectable(true));

        scene.pointer_down(Point::new(130.0, 310.0));
        let offset = scene.drag_offset();

        for point in [
            Point::new(140.0, 320.0),
            Point::new(400.0, 50.0),
            Point::new(-20.0, 700.0),
        ] {
            scene.pointer_move(point);
            let selected = scene.selected_shape().unwrap();
            assert_eq!(selected.x, point.x - offset.x);
            assert_eq!(selected.y, point.y - offset.y);
        }
    }

    #[test]
    fn inverted_axes_mirror_around_the_press_origin() {
        let mut scene = scene().with_controls(DragControls {
            invert_x: true,
            invert_y: false,
        });
        scene.add_shape(Shape::window(100.0, 100.0, 50.0, 50.0).selectable(true));

        scene.pointer_down(Point::new(110.0, 110.0));
        scene.pointer_move(Point::new(130.0, 150.0));

        let selected = scene.selected_shape().unwrap();
        assert_eq!(selected.x, 80.0);
        assert_eq!(selected.y, 140.0);
    }

    #[test]
    fn move_without_drag_only_tracks_the_pointer() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        let mut list = crate::render::DisplayList::new();
        scene.draw(&mut list);

        scene.pointer_move(Point::new(50.0, 50.0));

        assert_eq!(scene.pointer(), Some(Point::new(50.0, 50.0)));
        assert!(!scene.is_dirty());
        assert_eq!(scene.shapes()[0].origin(), Point::ZERO);
    }

    #[test]
    fn release_ends_drag_but_keeps_selection() {
        let mut scene = scene();
        scene.add_shape(Shape::window(0.0, 0.0, 100.0, 100.0).selectable(true));
        scene.pointer_down(Point::new(10.0, 10.0));
        scene.pointer_up();

        assert!(!scene.is_dragging());
        assert!(scene.selection().is_some());

        scene.pointer_move(Point::new(60.0, 60.0));
        assert_eq!(scene.shapes()[0].origin(), Point::ZERO);
    }
}
