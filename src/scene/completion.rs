// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Completion check: have all windows reached the target zone?

use super::SceneState;

impl SceneState {
    /// True when every shape before the target zone has its origin inside
    /// the zone.
    ///
    /// Only the top-left corner is tested, not the whole rectangle, so a
    /// window that merely pokes its corner into the zone counts. A scene
    /// without any shapes has no target zone and is never complete.
    pub fn is_complete(&self) -> bool {
        let Some((target, rest)) = self.shapes.split_last() else {
            return false;
        };
        rest.iter().all(|shape| target.contains(shape.origin()))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Shape;
    use crate::scene::SceneState;
    use kurbo::{Point, Size, Vec2};

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    fn experiment() -> SceneState {
        let mut scene = SceneState::new(Size::new(W, H));
        scene.add_shape(Shape::window(100.0, 300.0, 200.0, 100.0).selectable(true));
        scene.add_shape(Shape::window(110.0, 400.0, 200.0, 100.0).selectable(true));
        scene.add_shape(Shape::window(100.0, 500.0, 200.0, 100.0).selectable(true));
        scene.add_shape(
            Shape::rectangle(W * 0.75, 0.0, W * 0.25, H)
                .with_fill("red")
                .named("target"),
        );
        scene
    }

    /// Press inside a window, drag so its origin lands on `origin`, release.
    fn drag_window_to(scene: &mut SceneState, index: usize, origin: Point) {
        let start = scene.shapes()[index].origin();
        let grip = start + Vec2::new(5.0, 5.0);
        scene.pointer_down(grip);
        scene.pointer_move(origin + Vec2::new(5.0, 5.0));
        scene.pointer_up();
        assert_eq!(scene.shapes()[index].origin(), origin);
    }

    #[test]
    fn empty_scene_is_not_complete() {
        assert!(!SceneState::new(Size::new(W, H)).is_complete());
    }

    #[test]
    fn completes_exactly_when_the_last_window_enters() {
        let mut scene = experiment();
        assert!(!scene.is_complete());

        drag_window_to(&mut scene, 0, Point::new(650.0, 50.0));
        assert!(!scene.is_complete());
        drag_window_to(&mut scene, 1, Point::new(650.0, 200.0));
        assert!(!scene.is_complete());

        // One unit short of the zone's left edge
        drag_window_to(&mut scene, 2, Point::new(W * 0.75 - 1.0, 350.0));
        assert!(!scene.is_complete());

        drag_window_to(&mut scene, 2, Point::new(W * 0.75, 350.0));
        assert!(scene.is_complete());
    }

    #[test]
    fn only_the_origin_corner_is_checked() {
        let mut scene = experiment();
        drag_window_to(&mut scene, 0, Point::new(650.0, 50.0));
        drag_window_to(&mut scene, 1, Point::new(650.0, 200.0));
        // Body sticks out far past the bottom of the canvas
        drag_window_to(&mut scene, 2, Point::new(790.0, 590.0));
        assert!(scene.is_complete());
    }
}
