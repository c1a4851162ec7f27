// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! The interaction state machine behind the experiment canvas.
//!
//! `SceneState` owns the shape list (z-order = index, last = topmost), the
//! current selection, drag bookkeeping and the dirty flag that gates
//! redraws. Pointer handlers, the frame tick and the replayer all mutate it
//! through methods here; the coordinating `AppState` owns the only instance.
//!
//! By convention the final shape is the target zone.

mod completion;
mod layout;
mod pointer;
mod tick;

pub use layout::TargetEdge;
pub use tick::FrameThrottle;

use crate::model::{Shape, ShapeId};
use crate::render::Surface;
use crate::session::WindowSnapshot;
use crate::theme;
use kurbo::{Point, Size, Vec2};

/// Per-axis control inversion, fixed for the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragControls {
    pub invert_x: bool,
    pub invert_y: bool,
}

/// Scene of draggable shapes
#[derive(Debug, Clone)]
pub struct SceneState {
    shapes: Vec<Shape>,
    selection: Option<ShapeId>,
    dragging: bool,
    /// Pointer position minus shape origin, captured at press time
    drag_offset: Vec2,
    /// Shape origin at press time; inverted axes mirror around it
    drag_origin: Point,
    dirty: bool,
    size: Size,
    /// Last canvas-relative pointer position seen
    pointer: Option<Point>,
    controls: DragControls,
    falling: bool,
    throttle: Option<FrameThrottle>,
}

impl SceneState {
    /// Create an empty scene covering `size`
    pub fn new(size: Size) -> Self {
        Self {
            shapes: Vec::new(),
            selection: None,
            dragging: false,
            drag_offset: Vec2::ZERO,
            drag_origin: Point::ZERO,
            dirty: true,
            size,
            pointer: None,
            controls: DragControls::default(),
            falling: false,
            throttle: None,
        }
    }

    pub fn with_controls(mut self, controls: DragControls) -> Self {
        self.controls = controls;
        self
    }

    /// Throttle redraws while dragging; `None` or `Some(0)` disables it.
    pub fn with_skip_frames(mut self, skip_frames: Option<u32>) -> Self {
        self.throttle = skip_frames.and_then(FrameThrottle::new);
        self
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.dirty = true;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selection?;
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id == id)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn set_falling(&mut self, falling: bool) {
        self.falling = falling;
    }

    /// The non-selectable zone windows must be moved into
    pub fn target_zone(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Make every shape non-selectable and drop any selection.
    pub fn lock_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.selectable = false;
        }
        self.dragging = false;
        if self.selection.take().is_some() {
            self.dirty = true;
        }
    }

    /// Move the shape at `index` by `delta`, returning its new origin.
    pub fn nudge(&mut self, index: usize, delta: Vec2) -> Option<Point> {
        let shape = self.shapes.get_mut(index)?;
        shape.translate(delta);
        self.dirty = true;
        Some(shape.origin())
    }

    /// Replace the whole shape list, as replay does for every record.
    pub fn load_frame(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.selection = None;
        self.dragging = false;
        self.dirty = true;
    }

    /// Deep copies of every window, in z-order
    pub fn snapshot_windows(&self) -> Vec<WindowSnapshot> {
        self.shapes
            .iter()
            .filter(|shape| shape.is_window())
            .map(WindowSnapshot::from)
            .collect()
    }

    /// Paint the scene if anything changed since the last paint.
    ///
    /// Returns whether the surface was touched. Shapes that are hidden or
    /// entirely off the canvas are skipped; the selection gets an outline
    /// on top of everything.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.dirty {
            return false;
        }

        surface.clear(self.size);
        for shape in &self.shapes {
            if !shape.visible || !shape.is_on_canvas(self.size) {
                continue;
            }
            shape.draw(surface);
        }

        if let Some(selected) = self.selected_shape() {
            surface.stroke_rect(
                selected.rect(),
                theme::selection::STROKE,
                theme::size::SELECTION_WIDTH,
            );
        }

        self.dirty = false;
        true
    }
}

#[cfg(test)]
impl SceneState {
    pub(crate) fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    pub(crate) fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn controls(&self) -> DragControls {
        self.controls
    }

    pub(crate) fn is_falling(&self) -> bool {
        self.falling
    }
}
