// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Experiment canvas widget.
//!
//! The widget is deliberately dumb: it paints the latest display list the
//! app hands it and reports primary-button pointer activity, in canvas
//! coordinates, as [`CanvasAction`]s. All hit-testing and dragging happens
//! in the scene state owned by the app.

mod paint;
mod view;

pub use view::experiment_canvas;

use crate::render::DisplayList;
use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;

/// Pointer activity on the canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    Press(Point),
    Move(Point),
    Release,
}

pub struct ExperimentCanvasWidget {
    /// Last painted frame
    pub(super) frame: Arc<DisplayList>,
    /// Fixed canvas extent
    pub(super) extent: Size,
    /// Primary button is held
    pressed: bool,
}

impl ExperimentCanvasWidget {
    pub fn new(frame: Arc<DisplayList>, extent: Size) -> Self {
        Self {
            frame,
            extent,
            pressed: false,
        }
    }
}

impl Widget for ExperimentCanvasWidget {
    type Action = CanvasAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.constrain(self.extent)
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_frame(scene, ctx.size());
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                ctx.capture_pointer();
                self.pressed = true;
                let local_pos = ctx.local_position(state.position);
                ctx.submit_action::<CanvasAction>(CanvasAction::Press(local_pos));
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                let local_pos = ctx.local_position(current.position);
                ctx.submit_action::<CanvasAction>(CanvasAction::Move(local_pos));
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                self.pressed = false;
                ctx.submit_action::<CanvasAction>(CanvasAction::Release);
            }

            PointerEvent::Cancel(_) => {
                // A lost capture still has to end the drag
                if std::mem::take(&mut self.pressed) {
                    ctx.submit_action::<CanvasAction>(CanvasAction::Release);
                }
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label("Experiment canvas");
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
