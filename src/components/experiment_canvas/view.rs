// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for ExperimentCanvasWidget

use super::{CanvasAction, ExperimentCanvasWidget};
use crate::render::DisplayList;
use masonry::kurbo::Size;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Canvas showing `frame`, reporting pointer activity to `on_action`.
///
/// A new `frame` Arc triggers a repaint; handing back the same Arc does not.
pub fn experiment_canvas<State, F>(
    frame: Arc<DisplayList>,
    extent: Size,
    on_action: F,
) -> ExperimentCanvasView<State, F>
where
    F: Fn(&mut State, CanvasAction),
{
    ExperimentCanvasView {
        frame,
        extent,
        on_action,
        phantom: PhantomData,
    }
}

#[must_use = "View values do nothing unless provided to Xilem."]
pub struct ExperimentCanvasView<State, F> {
    frame: Arc<DisplayList>,
    extent: Size,
    on_action: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for ExperimentCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, CanvasAction) + 'static> View<State, (), ViewCtx>
    for ExperimentCanvasView<State, F>
{
    type Element = Pod<ExperimentCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = ExperimentCanvasWidget::new(self.frame.clone(), self.extent);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.extent != prev.extent {
            let mut widget = element.downcast::<ExperimentCanvasWidget>();
            widget.widget.extent = self.extent;
            widget.ctx.request_layout();
        }
        if !Arc::ptr_eq(&self.frame, &prev.frame) {
            let mut widget = element.downcast::<ExperimentCanvasWidget>();
            widget.widget.frame = self.frame.clone();
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<CanvasAction>() {
            Some(action) => {
                (self.on_action)(app_state, *action);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
