// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Experiment view: control bar above the canvas

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, flex_row, label, sized_box};

use crate::components::experiment_canvas;
use crate::data::{AppState, Phase};
use crate::theme;

/// Control bar, status line and canvas
pub fn experiment_view(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let canvas = experiment_canvas(
        state.frame.clone(),
        state.canvas_size(),
        |state: &mut AppState, action| state.on_canvas_action(action),
    );

    flex_col((control_bar(state), status_panel(state), canvas))
        .gap(theme::size::UI_PANEL_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(theme::size::UI_PANEL_MARGIN)
        .background_color(theme::app::BACKGROUND)
}

// ===== Control Bar =====

fn control_bar(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let phase = state.phase;
    let live = !state.is_replay_only();
    let has_log = state.has_replayable_log();
    let idle = matches!(phase, Phase::Ready | Phase::Finished);

    flex_row((
        control_button("Start", live && phase == Phase::Ready, AppState::start),
        control_button("Finished", phase == Phase::Running, AppState::finish),
        control_button("Export", idle && has_log, AppState::export_dialog),
        control_button("Replay", idle && has_log, AppState::start_replay),
        control_button("Load", idle, AppState::load_dialog),
        control_button("Stop replay", phase == Phase::Replaying, AppState::stop_replay),
    ))
    .gap(theme::size::UI_PANEL_GAP.px())
}

/// A button that only acts when `enabled`; disabled ones are dimmed.
fn control_button(
    text: &'static str,
    enabled: bool,
    action: fn(&mut AppState),
) -> impl WidgetView<AppState> + use<> {
    let (text_color, background) = if enabled {
        (theme::text::PRIMARY, theme::panel::BUTTON_ACTIVE)
    } else {
        (theme::text::SECONDARY, theme::panel::BACKGROUND)
    };

    button(
        label(text).text_size(14.0).color(text_color),
        move |state: &mut AppState| {
            if enabled {
                action(state);
            }
        },
    )
    .background_color(background)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}

// ===== Status =====

fn status_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let error = state.error_message.clone().unwrap_or_default();

    sized_box(
        flex_col((
            label(state.status_text())
                .text_size(14.0)
                .color(theme::text::PRIMARY),
            label(error).text_size(12.0).color(theme::text::ERROR),
        ))
        .gap(2.px())
        .cross_axis_alignment(CrossAxisAlignment::Start),
    )
    .width(state.canvas_size().width.px())
    .padding(8.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}
