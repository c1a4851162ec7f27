// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Gazebench: a drag-and-drop experiment harness with gaze recording
//! and replay, built with Xilem

use std::path::{Path, PathBuf};
use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::core::fork;
use xilem::core::one_of::Either;
use xilem::view::task_raw;
use xilem::{EventLoopBuilder, WidgetView, WindowView, Xilem, window};

mod components;
mod config;
mod data;
mod gaze;
mod guide;
mod model;
mod render;
mod scene;
mod session;
mod settings;
mod theme;
mod ticker;
mod views;

use config::Config;
use data::{AppState, Phase};
use ticker::{Tick, tick_every};
use views::experiment_view;

/// Extra room around the canvas for the control bar and status line
const CHROME_HEIGHT: f64 = 120.0;

/// Entry point for the Gazebench application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "gazebench=info,wgpu=warn,naga=warn,wgpu_core=warn,wgpu_hal=warn",
        )
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CommandLine::parse(std::env::args().skip(1));
    let config = load_config(args.config.as_deref());
    let mut initial_state = AppState::new(config);

    if let Some(session) = args.session {
        if session.exists() {
            tracing::info!("Loading session from: {}", session.display());
            initial_state.load_session(session);
        } else {
            tracing::error!("Path does not exist: {}", session.display());
        }
    }

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Paths given on the command line, told apart by extension
#[derive(Debug, Default, PartialEq)]
struct CommandLine {
    config: Option<PathBuf>,
    session: Option<PathBuf>,
}

impl CommandLine {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            let path = PathBuf::from(arg);
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => parsed.config = Some(path),
                Some("json") => parsed.session = Some(path),
                _ => {
                    tracing::error!("Ignoring argument: {}", path.display());
                    tracing::error!("Usage: gazebench [config.toml] [session.json]");
                }
            }
        }
        parsed
    }
}

/// A bad config is reported and replaced by defaults
fn load_config(path: Option<&Path>) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}; using defaults", e);
            Config::default()
        }
    }
}

/// Build the single experiment window.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let content = with_timers(state);

    let size = state.canvas_size();
    let window_size = LogicalSize::new(
        size.width + 2.0 * theme::size::UI_PANEL_MARGIN,
        size.height + CHROME_HEIGHT,
    );
    let title = format!("Gazebench - {}", state.config.experiment.name);
    let window_view = window(state.main_window_id, title, content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

/// Wrap a view with a timer that calls `on_tick` every `period`.
///
/// The timer lives exactly as long as the returned view is in the tree.
fn every<V>(
    view: V,
    period: Duration,
    on_tick: fn(&mut AppState),
) -> impl WidgetView<AppState> + use<V>
where
    V: WidgetView<AppState>,
{
    fork(
        view,
        task_raw(
            move |proxy| tick_every(proxy, period),
            move |state: &mut AppState, _msg: Tick| on_tick(state),
        ),
    )
}

/// Keep `view` as is, or wrap it with a timer when `active`.
fn every_if<V>(
    active: bool,
    view: V,
    period: Duration,
    on_tick: fn(&mut AppState),
) -> impl WidgetView<AppState> + use<V>
where
    V: WidgetView<AppState>,
{
    if active {
        Either::A(every(view, period, on_tick))
    } else {
        Either::B(view)
    }
}

/// Experiment view with the timers the current phase needs.
///
/// The frame timer runs outside replay; the others only run while their
/// activity is in progress.
fn with_timers(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    use settings::timing;

    let phase = state.phase;
    let running = phase == Phase::Running;
    let view = experiment_view(state);

    let view = every_if(
        running && state.gaze.is_some(),
        view,
        timing::GAZE,
        AppState::on_gaze_tick,
    );
    let view = every_if(running, view, timing::COMPLETION, AppState::on_completion_tick);
    let view = every_if(
        running && state.guide.is_some(),
        view,
        timing::GUIDE,
        AppState::on_guide_tick,
    );
    let view = every_if(
        phase == Phase::Replaying,
        view,
        timing::REPLAY,
        AppState::on_replay_tick,
    );
    every_if(
        phase != Phase::Replaying,
        view,
        timing::FRAME,
        AppState::on_frame_tick,
    )
}
