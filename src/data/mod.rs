// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the scene, the gaze tracker, the recorder and any replay
//! in progress. Timers and canvas callbacks mutate it; every UI rebuild
//! reads from it. Sub-modules split the methods by concern: the live
//! experiment, replay, and file I/O.

mod experiment;
mod file_io;
mod replay;

use crate::config::Config;
use crate::gaze::GazeTracker;
use crate::guide::AutoGuide;
use crate::render::{DisplayList, Surface};
use crate::scene::{DragControls, SceneState, TargetEdge};
use crate::session::{Recorder, Replayer, SessionLog};
use kurbo::Size;
use std::sync::Arc;
use xilem::WindowId;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Scene laid out, nothing recorded yet
    Ready,
    /// Tracking and recording
    Running,
    /// Tracking stopped; the log can be exported or replayed
    Finished,
    /// Stepping through a log
    Replaying,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Ready => "Ready",
            Phase::Running => "Running",
            Phase::Finished => "Finished",
            Phase::Replaying => "Replaying",
        }
    }
}

/// Which log Export and Replay act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSource {
    /// This run's recording
    #[default]
    Recording,
    /// The last document picked with Load or from the command line
    Loaded,
}

/// Main application state
pub struct AppState {
    pub config: Config,

    /// The live scene, or the replay scene while replaying
    pub scene: SceneState,

    pub target_edge: TargetEdge,

    /// Latest painted frame; replaced only when the scene repaints
    pub frame: Arc<DisplayList>,

    pub phase: Phase,

    /// `None` when the configured backend could not be built
    pub gaze: Option<GazeTracker>,

    pub recorder: Recorder,

    /// Log picked with Load or from the command line
    pub loaded_log: Option<Arc<SessionLog>>,

    /// Set by the most recent Start or successful Load
    pub log_source: LogSource,

    pub replayer: Option<Replayer>,

    /// Live scene and phase parked while a replay owns the canvas
    pub(crate) parked: Option<(SceneState, Phase)>,

    /// Self-guided motion in progress
    pub guide: Option<AutoGuide>,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// When the log was last exported (formatted time string for UI)
    pub last_exported: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let experiment = &config.experiment;
        let target_edge = if experiment.random_target {
            TargetEdge::random()
        } else {
            TargetEdge::default()
        };
        let scene = Self::live_scene(&config, target_edge);

        let mut error_message = None;
        let gaze = match GazeTracker::from_config(&config.gaze) {
            Ok(tracker) => Some(tracker),
            Err(e) => {
                let error = format!("Gaze disabled: {e}");
                tracing::warn!("{}", error);
                error_message = Some(error);
                None
            }
        };

        let recorder = Recorder::new(experiment.name.clone(), None);
        tracing::info!(
            "Experiment `{}` laid out, target on the {:?} edge",
            experiment.name,
            target_edge
        );

        let mut state = Self {
            config,
            scene,
            target_edge,
            frame: Arc::new(DisplayList::new()),
            phase: Phase::Ready,
            gaze,
            recorder,
            loaded_log: None,
            log_source: LogSource::default(),
            replayer: None,
            parked: None,
            guide: None,
            error_message,
            last_exported: None,
            running: true,
            main_window_id: WindowId::next(),
        };
        state.repaint();
        state
    }

    fn live_scene(config: &Config, edge: TargetEdge) -> SceneState {
        let experiment = &config.experiment;
        let size = Size::new(experiment.canvas_width, experiment.canvas_height);
        SceneState::experiment(size, edge)
            .with_controls(DragControls {
                invert_x: experiment.invert_x,
                invert_y: experiment.invert_y,
            })
            .with_skip_frames(experiment.skip_frames)
    }

    pub fn canvas_size(&self) -> Size {
        self.scene.size()
    }

    pub fn is_replay_only(&self) -> bool {
        self.config.experiment.replay_only
    }

    /// Paint the scene if it is dirty and publish the new frame.
    pub(crate) fn repaint(&mut self) -> bool {
        self.publish(|scene, surface| scene.draw(surface))
    }

    /// Let `paint` draw the scene onto a fresh list; publish it if painted.
    pub(crate) fn publish(
        &mut self,
        paint: impl FnOnce(&mut SceneState, &mut dyn Surface) -> bool,
    ) -> bool {
        let mut list = DisplayList::new();
        let painted = paint(&mut self.scene, &mut list);
        if painted {
            self.frame = Arc::new(list);
        }
        painted
    }

    /// Whether Export and Replay use this run's recording. A source with
    /// nothing in it falls back to the other one.
    fn uses_recording(&self) -> bool {
        match self.log_source {
            LogSource::Recording => !self.recorder.is_empty() || self.loaded_log.is_none(),
            LogSource::Loaded => self.loaded_log.is_none(),
        }
    }

    /// The log Export and Replay act on, if it has any records
    pub fn active_log(&self) -> Option<Arc<SessionLog>> {
        if self.uses_recording() {
            (!self.recorder.is_empty()).then(|| Arc::new(self.recorder.log().clone()))
        } else {
            self.loaded_log.clone().filter(|log| !log.is_empty())
        }
    }

    /// Whether Export and Replay have anything to work with
    pub fn has_replayable_log(&self) -> bool {
        if self.uses_recording() {
            !self.recorder.is_empty()
        } else {
            self.loaded_log.as_ref().is_some_and(|log| !log.is_empty())
        }
    }

    /// One-line status for the control bar
    pub fn status_text(&self) -> String {
        let mut status = self.phase.label().to_string();
        match self.phase {
            Phase::Running => {
                let ready = self.gaze.as_ref().is_some_and(GazeTracker::is_ready);
                status.push_str(&format!(
                    " - {} records{}",
                    self.recorder.len(),
                    if ready { "" } else { " (waiting for gaze)" }
                ));
            }
            Phase::Replaying => {
                if let Some(replayer) = &self.replayer {
                    status.push_str(&format!(
                        " - frame {} of {}",
                        replayer.next_index(),
                        replayer.len()
                    ));
                }
            }
            Phase::Finished | Phase::Ready => {
                if self.uses_recording() {
                    if !self.recorder.is_empty() {
                        status.push_str(&format!(" - {} records", self.recorder.len()));
                    }
                } else if let Some(log) = &self.loaded_log {
                    status.push_str(&format!(" - loaded `{}` ({} records)", log.name, log.len()));
                }
            }
        }
        if let Some(time) = &self.last_exported {
            status.push_str(&format!(" - exported at {time}"));
        }
        status
    }
}

impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
