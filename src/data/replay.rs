// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Replay of the recorded or loaded log on the canvas

use super::{AppState, Phase};
use crate::scene::SceneState;
use crate::session::Replayer;
use std::sync::Arc;

impl AppState {
    /// Start stepping through the active log, parking the live scene.
    ///
    /// Replaying the same log again rewinds the previous replayer to the
    /// first record. An empty log leaves everything as it is.
    pub fn start_replay(&mut self) {
        if matches!(self.phase, Phase::Running | Phase::Replaying) {
            return;
        }
        let Some(log) = self.active_log() else {
            tracing::info!("Nothing to replay");
            return;
        };

        let mut replayer = match self.replayer.take() {
            Some(previous) if Arc::ptr_eq(previous.log(), &log) || **previous.log() == *log => {
                previous
            }
            _ => match Replayer::new(log) {
                Ok(replayer) => replayer,
                Err(e) => {
                    let error = format!("Cannot replay: {e}");
                    tracing::error!("{}", error);
                    self.error_message = Some(error);
                    return;
                }
            },
        };
        if replayer.is_empty() {
            tracing::info!("Nothing to replay");
            return;
        }
        replayer.restart();

        tracing::info!("Replaying {} records", replayer.len());
        let replay_scene = SceneState::new(self.scene.size());
        let live = std::mem::replace(&mut self.scene, replay_scene);
        self.parked = Some((live, self.phase));
        self.replayer = Some(replayer);
        self.phase = Phase::Replaying;
    }

    /// Replay timer: show the next record, or end the replay.
    pub fn on_replay_tick(&mut self) {
        if self.phase != Phase::Replaying {
            return;
        }
        match self.replayer.as_mut().and_then(Iterator::next) {
            Some(frame) => {
                self.scene.load_frame(frame.shapes);
                self.repaint();
            }
            None => self.stop_replay(),
        }
    }

    /// End the replay early or after the last record and bring back the
    /// live scene.
    pub fn stop_replay(&mut self) {
        if self.phase != Phase::Replaying {
            return;
        }
        if let Some(replayer) = &mut self.replayer {
            replayer.stop();
            tracing::info!("Replay stopped at record {}", replayer.next_index());
        }
        if let Some((live, phase)) = self.parked.take() {
            self.scene = live;
            self.phase = phase;
        } else {
            self.phase = Phase::Finished;
        }
        self.scene.mark_dirty();
        self.repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CanvasAction;
    use crate::config::Config;
    use crate::session::SessionLog;
    use kurbo::Point;

    fn finished_with_records() -> AppState {
        let mut state = AppState::new(Config::default());
        state.start();
        state.on_canvas_action(CanvasAction::Press(Point::new(605.0, 305.0)));
        for step in 0..4 {
            state.on_canvas_action(CanvasAction::Move(Point::new(620.0 + 10.0 * step as f64, 305.0)));
            state.on_frame_tick();
            state.on_gaze_tick();
        }
        state.on_canvas_action(CanvasAction::Release);
        state.finish();
        state
    }

    #[test]
    fn replay_steps_through_every_record_and_restores_the_scene() {
        let mut state = finished_with_records();
        let live_origin = state.scene.shapes()[0].origin();

        state.start_replay();
        assert_eq!(state.phase, Phase::Replaying);

        let mut ticks = 0;
        while state.phase == Phase::Replaying {
            state.on_replay_tick();
            ticks += 1;
            assert!(ticks < 100);
        }
        // One tick per record plus the one that ends the replay
        assert_eq!(ticks, 5);
        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.scene.shapes()[0].origin(), live_origin);
        assert_eq!(state.scene.shapes().len(), 4);
    }

    #[test]
    fn replay_frames_show_markers_and_ignore_input() {
        let mut state = finished_with_records();
        state.start_replay();
        state.on_replay_tick();

        let names: Vec<&str> = state.scene.shapes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[names.len() - 2..], ["gaze", "pointer"]);
        let before = state.scene.shapes().to_vec();

        state.on_canvas_action(CanvasAction::Press(Point::new(605.0, 305.0)));
        state.on_canvas_action(CanvasAction::Move(Point::new(700.0, 305.0)));
        assert_eq!(state.scene.shapes(), &before[..]);
    }

    #[test]
    fn stop_ends_replay_early() {
        let mut state = finished_with_records();
        let live_origin = state.scene.shapes()[0].origin();
        state.start_replay();
        state.on_replay_tick();
        state.on_replay_tick();
        assert_eq!(state.status_text(), "Replaying - frame 2 of 4");

        state.stop_replay();
        assert_eq!(state.phase, Phase::Finished);
        assert!(state.replayer.as_ref().is_some_and(|r| r.is_finished()));
        assert_eq!(state.scene.shapes()[0].origin(), live_origin);

        // Further ticks are ignored once stopped
        state.on_replay_tick();
        assert_eq!(state.phase, Phase::Finished);
    }

    #[test]
    fn replaying_again_starts_from_the_first_record() {
        let mut state = finished_with_records();
        state.start_replay();
        state.on_replay_tick();
        state.on_replay_tick();
        state.stop_replay();

        state.start_replay();
        assert_eq!(state.phase, Phase::Replaying);
        assert_eq!(state.replayer.as_ref().map(|r| r.next_index()), Some(0));

        let mut ticks = 0;
        while state.phase == Phase::Replaying {
            state.on_replay_tick();
            ticks += 1;
        }
        assert_eq!(ticks, 5);
    }

    #[test]
    fn empty_log_is_a_no_op() {
        let mut state = AppState::new(Config::default());
        state.loaded_log = Some(Arc::new(SessionLog::new("empty")));
        state.start_replay();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.replayer.is_none());
    }

    #[test]
    fn no_replay_while_running() {
        let mut state = AppState::new(Config::default());
        state.start();
        state.on_canvas_action(CanvasAction::Move(Point::new(1.0, 1.0)));
        state.on_gaze_tick();
        state.start_replay();
        assert_eq!(state.phase, Phase::Running);
    }
}
