// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Live experiment lifecycle: start, timers, pointer input, finish

use super::{AppState, LogSource, Phase};
use crate::components::CanvasAction;
use crate::gaze::GazeInput;
use crate::guide::AutoGuide;
use crate::session::Recorder;

impl AppState {
    /// Begin tracking and recording.
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        if self.is_replay_only() {
            tracing::warn!("Replay-only session, not starting tracking");
            return;
        }

        let experiment = &self.config.experiment;
        let decision = experiment
            .random_target
            .then(|| self.target_edge.decision());
        self.recorder = Recorder::new(experiment.name.clone(), decision);
        self.log_source = LogSource::Recording;

        if let Some(gaze) = &mut self.gaze
            && let Err(e) = gaze.begin()
        {
            let error = format!("Gaze disabled: {e}");
            tracing::error!("{}", error);
            self.error_message = Some(error);
            self.gaze = None;
        }
        self.recorder.start();

        self.scene.set_falling(self.config.experiment.falling);
        if self.config.experiment.self_guiding {
            self.scene.lock_selection();
            self.guide = Some(AutoGuide::new(&self.scene, self.target_edge));
        }

        self.phase = Phase::Running;
        tracing::info!("Experiment started");
    }

    /// Stop tracking; the recorded log stays available for export and replay.
    pub fn finish(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        if let Some(gaze) = &mut self.gaze {
            gaze.end();
        }
        self.recorder.stop();
        self.scene.set_falling(false);
        self.guide = None;
        self.phase = Phase::Finished;
        tracing::info!("Experiment finished with {} records", self.recorder.len());
    }

    /// Frame timer: animate and repaint the live scene.
    pub fn on_frame_tick(&mut self) {
        if self.phase == Phase::Replaying {
            return;
        }
        self.publish(|scene, surface| scene.frame_tick(surface));
    }

    /// Completion timer: finish once every window is in the target zone.
    pub fn on_completion_tick(&mut self) {
        if self.phase == Phase::Running && self.scene.is_complete() {
            tracing::info!("All windows reached the target zone");
            self.finish();
        }
    }

    /// Gaze timer: sample and record one observation.
    pub fn on_gaze_tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(gaze) = &mut self.gaze else {
            return;
        };
        let input = GazeInput {
            pointer: self.scene.pointer(),
            canvas: self.scene.size(),
        };
        if let Some(sample) = gaze.sample(&input) {
            self.recorder.record(&sample, &self.scene);
        }
    }

    /// Guide timer: move the current self-guided window one step.
    pub fn on_guide_tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        if let Some(guide) = &mut self.guide
            && !guide.step(&mut self.scene)
        {
            tracing::info!("Self-guided motion complete");
            self.guide = None;
        }
    }

    /// Pointer input from the canvas. Ignored while replaying.
    pub fn on_canvas_action(&mut self, action: CanvasAction) {
        if self.phase == Phase::Replaying {
            return;
        }
        match action {
            CanvasAction::Press(point) => self.scene.pointer_down(point),
            CanvasAction::Move(point) => self.scene.pointer_move(point),
            CanvasAction::Release => self.scene.pointer_up(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scene::TargetEdge;
    use kurbo::Point;
    use std::sync::Arc;

    fn running(config: Config) -> AppState {
        let mut state = AppState::new(config);
        state.start();
        assert_eq!(state.phase, Phase::Running);
        state
    }

    /// Drag the window whose origin is `from` so its origin lands on `to`.
    fn drag(state: &mut AppState, from: Point, to: Point) {
        let grip = from + kurbo::Vec2::new(5.0, 5.0);
        state.on_canvas_action(CanvasAction::Press(grip));
        state.on_gaze_tick();
        state.on_canvas_action(CanvasAction::Move(to + kurbo::Vec2::new(5.0, 5.0)));
        state.on_frame_tick();
        state.on_gaze_tick();
        state.on_canvas_action(CanvasAction::Release);
    }

    #[test]
    fn dragging_every_window_into_the_zone_finishes() {
        let mut state = running(Config::default());
        let origins: Vec<Point> = state.scene.shapes()[..3].iter().map(|s| s.origin()).collect();
        for (i, origin) in origins.into_iter().enumerate() {
            drag(&mut state, origin, Point::new(950.0, 50.0 + 150.0 * i as f64));
            state.on_completion_tick();
        }

        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.recorder.len(), 6);
        assert!(!state.recorder.is_recording());
        assert!(state.gaze.as_ref().is_some_and(|g| !g.is_running()));

        // Finished: nothing more is recorded
        state.on_gaze_tick();
        assert_eq!(state.recorder.len(), 6);
    }

    #[test]
    fn frame_tick_publishes_only_painted_frames() {
        let mut state = AppState::new(Config::default());
        let idle = Arc::clone(&state.frame);
        state.on_frame_tick();
        assert!(Arc::ptr_eq(&idle, &state.frame));

        state.on_canvas_action(CanvasAction::Press(Point::new(605.0, 305.0)));
        state.on_frame_tick();
        assert!(!Arc::ptr_eq(&idle, &state.frame));
        assert!(!state.frame.is_empty());
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let mut state = AppState::new(Config::default());
        state.on_canvas_action(CanvasAction::Move(Point::new(1.0, 1.0)));
        state.on_gaze_tick();
        state.on_completion_tick();
        assert!(state.recorder.is_empty());
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn random_target_is_recorded() {
        let mut config = Config::default();
        config.experiment.random_target = true;
        let state = running(config);
        assert_eq!(
            state.recorder.log().target_decision,
            Some(state.target_edge.decision())
        );
    }

    #[test]
    fn fixed_target_is_not_recorded() {
        let state = running(Config::default());
        assert_eq!(state.recorder.log().target_decision, None);
        assert_eq!(state.target_edge, TargetEdge::Right);
    }

    #[test]
    fn self_guided_run_completes_on_its_own() {
        let mut config = Config::default();
        config.experiment.self_guiding = true;
        let mut state = running(config);
        assert!(state.scene.shapes().iter().all(|s| !s.selectable));

        let mut ticks = 0;
        while state.guide.is_some() {
            state.on_guide_tick();
            ticks += 1;
            assert!(ticks < 10_000);
        }
        state.on_completion_tick();
        assert_eq!(state.phase, Phase::Finished);
    }

    #[test]
    fn replay_only_never_starts() {
        let mut config = Config::default();
        config.experiment.replay_only = true;
        let mut state = AppState::new(config);
        state.start();
        assert_eq!(state.phase, Phase::Ready);
        assert!(!state.recorder.is_recording());
    }

    #[test]
    fn falling_is_armed_only_while_running() {
        let mut config = Config::default();
        config.experiment.falling = true;
        let mut state = AppState::new(config);
        assert!(!state.scene.is_falling());

        state.start();
        assert!(state.scene.is_falling());
        let before = state.scene.shapes()[0].y;
        state.on_frame_tick();
        assert!(state.scene.shapes()[0].y > before);

        state.finish();
        assert!(!state.scene.is_falling());
    }
}
