// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Step-by-step replay of a recorded session.
//!
//! A [`Replayer`] is a finite iterator over the log: each step yields the
//! shapes the scene should show for one record. The caller decides the
//! pacing; the replayer only knows order. It can be restarted from the
//! first record or stopped early, and an empty log yields nothing.

use super::{ObservationRecord, SessionError, SessionLog};
use crate::model::Shape;
use crate::settings;
use std::sync::Arc;

/// Everything to show for one replayed record
#[derive(Debug, Clone)]
pub struct ReplayFrame {
    /// Visible windows, then the gaze marker, then the pointer marker
    pub shapes: Vec<Shape>,
}

impl ReplayFrame {
    pub fn from_record(record: &ObservationRecord) -> Self {
        let mut shapes: Vec<Shape> = record
            .windows
            .iter()
            .filter(|snapshot| snapshot.visible)
            .map(Shape::window_from_snapshot)
            .collect();

        let gaze_size = settings::markers::GAZE_SIZE;
        shapes.push(
            Shape::rectangle(record.gaze.x, record.gaze.y, gaze_size, gaze_size)
                .with_fill("purple")
                .named("gaze"),
        );
        let pointer_size = settings::markers::POINTER_SIZE;
        shapes.push(
            Shape::rectangle(record.pointer.x, record.pointer.y, pointer_size, pointer_size)
                .with_fill("red")
                .named("pointer"),
        );

        Self { shapes }
    }
}

/// Walks a session log from the first record to the last
#[derive(Debug, Clone)]
pub struct Replayer {
    log: Arc<SessionLog>,
    next: usize,
    stopped: bool,
}

impl Replayer {
    /// Fails if the log's columns disagree on the number of records.
    pub fn new(log: Arc<SessionLog>) -> Result<Self, SessionError> {
        log.validate()?;
        Ok(Self {
            log,
            next: 0,
            stopped: false,
        })
    }

    /// Rewind to the first record
    pub fn restart(&mut self) {
        self.next = 0;
        self.stopped = false;
    }

    /// End the replay; no further frames are produced until restarted.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_finished(&self) -> bool {
        self.stopped || self.next >= self.log.len()
    }

    /// Index of the next record to be shown
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// The log being replayed
    pub fn log(&self) -> &Arc<SessionLog> {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

impl Iterator for Replayer {
    type Item = ReplayFrame;

    fn next(&mut self) -> Option<ReplayFrame> {
        if self.is_finished() {
            return None;
        }
        let record = self.log.record(self.next)?;
        let frame = ReplayFrame::from_record(&record);
        self.next += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaze::GazeSample;
    use crate::render::DisplayList;
    use crate::scene::{SceneState, TargetEdge};
    use crate::session::Recorder;
    use kurbo::{Point, Size};

    /// Record a short live session where window1 is dragged across.
    fn recorded_session() -> SessionLog {
        let mut scene = SceneState::experiment(Size::new(800.0, 700.0), TargetEdge::Right)
            .with_skip_frames(Some(1));
        let mut recorder = Recorder::new("replay-test", None);
        recorder.start();

        let mut list = DisplayList::new();
        scene.pointer_down(Point::new(410.0, 310.0));
        for step in 0..6 {
            let step = step as f64;
            scene.pointer_move(Point::new(420.0 + 20.0 * step, 310.0));
            scene.frame_tick(&mut list);
            let sample = GazeSample {
                point: Point::new(100.0 + step, 200.0),
                elapsed_ms: 33.0 * step,
            };
            recorder.record(&sample, &scene);
        }
        scene.pointer_up();
        recorder.log().clone()
    }

    #[test]
    fn empty_log_replays_nothing() {
        let mut replayer = Replayer::new(Arc::new(SessionLog::new("empty"))).unwrap();
        assert!(replayer.is_finished());
        assert!(replayer.next().is_none());
    }

    #[test]
    fn malformed_log_is_refused() {
        let mut log = SessionLog::new("ragged");
        log.x.push(1.0);
        assert!(Replayer::new(Arc::new(log)).is_err());
    }

    #[test]
    fn frames_carry_markers_after_windows() {
        let log = recorded_session();
        let mut replayer = Replayer::new(Arc::new(log.clone())).unwrap();

        let frame = replayer.next().unwrap();
        let record = log.record(0).unwrap();
        let (markers, windows) = {
            let split = frame.shapes.len() - 2;
            (&frame.shapes[split..], &frame.shapes[..split])
        };

        assert!(windows.iter().all(Shape::is_window));
        assert_eq!(markers[0].origin(), record.gaze);
        assert_eq!((markers[0].w, markers[0].fill.as_str()), (3.0, "purple"));
        assert_eq!(markers[1].origin(), record.pointer);
        assert_eq!((markers[1].w, markers[1].fill.as_str()), (4.0, "red"));
    }

    #[test]
    fn replay_reconstructs_every_recorded_tick() {
        let log = Arc::new(recorded_session());
        let replayer = Replayer::new(log.clone()).unwrap();
        let mut scene = SceneState::new(Size::new(800.0, 700.0));

        let mut frames = 0;
        for (index, frame) in replayer.enumerate() {
            let record = log.record(index).unwrap();
            scene.load_frame(frame.shapes);

            let expected: Vec<_> = record
                .windows
                .iter()
                .filter(|snapshot| snapshot.visible)
                .map(|s| (s.x, s.y, s.w, s.h))
                .collect();
            let replayed: Vec<_> = scene
                .shapes()
                .iter()
                .filter(|shape| shape.is_window())
                .map(|s| (s.x, s.y, s.w, s.h))
                .collect();
            assert_eq!(replayed, expected, "tick {index}");

            let mut list = DisplayList::new();
            assert!(scene.draw(&mut list));
            frames += 1;
        }
        assert_eq!(frames, log.len());
    }

    #[test]
    fn throttled_frames_drop_the_dragged_window() {
        let log = recorded_session();
        // skip_frames = 1 alternates hidden/visible for the dragged window
        let visible_counts: Vec<usize> = (0..log.len())
            .map(|i| log.record(i).unwrap().windows.iter().filter(|w| w.visible).count())
            .collect();
        assert!(visible_counts.contains(&2));
        assert!(visible_counts.contains(&3));
    }

    #[test]
    fn restart_and_stop() {
        let log = Arc::new(recorded_session());
        let mut replayer = Replayer::new(log.clone()).unwrap();

        assert_eq!(replayer.by_ref().count(), log.len());
        assert!(replayer.is_finished());

        replayer.restart();
        assert_eq!(replayer.next_index(), 0);
        let first = log.record(0).unwrap();
        let markers = replayer.next().map(|frame| {
            let shapes = frame.shapes;
            (shapes[shapes.len() - 2].origin(), shapes[shapes.len() - 1].origin())
        });
        assert_eq!(markers, Some((first.gaze, first.pointer)));
        assert_eq!(replayer.next_index(), 1);

        replayer.stop();
        assert!(replayer.is_finished());
        assert!(replayer.next().is_none());
        assert_eq!(replayer.next_index(), 1);
    }
}
