// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Timing and geometry constants for the experiment.
//!
//! These stay fixed across runs. Per-run switches (falling mode, inverted
//! controls, target placement) live in `config.rs`, colors in `theme.rs`.

use std::time::Duration;

// ============================================================================
// TICK INTERVALS
// ============================================================================
/// Redraw/animation tick
const FRAME_INTERVAL_MS: u64 = 10;

/// How often the scene is checked for completion
const COMPLETION_INTERVAL_MS: u64 = 500;

/// Gaze sampling cadence (~30 Hz)
const GAZE_INTERVAL_MS: u64 = 33;

/// Delay between replayed records
const REPLAY_INTERVAL_MS: u64 = 50;

/// Delay between self-guided movement steps
const GUIDE_INTERVAL_MS: u64 = 30;

// ============================================================================
// MOTION
// ============================================================================
/// Downward drift per frame tick in falling mode
const FALL_STEP: f64 = 0.9;

/// Distance a window travels per self-guided step
const GUIDE_STEP: f64 = 2.0;

// ============================================================================
// EXPERIMENT LAYOUT
// ============================================================================
const WINDOW_WIDTH: f64 = 200.0;
const WINDOW_HEIGHT: f64 = 100.0;

/// Top edge of each window; the second one is also nudged right by 10
const WINDOW_ROWS: [f64; 3] = [300.0, 400.0, 500.0];
const WINDOW_STAGGER: f64 = 10.0;

// ============================================================================
// WINDOW CHROME
// ============================================================================
const TITLE_BAR_HEIGHT: f64 = 13.0;
const CHROME_DOT_RADIUS: f64 = 3.0;

// ============================================================================
// REPLAY MARKERS
// ============================================================================
const GAZE_MARKER_SIZE: f64 = 3.0;
const POINTER_MARKER_SIZE: f64 = 4.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Periods of the recurring tasks
pub mod timing {
    use super::Duration;

    pub const FRAME: Duration = Duration::from_millis(super::FRAME_INTERVAL_MS);
    pub const COMPLETION: Duration = Duration::from_millis(super::COMPLETION_INTERVAL_MS);
    pub const GAZE: Duration = Duration::from_millis(super::GAZE_INTERVAL_MS);
    pub const REPLAY: Duration = Duration::from_millis(super::REPLAY_INTERVAL_MS);
    pub const GUIDE: Duration = Duration::from_millis(super::GUIDE_INTERVAL_MS);
}

/// Per-tick displacement for animated modes
pub mod motion {
    pub const FALL_STEP: f64 = super::FALL_STEP;
    pub const GUIDE_STEP: f64 = super::GUIDE_STEP;
}

/// Initial placement of the draggable windows
pub mod layout {
    pub const WINDOW_WIDTH: f64 = super::WINDOW_WIDTH;
    pub const WINDOW_HEIGHT: f64 = super::WINDOW_HEIGHT;
    pub const WINDOW_ROWS: [f64; 3] = super::WINDOW_ROWS;
    pub const WINDOW_STAGGER: f64 = super::WINDOW_STAGGER;
}

/// Decorative window chrome
pub mod chrome {
    pub const TITLE_BAR_HEIGHT: f64 = super::TITLE_BAR_HEIGHT;
    pub const DOT_RADIUS: f64 = super::CHROME_DOT_RADIUS;
}

/// Synthetic markers added to replayed frames
pub mod markers {
    pub const GAZE_SIZE: f64 = super::GAZE_MARKER_SIZE;
    pub const POINTER_SIZE: f64 = super::POINTER_MARKER_SIZE;
}
