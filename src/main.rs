// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Gazebench: drag-and-drop experiment harness with gaze recording

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    gazebench::run(EventLoop::with_user_event())
}
