// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the experiment window

pub mod experiment_canvas;

pub use experiment_canvas::{CanvasAction, experiment_canvas};
