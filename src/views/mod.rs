// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! View functions for the main window

mod experiment;

pub use experiment::experiment_view;
