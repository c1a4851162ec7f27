// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Session recording, the persisted JSON document, and replay.
//!
//! A live session appends one [`ObservationRecord`] per gaze sample to a
//! [`SessionLog`]. The log is the only durable artifact: exported as a
//! single JSON document and later fed back through a [`Replayer`], which
//! rebuilds the scene from each record's window snapshots.

mod document;
mod recorder;
mod replay;

pub use document::{ObservationRecord, SessionLog, WindowSnapshot};
pub use recorder::Recorder;
pub use replay::Replayer;

use std::path::PathBuf;

/// Errors from reading, writing or validating a session document
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid session JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed session document: {0}")]
    Malformed(String),
}
