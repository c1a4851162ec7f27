// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! File I/O operations for AppState (export, load)

use super::{AppState, LogSource};
use crate::session::SessionLog;
use anyhow::Context;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Suggested file name in the export dialog
const DEFAULT_EXPORT_NAME: &str = "scene.json";

impl AppState {
    /// Open a save dialog and export the active log
    pub fn export_dialog(&mut self) {
        self.error_message = None;

        let path = rfd::FileDialog::new()
            .set_title("Export Session")
            .set_file_name(DEFAULT_EXPORT_NAME)
            .add_filter("Session", &["json"])
            .save_file();

        if let Some(path) = path {
            self.export(&path);
        }
    }

    /// Export the active log to `path`, reporting the outcome in the status
    pub fn export(&mut self, path: &Path) {
        match self.export_to(path) {
            Ok(count) => {
                tracing::info!("Exported {} records to {}", count, path.display());
                self.error_message = None;
                self.last_exported = Some(Local::now().format("%I:%M %p").to_string());
            }
            Err(e) => {
                let error = format!("Failed to export: {e:#}");
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }

    /// Write the active log as JSON. Returns the number of records written.
    pub fn export_to(&self, path: &Path) -> anyhow::Result<usize> {
        let log = self.active_log().context("no session to export")?;
        log.save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(log.len())
    }

    /// Open a file dialog to pick a session document
    pub fn load_dialog(&mut self) {
        self.error_message = None;

        let path = rfd::FileDialog::new()
            .set_title("Load Session")
            .add_filter("Session", &["json"])
            .pick_file();

        if let Some(path) = path {
            self.load_session(path);
        }
    }

    /// Load a session document for replay.
    ///
    /// A loaded document replaces this run's recording as the log Export
    /// and Replay act on. A rejected one leaves everything in place.
    pub fn load_session(&mut self, path: PathBuf) {
        match SessionLog::load(&path) {
            Ok(log) => {
                tracing::info!(
                    "Loaded session `{}` ({} records) from {}",
                    log.name,
                    log.len(),
                    path.display()
                );
                self.loaded_log = Some(Arc::new(log));
                self.log_source = LogSource::Loaded;
                self.error_message = None;
            }
            Err(e) => {
                let error = format!("Failed to load session: {e}");
                tracing::error!("{}", error);
                self.error_message = Some(error);
            }
        }
    }
}
