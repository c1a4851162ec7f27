// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Periodic wake-ups for the app's timers.
//!
//! Each timer is a `task_raw` view running [`tick_every`]. Dropping the
//! view from the tree aborts the task, which is how timers are stopped.

use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;
use xilem::tokio::time::MissedTickBehavior;

/// Message sent once per period.
#[derive(Debug)]
pub struct Tick;

/// Send a [`Tick`] every `period` until the receiving view goes away.
pub async fn tick_every(proxy: MessageProxy<Tick>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // A stalled UI should not get a burst of catch-up ticks
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        if proxy.message(Tick).is_err() {
            tracing::debug!("Ticker receiver gone, stopping");
            break;
        }
    }
}
