// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for shapes on the canvas.
//!
//! Each `ShapeId` is a monotonically increasing `u64` drawn from a global
//! atomic counter. The scene stores its selection as an id rather than an
//! index, so reordering or rebuilding the shape list cannot silently retarget
//! it. Ids are never reused within a process.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

static SHAPE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    /// Create a new unique shape ID
    pub fn next() -> Self {
        Self(SHAPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::next()
    }
}
