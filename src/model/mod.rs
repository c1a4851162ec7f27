// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Shapes placed on the experiment canvas

pub mod shape;
pub mod shape_id;

pub use shape::Shape;
pub use shape_id::ShapeId;
