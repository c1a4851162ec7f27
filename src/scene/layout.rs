// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Initial experiment layout: three windows and a target zone on one edge

use super::SceneState;
use crate::model::Shape;
use crate::settings;
use kurbo::{Size, Vec2};
use rand::Rng;

/// Screen edge occupied by the target zone.
///
/// The discriminants are the `targetDecision` codes stored in session
/// documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TargetEdge {
    Left = 1,
    #[default]
    Right = 2,
    Top = 3,
    Bottom = 4,
}

impl TargetEdge {
    pub const ALL: [TargetEdge; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Pick an edge uniformly at random
    pub fn random() -> Self {
        let index = rand::thread_rng().gen_range(0..Self::ALL.len());
        Self::ALL[index]
    }

    pub fn decision(self) -> u8 {
        self as u8
    }

    /// The zone rectangle covering a quarter of the canvas along this edge
    pub fn zone(self, size: Size) -> Shape {
        let (w, h) = (size.width, size.height);
        let shape = match self {
            Self::Left => Shape::rectangle(0.0, 0.0, w / 4.0, h),
            Self::Right => Shape::rectangle(w * 3.0 / 4.0, 0.0, w / 4.0, h),
            Self::Top => Shape::rectangle(0.0, 0.0, w, h / 4.0),
            Self::Bottom => Shape::rectangle(0.0, h * 3.0 / 4.0, w, h / 4.0),
        };
        shape.with_fill("red").named("target")
    }

    /// Unit direction pointing toward this edge
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
        }
    }
}

impl SceneState {
    /// The standard experiment: three draggable windows in the middle of
    /// the canvas and a non-selectable target zone as the topmost shape.
    pub fn experiment(size: Size, edge: TargetEdge) -> Self {
        use settings::layout::{WINDOW_HEIGHT, WINDOW_ROWS, WINDOW_STAGGER, WINDOW_WIDTH};

        let mut scene = Self::new(size);
        let center_x = size.width / 2.0;
        for (index, top) in WINDOW_ROWS.into_iter().enumerate() {
            // Only the middle window is staggered
            let x = if index == 1 {
                center_x + WINDOW_STAGGER
            } else {
                center_x
            };
            scene.add_shape(
                Shape::window(x, top, WINDOW_WIDTH, WINDOW_HEIGHT)
                    .selectable(true)
                    .named(format!("window{}", index + 1)),
            );
        }
        scene.add_shape(edge.zone(size));
        scene
    }
}
