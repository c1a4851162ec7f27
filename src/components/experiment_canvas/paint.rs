// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helpers for ExperimentCanvasWidget

use super::ExperimentCanvasWidget;
use crate::render::Surface;
use crate::theme;
use kurbo::{Affine, Circle, Rect, Stroke};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

/// [`Surface`] backed by a vello scene
struct VelloSurface<'a> {
    scene: &'a mut Scene,
}

impl Surface for VelloSurface<'_> {
    fn clear(&mut self, size: Size) {
        fill_color(self.scene, &size.to_rect(), theme::canvas::BACKGROUND);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        fill_color(self.scene, &rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, &Brush::Solid(color), None, &rect);
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        fill_color(self.scene, &circle, color);
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, &Brush::Solid(color), None, &circle);
    }
}

impl ExperimentCanvasWidget {
    pub(super) fn paint_frame(&self, scene: &mut Scene, canvas_size: Size) {
        let mut surface = VelloSurface { scene };
        // Background first, in case the frame has not been drawn yet
        surface.clear(canvas_size);
        self.frame.replay(&mut surface);
    }
}
