// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Axis-aligned shapes: plain rectangles and decorated windows.
//!
//! Only two kinds exist, so they are a closed enum dispatched in
//! [`Shape::draw`] rather than a trait object hierarchy. Everything else
//! (hit testing, movement, snapshots) is shared.

use super::ShapeId;
use crate::render::Surface;
use crate::render::color::{DEFAULT_FILL, fill_color};
use crate::settings;
use crate::theme;
use kurbo::{Circle, Point, Rect, Size, Vec2};

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A filled rectangle in the shape's fill color
    Rectangle,
    /// A desktop-style window: body, border, title bar and three dots
    Window,
}

/// A rectangle on the experiment canvas
///
/// `w` and `h` are expected to be non-negative; nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// CSS-style color string, kept verbatim for the session document
    pub fill: String,
    pub selectable: bool,
    pub visible: bool,
    pub name: String,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            id: ShapeId::next(),
            kind: ShapeKind::Rectangle,
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            fill: DEFAULT_FILL.to_string(),
            selectable: false,
            visible: true,
            name: "default".to_string(),
        }
    }
}

impl Shape {
    /// A plain filled rectangle
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            ..Self::default()
        }
    }

    /// A window with decorative chrome
    pub fn window(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            kind: ShapeKind::Window,
            ..Self::rectangle(x, y, w, h)
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_window(&self) -> bool {
        self.kind == ShapeKind::Window
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    pub fn move_to(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Point containment, inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x <= self.x + self.w
            && self.y <= point.y
            && point.y <= self.y + self.h
    }

    /// Whether any part of the shape overlaps a canvas of `size`.
    pub fn is_on_canvas(&self, size: Size) -> bool {
        !(self.x > size.width
            || self.y > size.height
            || self.x + self.w < 0.0
            || self.y + self.h < 0.0)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self.kind {
            ShapeKind::Rectangle => surface.fill_rect(self.rect(), fill_color(&self.fill)),
            ShapeKind::Window => self.draw_window(surface),
        }
    }

    fn draw_window(&self, surface: &mut dyn Surface) {
        let rect = self.rect();
        surface.fill_rect(rect, theme::window::BODY);
        surface.stroke_rect(rect, theme::window::BORDER, theme::size::BORDER_WIDTH);

        let title_bar = Rect::new(
            self.x,
            self.y,
            self.x + self.w,
            self.y + settings::chrome::TITLE_BAR_HEIGHT,
        );
        surface.fill_rect(title_bar, theme::window::TITLE_BAR);

        let radius = settings::chrome::DOT_RADIUS;
        let mut center = Point::new(self.x + radius * 2.0 + 2.0, self.y + radius * 2.0 + 1.0);
        for color in theme::window::DOTS {
            let dot = Circle::new(center, radius);
            surface.fill_circle(dot, color);
            surface.stroke_circle(dot, theme::window::BORDER, theme::size::BORDER_WIDTH);
            center.x += 3.0 * radius;
        }
    }
}
