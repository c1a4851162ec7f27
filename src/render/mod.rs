// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing-surface seam between the scene and the renderer.
//!
//! The scene only ever talks to a [`Surface`]: filled and stroked rectangles
//! and circles in absolute canvas coordinates. The live canvas records into a
//! [`DisplayList`] that the widget later replays onto a vello scene, which
//! keeps the scene logic testable without a GPU.

pub mod color;

use kurbo::{Circle, Rect, Size};
use masonry::vello::peniko::Color;

/// Primitive drawing operations the scene needs.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self, size: Size);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    fn fill_circle(&mut self, circle: Circle, color: Color);
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64);
}

/// One recorded surface operation
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Size),
    FillRect(Rect, Color),
    StrokeRect(Rect, Color, f64),
    FillCircle(Circle, Color),
    StrokeCircle(Circle, Color, f64),
}

/// A surface that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play the recorded commands onto another surface, in order.
    pub fn replay(&self, surface: &mut dyn Surface) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear(size) => surface.clear(size),
                DrawCommand::FillRect(rect, color) => surface.fill_rect(rect, color),
                DrawCommand::StrokeRect(rect, color, width) => {
                    surface.stroke_rect(rect, color, width)
                }
                DrawCommand::FillCircle(circle, color) => surface.fill_circle(circle, color),
                DrawCommand::StrokeCircle(circle, color, width) => {
                    surface.stroke_circle(circle, color, width)
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, size: Size) {
        // Anything recorded before a clear can never be seen
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(size));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeRect(rect, color, width));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle(circle, color));
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeCircle(circle, color, width));
    }
}

#[cfg(test)]
impl DisplayList {
    pub(crate) fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_earlier_commands() {
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.clear(Size::new(10.0, 10.0));
        list.fill_circle(Circle::new((1.0, 1.0), 1.0), Color::WHITE);

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Clear(_)));
        assert!(matches!(list.commands()[1], DrawCommand::FillCircle(..)));
    }

    #[test]
    fn replay_copies_commands_in_order() {
        let mut list = DisplayList::new();
        list.clear(Size::new(10.0, 10.0));
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE, 2.0);

        let mut copy = DisplayList::new();
        list.replay(&mut copy);

        assert_eq!(copy.len(), 3);
        assert!(matches!(copy.commands()[2], DrawCommand::StrokeRect(_, _, w) if w == 2.0));
    }
}
