// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)
//!
//! Shape fills are not listed here: they are stored on each shape as a
//! color string and parsed at draw time by `render::color`.

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

/// The experiment surface itself is light so the window chrome reads the
/// same as a desktop.
const CANVAS_BACKGROUND: Color = BASE_O;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;
const ERROR_UI_TEXT: Color = Color::from_rgb8(0xff, 0x70, 0x60);

// ============================================================================
// UI PANELS (control bar)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const BUTTON_ACTIVE_BACKGROUND: Color = Color::from_rgb8(0x14, 0x64, 0x14);

// ============================================================================
// WINDOW CHROME
// ============================================================================
const WINDOW_BODY: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const WINDOW_BORDER: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const WINDOW_TITLE_BAR: Color = Color::from_rgb8(0xb2, 0xba, 0xbd);
const WINDOW_DOT_CLOSE: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const WINDOW_DOT_MINIMIZE: Color = Color::from_rgb8(0xff, 0xff, 0x00);
const WINDOW_DOT_MAXIMIZE: Color = Color::from_rgb8(0x00, 0x80, 0x00);

// ============================================================================
// SELECTION OUTLINE
// ============================================================================
const SELECTION_STROKE: Color = Color::from_rgb8(0xcc, 0x00, 0x00);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for the experiment canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const ERROR: Color = super::ERROR_UI_TEXT;
}

/// Colors for the control bar
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
    pub const BUTTON_ACTIVE: Color = super::BUTTON_ACTIVE_BACKGROUND;
}

/// Decorative chrome painted on every `Window` shape
///
/// The three dots are purely cosmetic: close, minimize, maximize.
pub mod window {
    use super::Color;
    pub const BODY: Color = super::WINDOW_BODY;
    pub const BORDER: Color = super::WINDOW_BORDER;
    pub const TITLE_BAR: Color = super::WINDOW_TITLE_BAR;
    pub const DOTS: [Color; 3] = [
        super::WINDOW_DOT_CLOSE,
        super::WINDOW_DOT_MINIMIZE,
        super::WINDOW_DOT_MAXIMIZE,
    ];
}

/// Outline drawn around the selected shape
pub mod selection {
    use super::Color;
    pub const STROKE: Color = super::SELECTION_STROKE;
}

/// Sizes for rendering and layout
pub mod size {
    /// Width of window borders and dot outlines
    pub const BORDER_WIDTH: f64 = 1.0;
    /// Width of the selection outline
    pub const SELECTION_WIDTH: f64 = 1.0;

    // ===== UI Layout =====
    /// Margin around the control bar
    pub const UI_PANEL_MARGIN: f64 = 8.0;
    /// Gap between control bar buttons
    pub const UI_PANEL_GAP: f64 = 6.0;
    /// Border thickness for buttons and panels
    pub const PANEL_BORDER_WIDTH: f64 = 1.5;
    /// Rounded corner radius for panels
    pub const PANEL_RADIUS: f64 = 11.0;
}
