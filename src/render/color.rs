// Copyright 2025 the Gazebench Authors
// SPDX-License-Identifier: Apache-2.0

//! CSS-style color strings used for shape fills.
//!
//! Shapes keep their fill as a string so it round-trips through the session
//! document unchanged. Only the forms the experiment actually produces are
//! understood: `#RRGGBB`, `#RGB` and a handful of named colors.

use masonry::vello::peniko::Color;

/// Fill used when a shape has no fill, or one we cannot parse.
pub const DEFAULT_FILL: &str = "#AAAAAA";

const DEFAULT_FILL_COLOR: Color = Color::from_rgb8(0xaa, 0xaa, 0xaa);

/// Parse a color string, returning `None` for anything unrecognized.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let named = match value.to_ascii_lowercase().as_str() {
        "white" => Color::from_rgb8(0xff, 0xff, 0xff),
        "black" => Color::from_rgb8(0x00, 0x00, 0x00),
        "red" => Color::from_rgb8(0xff, 0x00, 0x00),
        "yellow" => Color::from_rgb8(0xff, 0xff, 0x00),
        "green" => Color::from_rgb8(0x00, 0x80, 0x00),
        "purple" => Color::from_rgb8(0x80, 0x00, 0x80),
        "gray" | "grey" => Color::from_rgb8(0x80, 0x80, 0x80),
        _ => return None,
    };
    Some(named)
}

/// Parse a fill, falling back to the default shape gray.
pub fn fill_color(value: &str) -> Color {
    parse_color(value).unwrap_or_else(|| {
        tracing::debug!("Unrecognized fill {:?}, using default", value);
        DEFAULT_FILL_COLOR
    })
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        3 => {
            // #RGB expands each nibble: #abc == #aabbcc
            let mut channels = [0u8; 3];
            for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                let nibble = digit.to_digit(16)? as u8;
                *slot = nibble * 0x11;
            }
            Some(Color::from_rgb8(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}
