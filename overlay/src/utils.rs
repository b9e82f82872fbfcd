//! Color conversion helpers
//!
//! Config colors are packed u32s; the renderer works in tiny-skia's float colors.

use hudstyle_types::PackedColor;
use tiny_skia::Color;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Unpack a packed color into four float channels in [0, 1]
#[inline]
pub fn color_from_packed(color: PackedColor) -> Color {
    color_from_rgba(color.to_rgba8())
}

/// Pack a float color, rounding each channel to the nearest byte
pub fn pack_color(color: Color) -> PackedColor {
    let c = color.to_color_u8();
    PackedColor::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
}
