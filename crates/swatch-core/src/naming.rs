//! Human-readable names for arbitrary colors.

use swatch_notation::PALETTE;

use crate::color::ColorRgba;

/// Alpha at or below which a color is named `clear` regardless of its RGB.
const CLEAR_ALPHA: f32 = 0.05;

/// Returns the palette name closest to `color`.
///
/// Distance is Euclidean over the straight RGB channels; alpha only matters
/// for nearly transparent colors.
pub fn nearest_name(color: ColorRgba) -> &'static str {
    if color.a <= CLEAR_ALPHA {
        return "clear";
    }

    let mut best = ("black", f32::INFINITY);
    for (name, rgba) in PALETTE.iter().filter(|(_, rgba)| rgba[3] == 0xff) {
        let p = ColorRgba::from_srgb_u8(rgba[0], rgba[1], rgba[2], rgba[3]);
        let d = (color.r - p.r).powi(2) + (color.g - p.g).powi(2) + (color.b - p.b).powi(2);
        if d < best.1 {
            best = (*name, d);
        }
    }
    best.0
}
