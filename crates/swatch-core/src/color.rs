use std::str::FromStr;

use swatch_notation::{parse_color, ColorLiteral, ParseError};

/// Straight-alpha RGBA color.
///
/// Channels are normalized to `[0, 1]`. Values outside that range are not
/// rejected here; constructors that take user input go through the notation
/// parser, which enforces the range.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn blue() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn yellow() -> Self {
        Self::new(1.0, 1.0, 0.0, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Quantizes to sRGB bytes, rounding to nearest and clamping to `[0, 255]`.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbbaa` form of [`to_srgb_u8`](Self::to_srgb_u8).
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    #[inline]
    pub fn channels(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Per-channel comparison within `eps`.
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        self.channels()
            .iter()
            .zip(other.channels())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl From<ColorLiteral> for ColorRgba {
    fn from(lit: ColorLiteral) -> Self {
        Self::new(lit.r, lit.g, lit.b, lit.a)
    }
}

impl FromStr for ColorRgba {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constructors_match_parser() {
        assert_eq!("yellow".parse::<ColorRgba>().unwrap(), ColorRgba::yellow());
        assert_eq!("blue".parse::<ColorRgba>().unwrap(), ColorRgba::blue());
        assert_eq!("#ff0000".parse::<ColorRgba>().unwrap(), ColorRgba::red());
    }

    #[test]
    fn srgb_bytes_round_trip_extremes() {
        assert_eq!(ColorRgba::from_srgb_u8(255, 0, 255, 0), ColorRgba::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(ColorRgba::white().to_srgb_u8(), [255, 255, 255, 255]);
    }

    #[test]
    fn to_srgb_u8_rounds_and_clamps() {
        let c = ColorRgba::new(0.5, -0.2, 1.7, 1.0);
        assert_eq!(c.to_srgb_u8(), [128, 0, 255, 255]);
    }

    #[test]
    fn hex_output() {
        assert_eq!(ColorRgba::yellow().to_hex(), "#ffff00ff");
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = ColorRgba::new(0.5, 0.5, 0.5, 1.0);
        let b = ColorRgba::new(0.5001, 0.5, 0.4999, 1.0);
        assert!(a.approx_eq(b, 1e-3));
        assert!(!a.approx_eq(b, 1e-5));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!ColorRgba::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
        assert!(ColorRgba::black().is_finite());
    }
}
