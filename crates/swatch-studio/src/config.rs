use swatch_core::ColorRgba;

/// Startup configuration for a studio session.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub first: ColorRgba,
    pub second: ColorRgba,
    /// Initial terminal width used to pick the layout.
    pub columns: u16,
    /// Paint without ANSI escapes.
    pub plain: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            first: ColorRgba::yellow(),
            second: ColorRgba::blue(),
            columns: 80,
            plain: false,
        }
    }
}
