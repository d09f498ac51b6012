/// Narrowest width, in terminal columns, that fits three swatches side by side.
pub const REGULAR_MIN_COLUMNS: u16 = 60;

/// How the three swatches are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Stacked top to bottom.
    Compact,
    /// Side by side.
    Regular,
}

impl Layout {
    pub fn for_columns(columns: u16) -> Self {
        if columns >= REGULAR_MIN_COLUMNS {
            Layout::Regular
        } else {
            Layout::Compact
        }
    }
}
