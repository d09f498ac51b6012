use std::fmt;

/// A caller broke the contract of the swatch model or the blend function.
///
/// These are programmer errors: the presentation layer is expected to pass
/// valid slot indices and at least one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Slot index other than `0` or `1`.
    SlotOutOfRange { index: usize },
    /// [`blend`](crate::blend) was given no colors.
    EmptyBlend,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::SlotOutOfRange { index } => {
                write!(f, "invalid argument: slot index {index} is out of range (expected 0 or 1)")
            }
            InvalidArgument::EmptyBlend => {
                write!(f, "invalid argument: cannot blend an empty set of colors")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
