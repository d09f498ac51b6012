use swatch_core::ColorRgba;

/// Commands the presentation layer sends to the studio.
#[derive(Debug, Clone, PartialEq)]
pub enum StudioEvent {
    /// The user picked `color` for the swatch at `slot`.
    ColorSelected { slot: usize, color: ColorRgba },
    /// The available width changed (terminal resize or explicit request).
    Resize { columns: u16 },
    /// Repaint without changing state.
    Redraw,
    /// End the session.
    Quit,
}

/// Result returned by [`Studio::handle`](crate::studio::Studio::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event changed what is on screen.
    Consumed,
    /// Event had no visible effect.
    Ignored,
    /// The session should end.
    Exit,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
