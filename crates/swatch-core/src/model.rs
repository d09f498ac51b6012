use crate::blend::blend_pair;
use crate::color::ColorRgba;
use crate::error::InvalidArgument;

/// One of the two user-editable input positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl TryFrom<usize> for Slot {
    type Error = InvalidArgument;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Slot::First),
            1 => Ok(Slot::Second),
            _ => Err(InvalidArgument::SlotOutOfRange { index }),
        }
    }
}

/// Two input colors plus their blend.
///
/// Invariant: `blended` equals the component-wise mean of `slots` after
/// construction and after every successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchModel {
    slots: [ColorRgba; 2],
    blended: ColorRgba,
}

impl SwatchModel {
    pub fn new(first: ColorRgba, second: ColorRgba) -> Self {
        let slots = [first, second];
        Self { slots, blended: blend_pair(slots) }
    }

    /// Replaces one slot and recomputes the blend.
    ///
    /// An out-of-range `index` leaves the model untouched.
    pub fn set_slot(&mut self, index: usize, color: ColorRgba) -> Result<(), InvalidArgument> {
        let slot = Slot::try_from(index).inspect_err(|e| log::warn!("set_slot rejected: {e}"))?;
        self.set(slot, color);
        Ok(())
    }

    /// Typed variant of [`set_slot`](Self::set_slot); cannot fail.
    pub fn set(&mut self, slot: Slot, color: ColorRgba) {
        self.slots[slot.index()] = color;
        self.blended = blend_pair(self.slots);
        log::debug!(
            "slot {} set to {}, blend is now {}",
            slot.index(),
            color.to_hex(),
            self.blended.to_hex()
        );
    }

    pub fn slot(&self, index: usize) -> Result<ColorRgba, InvalidArgument> {
        Slot::try_from(index).map(|s| self.get(s))
    }

    #[inline]
    pub fn get(&self, slot: Slot) -> ColorRgba {
        self.slots[slot.index()]
    }

    #[inline]
    pub fn slots(&self) -> [ColorRgba; 2] {
        self.slots
    }

    #[inline]
    pub fn blended(&self) -> ColorRgba {
        self.blended
    }
}

impl Default for SwatchModel {
    /// Yellow and blue.
    fn default() -> Self {
        Self::new(ColorRgba::yellow(), ColorRgba::blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::blend;

    fn c(r: f32, g: f32, b: f32, a: f32) -> ColorRgba { ColorRgba::new(r, g, b, a) }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_yellow_and_blue() {
        let m = SwatchModel::default();
        assert_eq!(m.slots(), [ColorRgba::yellow(), ColorRgba::blue()]);
        assert_eq!(m.blended(), c(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn new_blends_initial_colors() {
        let a = c(0.2, 0.4, 0.6, 1.0);
        let b = c(0.6, 0.0, 0.2, 0.5);
        let m = SwatchModel::new(a, b);
        assert_eq!(m.blended(), blend([a, b]).unwrap());
    }

    // ── set_slot ──────────────────────────────────────────────────────────

    #[test]
    fn set_second_slot_to_red() {
        let mut m = SwatchModel::default();
        m.set_slot(1, ColorRgba::red()).unwrap();
        assert_eq!(m.blended(), c(1.0, 0.5, 0.0, 1.0));
        assert_eq!(m.slot(0).unwrap(), ColorRgba::yellow());
        assert_eq!(m.slot(1).unwrap(), ColorRgba::red());
    }

    #[test]
    fn set_first_slot_keeps_second() {
        let mut m = SwatchModel::default();
        let green = c(0.0, 1.0, 0.0, 1.0);
        m.set_slot(0, green).unwrap();
        assert_eq!(m.blended(), blend([green, ColorRgba::blue()]).unwrap());
    }

    #[test]
    fn blend_tracks_every_mutation() {
        let mut m = SwatchModel::default();
        let steps = [(0, ColorRgba::white()), (1, ColorRgba::black()), (0, ColorRgba::red())];
        for (i, color) in steps {
            m.set_slot(i, color).unwrap();
            assert_eq!(m.blended(), blend(m.slots()).unwrap());
        }
    }

    #[test]
    fn out_of_range_index_is_rejected_and_state_unchanged() {
        let mut m = SwatchModel::default();
        let before = m.clone();
        assert_eq!(
            m.set_slot(2, ColorRgba::red()),
            Err(InvalidArgument::SlotOutOfRange { index: 2 })
        );
        assert_eq!(m, before);
        assert!(m.set_slot(usize::MAX, ColorRgba::red()).is_err());
        assert_eq!(m, before);
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn slot_accessor_rejects_out_of_range() {
        let m = SwatchModel::default();
        assert_eq!(m.slot(5), Err(InvalidArgument::SlotOutOfRange { index: 5 }));
    }

    #[test]
    fn slot_index_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::try_from(slot.index()), Ok(slot));
        }
    }
}
