//! Named colors.
//!
//! The set mirrors the system colors a UI toolkit typically exposes as named
//! constants. Entries are straight-alpha sRGB bytes.

/// Ordered palette used both for parsing names and for naming arbitrary colors.
pub const PALETTE: &[(&str, [u8; 4])] = &[
    ("black",     [0x00, 0x00, 0x00, 0xff]),
    ("darkgray",  [0x55, 0x55, 0x55, 0xff]),
    ("gray",      [0x80, 0x80, 0x80, 0xff]),
    ("lightgray", [0xaa, 0xaa, 0xaa, 0xff]),
    ("white",     [0xff, 0xff, 0xff, 0xff]),
    ("red",       [0xff, 0x00, 0x00, 0xff]),
    ("green",     [0x00, 0xff, 0x00, 0xff]),
    ("blue",      [0x00, 0x00, 0xff, 0xff]),
    ("cyan",      [0x00, 0xff, 0xff, 0xff]),
    ("yellow",    [0xff, 0xff, 0x00, 0xff]),
    ("magenta",   [0xff, 0x00, 0xff, 0xff]),
    ("orange",    [0xff, 0x80, 0x00, 0xff]),
    ("purple",    [0x80, 0x00, 0x80, 0xff]),
    ("brown",     [0x99, 0x66, 0x33, 0xff]),
    ("clear",     [0x00, 0x00, 0x00, 0x00]),
];

/// Looks up a palette entry by name, ignoring ASCII case.
///
/// `grey` spellings are accepted as aliases of the `gray` entries.
pub fn named(name: &str) -> Option<[u8; 4]> {
    let lower = name.to_ascii_lowercase().replace("grey", "gray");
    PALETTE
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, rgba)| *rgba)
}
