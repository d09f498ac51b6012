use std::io::{self, Write};

use swatch_core::{nearest_name, ColorRgba, Slot, SwatchModel};

use crate::layout::Layout;

/// Swatch width in terminal cells.
const SWATCH_WIDTH: usize = 16;
/// Rows of solid color per swatch.
const BLOCK_ROWS: usize = 3;

/// Renders the three swatches (two slots and their blend) to a text stream.
///
/// Each swatch is a label row (uppercased color name), a solid block, and a
/// hex row. Color is drawn with 24-bit ANSI background escapes unless the
/// painter is `plain`, in which case blocks are filled with `#`.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    plain: bool,
}

impl Painter {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    pub fn paint<W: Write>(&self, out: &mut W, model: &SwatchModel, layout: Layout) -> io::Result<()> {
        let swatches = [
            self.swatch(model.get(Slot::First)),
            self.swatch(model.get(Slot::Second)),
            self.swatch(model.blended()),
        ];
        let glyphs = ['+', '='];

        match layout {
            Layout::Compact => {
                for (i, rows) in swatches.iter().enumerate() {
                    for row in rows {
                        writeln!(out, "{}", row.trim_end())?;
                    }
                    if let Some(glyph) = glyphs.get(i) {
                        let line = format!("{:^w$}", glyph, w = SWATCH_WIDTH);
                        writeln!(out, "{}", line.trim_end())?;
                    }
                }
            }
            Layout::Regular => {
                let middle = 1 + BLOCK_ROWS / 2;
                for r in 0..swatches[0].len() {
                    let (plus, equals) = if r == middle { ('+', '=') } else { (' ', ' ') };
                    let line = format!(
                        "{} {plus} {} {equals} {}",
                        swatches[0][r], swatches[1][r], swatches[2][r]
                    );
                    writeln!(out, "{}", line.trim_end())?;
                }
            }
        }
        writeln!(out)?;
        out.flush()
    }

    /// Rows for one swatch. Every row is `SWATCH_WIDTH` cells wide on screen.
    fn swatch(&self, color: ColorRgba) -> Vec<String> {
        let name = nearest_name(color).to_uppercase();
        let mut rows = Vec::with_capacity(BLOCK_ROWS + 2);
        rows.push(format!("{:^w$.w$}", name, w = SWATCH_WIDTH));
        for _ in 0..BLOCK_ROWS {
            rows.push(self.block(color));
        }
        rows.push(format!("{:^w$}", color.to_hex(), w = SWATCH_WIDTH));
        rows
    }

    fn block(&self, color: ColorRgba) -> String {
        if self.plain {
            return "#".repeat(SWATCH_WIDTH);
        }
        // Terminals have no alpha; composite over black.
        let [r, g, b, _] = ColorRgba::new(color.r * color.a, color.g * color.a, color.b * color.a, 1.0)
            .to_srgb_u8();
        format!("\x1b[48;2;{r};{g};{b}m{}\x1b[0m", " ".repeat(SWATCH_WIDTH))
    }
}
