use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::command::parse_line;
use crate::config::StudioConfig;
use crate::event::EventResult;
use crate::painter::Painter;
use crate::studio::Studio;

/// One interactive session: paint, then read commands until `quit` or EOF.
///
/// Bad commands and rejected slot indices are reported on `err` and the
/// session carries on. Only I/O failures end it early.
pub struct Application {
    studio: Studio,
    painter: Painter,
}

impl Application {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            studio: Studio::new(config),
            painter: Painter::new(config.plain),
        }
    }

    #[cfg(test)]
    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        self.repaint_if_dirty(out)?;

        for line in input.lines() {
            let line = line.context("reading command from input")?;

            let event = match parse_line(&line) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(err, "error: {e}").context("writing diagnostic")?;
                    continue;
                }
            };

            match self.studio.handle(event) {
                Ok(EventResult::Exit) => break,
                Ok(result) => log::trace!("event consumed: {}", result.is_consumed()),
                Err(e) => {
                    writeln!(err, "error: {e}").context("writing diagnostic")?;
                    continue;
                }
            }
            self.repaint_if_dirty(out)?;
        }

        log::debug!("session ended");
        Ok(())
    }

    fn repaint_if_dirty<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.studio.take_dirty() {
            log::debug!(
                "painting {:?} layout for {} columns",
                self.studio.layout(),
                self.studio.columns()
            );
            self.painter
                .paint(out, self.studio.model(), self.studio.layout())
                .context("painting swatches")?;
        }
        Ok(())
    }
}
