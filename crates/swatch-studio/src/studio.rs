use swatch_core::{InvalidArgument, SwatchModel};

use crate::config::StudioConfig;
use crate::event::{EventResult, StudioEvent};
use crate::layout::Layout;

/// Presentation controller.
///
/// Owns the swatch model for one session and translates [`StudioEvent`]s into
/// model updates. Painting is left to the caller, which checks
/// [`take_dirty`](Self::take_dirty) after each event.
#[derive(Debug)]
pub struct Studio {
    model: SwatchModel,
    columns: u16,
    layout: Layout,
    dirty: bool,
}

impl Studio {
    pub fn new(config: &StudioConfig) -> Self {
        let layout = Layout::for_columns(config.columns);
        log::debug!("studio starting with {layout:?} layout at {} columns", config.columns);
        Self {
            model: SwatchModel::new(config.first, config.second),
            columns: config.columns,
            layout,
            dirty: true,
        }
    }

    /// Applies one event.
    ///
    /// An out-of-range slot is returned as an error and the model is left as it was.
    pub fn handle(&mut self, event: StudioEvent) -> Result<EventResult, InvalidArgument> {
        log::debug!("event: {event:?}");
        match event {
            StudioEvent::ColorSelected { slot, color } => {
                self.model.set_slot(slot, color)?;
                self.dirty = true;
                Ok(EventResult::Consumed)
            }
            StudioEvent::Resize { columns } => Ok(self.resize(columns)),
            StudioEvent::Redraw => {
                self.dirty = true;
                Ok(EventResult::Consumed)
            }
            StudioEvent::Quit => Ok(EventResult::Exit),
        }
    }

    fn resize(&mut self, columns: u16) -> EventResult {
        if columns == self.columns {
            return EventResult::Ignored;
        }
        self.columns = columns;

        let layout = Layout::for_columns(columns);
        if layout == self.layout {
            return EventResult::Ignored;
        }
        log::info!("layout {:?} -> {layout:?} at {columns} columns", self.layout);
        self.layout = layout;
        self.dirty = true;
        EventResult::Consumed
    }

    /// Returns whether a repaint is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    #[inline]
    pub fn model(&self) -> &SwatchModel {
        &self.model
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn columns(&self) -> u16 {
        self.columns
    }
}
