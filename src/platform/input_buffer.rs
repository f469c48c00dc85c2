//=========================================================================
// Input Buffer
//
// Holds input events converted from Winit until the next frame boundary
// (RedrawRequested), when they are flushed to the core in one batch.
//
// Responsibilities:
// - Preserve arrival order of key and button transitions
// - Drop back-to-back duplicates (e.g. a repeated KeyDown)
// - Hand the whole frame's events over via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates enough room for a burst of key transitions so typical
    // frames never reallocate.
    //
    pub(crate) fn new() -> Self {
        const EVENTS_BASE: usize = 32;
        Self {
            events: Vec::with_capacity(EVENTS_BASE),
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Appends an event unless it repeats the previous one.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- drain() ----------------------------------------------------------
    //
    // Returns this frame's events, or `None` if nothing was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
