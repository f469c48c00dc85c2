//=========================================================================
// Input State
//
// Per-frame snapshot of the player's held intents.
//
// Notes:
// The snapshot is written only by the InputSystem and handed to the
// simulation by shared reference. Flags are level-triggered: a flag is
// `true` for as long as any key bound to it is held.
//
//=========================================================================

//=== Internal Modules ====================================================
use super::bindings::Intent;

//=== InputState ==========================================================

/// Held movement intents for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// State with no intents held.
    pub const IDLE: Self = Self { left: false, right: false, jump: false };

    /// Builds a snapshot from the set of currently held intents.
    pub fn from_intents<I>(intents: I) -> Self
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut state = Self::IDLE;
        for intent in intents {
            state.set(intent, true);
        }
        state
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        match intent {
            Intent::Left => self.left,
            Intent::Right => self.right,
            Intent::Jump => self.jump,
        }
    }

    pub fn set(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::Left => self.left = held,
            Intent::Right => self.right = held,
            Intent::Jump => self.jump = held,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
