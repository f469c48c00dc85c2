//=========================================================================
// Input System
//
// Turns batches of platform input events into the player's held intents
// and a queue of one-shot control commands.
//
// Responsibilities:
// - Track which physical keys are currently held
// - Derive the level-triggered `InputState` through `KeyBindings`
// - Queue edge-triggered `Command`s (start/stop, reset, quit)
//
// Notes:
// Intents are derived from the full set of held keys, so releasing one of
// two keys bound to the same intent keeps the intent held. A `FocusLost`
// event clears the held set at its position in the stream; keys pressed
// after it in the same frame stay held.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod bindings;
pub mod event;
mod input_state;

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== External Crates =====================================================
use log::debug;

//=== Public Re-exports ===================================================
pub use bindings::{Command, Intent, KeyBindings};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use input_state::InputState;

//=== InputSystem =========================================================

/// Owns held-key tracking and the derived `InputState` snapshot.
#[derive(Debug)]
pub struct InputSystem {
    bindings: KeyBindings,
    held_keys: HashSet<KeyCode>,
    state: InputState,
    commands: Vec<Command>,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------
    pub fn new(bindings: KeyBindings) -> Self {
        const HELD_BASE: usize = 16;
        Self {
            bindings,
            held_keys: HashSet::with_capacity(HELD_BASE),
            state: InputState::IDLE,
            commands: Vec::new(),
        }
    }

    //--- update() ---------------------------------------------------------
    //
    // Consumes every batch received this frame, updates held keys, queues
    // commands for press events and recomputes the snapshot.
    //
    pub fn update(&mut self, input_batches: &mut Vec<Vec<InputEvent>>) {
        for batch in input_batches.drain(..) {
            for event in batch {
                self.digest(event);
            }
        }

        let next = InputState::from_intents(
            self.held_keys
                .iter()
                .filter_map(|key| self.bindings.intent_for(*key)),
        );

        if next != self.state {
            debug!("Input updated: {:?}", next);
            self.state = next;
        }
    }

    fn digest(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // A key already held is a stray repeat; it must not re-fire commands.
                if self.held_keys.insert(key) {
                    if let Some(command) = self.bindings.command_for_key(key) {
                        self.commands.push(command);
                    }
                }
            }
            InputEvent::KeyUp(key) => {
                self.held_keys.remove(&key);
            }
            InputEvent::MouseButtonDown(button) => {
                if let Some(command) = self.bindings.command_for_button(button) {
                    self.commands.push(command);
                }
            }
            InputEvent::MouseButtonUp(_) => {}
            InputEvent::FocusLost => {
                debug!("Focus lost, releasing {} held keys", self.held_keys.len());
                self.held_keys.clear();
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Current held-intent snapshot.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn is_key_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    /// Takes the commands queued since the last call, in arrival order.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
