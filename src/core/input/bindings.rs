//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys and mouse buttons to game intents and commands.
//
// Architecture:
//   KeyCode      → HashMap → Intent   (level-triggered, held)
//   KeyCode      → HashMap → Command  (edge-triggered, on press)
//   MouseButton  → HashMap → Command  (edge-triggered, on press)
//
// Several keys may share one intent. A key is bound to at most one
// intent and at most one command.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};

//=== Intent ==============================================================

/// Movement intent held by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Left,
    Right,
    Jump,
}

//=== Command =============================================================

/// One-shot control command, fired when its key or button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start the loop if stopped, stop it if running.
    ToggleRun,

    /// Restore the player to its spawn state.
    Reset,

    /// Close the window and end the session.
    Quit,
}

//=== KeyBindings =========================================================

/// Lookup tables from physical inputs to intents and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    intents: HashMap<KeyCode, Intent>,
    key_commands: HashMap<KeyCode, Command>,
    mouse_commands: HashMap<MouseButton, Command>,
}

impl KeyBindings {
    /// Creates an empty binding table.
    pub fn empty() -> Self {
        Self {
            intents: HashMap::new(),
            key_commands: HashMap::new(),
            mouse_commands: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a movement intent, replacing any previous intent.
    pub fn bind_intent(&mut self, key: KeyCode, intent: Intent) -> &mut Self {
        self.intents.insert(key, intent);
        self
    }

    /// Binds a key to a command, replacing any previous command.
    pub fn bind_command(&mut self, key: KeyCode, command: Command) -> &mut Self {
        self.key_commands.insert(key, command);
        self
    }

    /// Binds a mouse button to a command.
    pub fn bind_mouse_command(&mut self, button: MouseButton, command: Command) -> &mut Self {
        self.mouse_commands.insert(button, command);
        self
    }

    /// Removes every binding (intent and command) for a key.
    pub fn unbind_key(&mut self, key: KeyCode) -> &mut Self {
        self.intents.remove(&key);
        self.key_commands.remove(&key);
        self
    }

    //--- Lookup -----------------------------------------------------------

    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        self.intents.get(&key).copied()
    }

    pub fn command_for_key(&self, key: KeyCode) -> Option<Command> {
        self.key_commands.get(&key).copied()
    }

    pub fn command_for_button(&self, button: MouseButton) -> Option<Command> {
        self.mouse_commands.get(&button).copied()
    }
}

/// Arrow keys and WASD for movement, Space/Up/W for jump, Enter or a left
/// click to start/stop, R to reset, Escape to quit.
impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind_intent(KeyCode::ArrowLeft, Intent::Left)
            .bind_intent(KeyCode::KeyA, Intent::Left)
            .bind_intent(KeyCode::ArrowRight, Intent::Right)
            .bind_intent(KeyCode::KeyD, Intent::Right)
            .bind_intent(KeyCode::ArrowUp, Intent::Jump)
            .bind_intent(KeyCode::Space, Intent::Jump)
            .bind_intent(KeyCode::KeyW, Intent::Jump)
            .bind_command(KeyCode::Enter, Command::ToggleRun)
            .bind_command(KeyCode::KeyR, Command::Reset)
            .bind_command(KeyCode::Escape, Command::Quit)
            .bind_mouse_command(MouseButton::Left, Command::ToggleRun);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
