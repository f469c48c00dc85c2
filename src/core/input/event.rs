//=========================================================================
// Input Event Types
//
// Platform-neutral representation of the key and button events the game
// reacts to. The platform layer converts Winit events into these; the
// input system turns them into held intents and one-shot commands.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSystem ── KeyBindings ──→ InputState + Commands
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and any other non-standard buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Identifies the key location, not the character produced: `KeyA` is the
/// same physical key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,

    /// Any key the input layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Discrete input event delivered by the platform layer.
///
/// Events are level transitions: a `KeyDown` marks the key held until the
/// matching `KeyUp` or a `FocusLost` arrives. Auto-repeat is filtered out
/// before events reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),

    /// The window lost focus; every key held up to this point is released.
    FocusLost,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_down_and_up_are_distinct() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::KeyA),
            InputEvent::KeyUp(KeyCode::KeyA),
            "KeyDown(KeyA) and KeyUp(KeyA) must not be equal"
        );
    }

    #[test]
    fn identical_events_deduplicate_in_set() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::Space));
        set.insert(InputEvent::KeyDown(KeyCode::Space));
        set.insert(InputEvent::MouseButtonDown(MouseButton::Left));
        assert_eq!(set.len(), 2);
    }
}
