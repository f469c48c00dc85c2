//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_platformer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::PlatformError;

// Session and configuration
pub use crate::core::config::{GameConfig, JumpPolicy};
pub use crate::core::{FrameOutcome, Session};

// Input system
pub use crate::core::input::{Command, InputEvent, InputState, Intent, KeyBindings, KeyCode, MouseButton};

// Simulation and loop
pub use crate::core::loop_driver::{FrameReporter, LoopDriver, NullReporter, TickOutcome};
pub use crate::core::world::{entity::Player, World};

// Drawing
pub use crate::core::render::{Color, CommandRecorder, DrawCommand, Rect, Surface};

// Platform bridge
pub use crate::core::platform_bridge::PlatformEvent;
