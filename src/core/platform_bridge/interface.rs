//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages the platform layer queues for the core.
//
// The platform and the core share one thread; the channel decouples the
// OS event callbacks from the frame boundary at which the core reads
// them, so every event queued before a redraw is seen by that frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Input events buffered since the previous frame boundary, in order.
    Inputs(Vec<InputEvent>),

    /// Window lost keyboard focus; held keys will never see their key-up.
    FocusLost,

    /// Window close requested.
    WindowClosed,
}
