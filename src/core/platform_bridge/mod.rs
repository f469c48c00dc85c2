//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the core session.
//
// Components:
// - `interface`: the event contract the platform sends
// - `event_collector`: core-side draining of queued events per frame
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== API =================================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::PlatformEvent;
