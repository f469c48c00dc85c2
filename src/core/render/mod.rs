//=========================================================================
// Render Contract
//=========================================================================
//
// Backend-independent drawing types. The simulation only ever sees the
// `Surface` trait; concrete backends live in the platform layer.
//
// Components:
// - `surface`: Color, Rect and the `Surface` capability trait
// - `recorder`: headless `Surface` that records calls for inspection
//
//=========================================================================

//=== Module Declarations =================================================

pub mod recorder;
pub mod surface;

//=== Public API ==========================================================

pub use recorder::{CommandRecorder, DrawCommand};
pub use surface::{Color, Rect, Surface};
