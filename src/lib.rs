//=========================================================================
// Aetheric Platformer: Library Root
//
// This crate defines the public API surface of the platformer.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the headless core (`Session`, world, input, loop driver,
//   drawing surface) so it can be driven and tested without a window
// - Keep the Winit/pixels integration (`platform`) private
//
// Typical usage:
// ```no_run
// use aetheric_platformer::EngineBuilder;
//
// fn main() -> Result<(), aetheric_platformer::PlatformError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that is not OS plumbing: configuration, input,
// physics, loop pacing and the abstract drawing surface.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, the software canvas and event translation.
// `engine` wires a `Session` to the platform.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{FrameOutcome, Session};
pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
