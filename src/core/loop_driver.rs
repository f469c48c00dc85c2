//=========================================================================
// Loop Driver
//=========================================================================
//
// Two-state machine (Stopped / Running) with a single `tick` entry point
// that the host scheduler calls once per frame.
//
// Architecture:
// ```text
//             start(now)                 tick(now)  [Running]
//   Stopped ─────────────► Running ─┐    ├─ dt = clamp((now - last) / 1000)
//      ▲                            │    ├─ World::update(dt, input)
//      └──────── stop() ────────────┘    ├─ World::draw(surface)
//                                        └─ report fps, ask for next tick
// ```
//
// The driver never schedules itself. A tick that arrives after `stop()`
// returns `TickOutcome::Skipped` without touching the world, and the
// host must not schedule again.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};

//=== Internal Dependencies ===============================================

use crate::core::input::InputState;
use crate::core::render::Surface;
use crate::core::world::World;

//=== FrameReporter =======================================================

/// UI collaborator notified of loop state and frame rate.
pub trait FrameReporter {
    /// Called once per advanced tick with the rounded frame rate.
    fn report_fps(&mut self, fps: u32);

    /// Called whenever the loop starts or stops.
    fn running_changed(&mut self, running: bool);
}

/// Reporter that discards everything (headless hosts, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl FrameReporter for NullReporter {
    fn report_fps(&mut self, _fps: u32) {}
    fn running_changed(&mut self, _running: bool) {}
}

//=== LoopState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopState {
    Stopped,

    /// Running since the tick stamped `last_timestamp` (milliseconds).
    Running { last_timestamp: f64 },
}

//=== TickOutcome =========================================================

/// Result of one `tick` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Loop is stopped: nothing was updated or drawn.
    Skipped,

    /// World advanced by `dt` seconds and was redrawn.
    ///
    /// `fps` is `None` when `dt` was zero.
    Advanced { dt: f64, fps: Option<u32> },
}

impl TickOutcome {
    /// Whether the host should schedule another tick.
    pub fn should_reschedule(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

//=== Timing Helpers ======================================================

/// Converts elapsed milliseconds into a simulation step in seconds,
/// clamped to `[0, max_dt]`.
pub fn clamp_delta(elapsed_ms: f64, max_dt: f64) -> f64 {
    let seconds = (elapsed_ms / 1000.0).max(0.0);
    seconds.min(max_dt)
}

/// Rounded frames-per-second for a step, or `None` for a zero step.
pub fn fps_for(dt: f64) -> Option<u32> {
    if dt > 0.0 {
        Some((1.0 / dt).round() as u32)
    } else {
        None
    }
}

//=== LoopDriver ==========================================================

/// Owns the running flag and last tick timestamp.
#[derive(Debug, Clone)]
pub struct LoopDriver {
    state: LoopState,
    max_dt: f64,
}

impl LoopDriver {
    /// Creates a stopped driver.
    ///
    /// # Panics
    ///
    /// Panics if `max_dt <= 0.0`.
    pub fn new(max_dt: f64) -> Self {
        assert!(max_dt > 0.0, "Max dt must be positive, got {}", max_dt);
        Self {
            state: LoopState::Stopped,
            max_dt,
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Stopped → Running. Returns `false` if already running.
    ///
    /// `now` becomes the reference timestamp for the first tick; the caller
    /// must schedule that tick.
    pub fn start(&mut self, now: f64) -> bool {
        match self.state {
            LoopState::Running { .. } => false,
            LoopState::Stopped => {
                self.state = LoopState::Running { last_timestamp: now };
                info!(target: "loop", "Loop started at {:.3} ms", now);
                true
            }
        }
    }

    /// Running → Stopped. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        match self.state {
            LoopState::Stopped => false,
            LoopState::Running { .. } => {
                self.state = LoopState::Stopped;
                info!(target: "loop", "Loop stopped");
                true
            }
        }
    }

    /// Flips the state and returns whether the loop is now running.
    pub fn toggle(&mut self, now: f64) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_running()
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one frame if the loop is running.
    pub fn tick(
        &mut self,
        now: f64,
        world: &mut World,
        input: &InputState,
        surface: &mut dyn Surface,
        reporter: &mut dyn FrameReporter,
    ) -> TickOutcome {
        let last_timestamp = match self.state {
            LoopState::Stopped => {
                trace!(target: "loop", "Tick after stop ignored");
                return TickOutcome::Skipped;
            }
            LoopState::Running { last_timestamp } => last_timestamp,
        };

        let dt = clamp_delta(now - last_timestamp, self.max_dt);
        self.state = LoopState::Running { last_timestamp: now };

        world.update(dt, input);
        world.draw(surface);

        let fps = fps_for(dt);
        if let Some(fps) = fps {
            reporter.report_fps(fps);
        }

        trace!(target: "loop", "Tick dt={:.4}s fps={:?}", dt, fps);
        TickOutcome::Advanced { dt, fps }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> LoopState {
        self.state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
