//=========================================================================
// Core Session
//
// Central coordinator for everything that is not OS plumbing: input,
// world simulation and loop pacing.
//
// Responsibilities:
// - Drain platform events queued since the last frame boundary
// - Turn them into held intents and control commands
// - Apply commands (start/stop, reset, quit)
// - Drive one `LoopDriver::tick` per frame
//
// Notes:
// The session runs on the same thread as the platform event loop. The
// platform only talks to it through the `PlatformEvent` channel and the
// `frame()` entry point, so the whole core can be driven headlessly.
//
//=========================================================================

//=== External Crates =====================================================
use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Modules =============================================================
pub mod config;
pub mod input;
pub mod loop_driver;
pub mod platform_bridge;
pub mod render;
pub mod world;

//=== Internal Imports ====================================================
use config::GameConfig;
use input::{Command, InputSystem, KeyBindings};
use loop_driver::{FrameReporter, LoopDriver, TickOutcome};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::Surface;
use world::World;

//=== FrameOutcome ========================================================

/// What happened during one `Session::frame` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The platform asked to close, or the quit command fired.
    Exit,

    /// Loop is stopped; nothing advanced.
    Idle,

    /// Loop just started; the first tick runs on the next frame.
    Started,

    /// World advanced by `dt` seconds and was redrawn.
    Advanced { dt: f64, fps: Option<u32> },
}

impl FrameOutcome {
    /// Whether the host should schedule another frame.
    pub fn should_reschedule(&self) -> bool {
        matches!(self, Self::Started | Self::Advanced { .. })
    }
}

//=== Session =============================================================

/// One play session: input, world and loop state.
pub struct Session {
    collector: EventCollector,
    input: InputSystem,
    world: World,
    driver: LoopDriver,
}

impl Session {
    //--- Construction -----------------------------------------------------

    /// Builds a stopped session reading platform events from `receiver`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig, bindings: KeyBindings, receiver: Receiver<PlatformEvent>) -> Self {
        config.validate();
        let driver = LoopDriver::new(config.max_dt);

        Self {
            collector: EventCollector::new(receiver),
            input: InputSystem::new(bindings),
            world: World::new(config),
            driver,
        }
    }

    /// Builds a session together with the sender side of its channel.
    pub fn with_channel(
        config: GameConfig,
        bindings: KeyBindings,
        capacity: usize,
    ) -> (Self, Sender<PlatformEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self::new(config, bindings, rx), tx)
    }

    //--- frame() ----------------------------------------------------------

    /// Runs one frame at host timestamp `now` (milliseconds).
    pub fn frame(
        &mut self,
        now: f64,
        surface: &mut dyn Surface,
        reporter: &mut dyn FrameReporter,
    ) -> FrameOutcome {
        //--- Step 1: Gather platform events ------------------------------
        if let TickControl::Exit = self.collector.collect_frame() {
            info!("Session exiting");
            return FrameOutcome::Exit;
        }

        //--- Step 2: Update input ----------------------------------------
        let mut batches = self.collector.take_batches();
        self.input.update(&mut batches);

        //--- Step 3: Apply commands --------------------------------------
        let mut started = false;
        for command in self.input.drain_commands() {
            match command {
                Command::Quit => {
                    info!("Quit requested");
                    return FrameOutcome::Exit;
                }
                Command::ToggleRun => {
                    started = self.toggle(now, reporter);
                }
                Command::Reset => {
                    self.world.reset();
                    if !self.driver.is_running() {
                        self.world.draw(surface);
                    }
                }
            }
        }

        if started {
            return FrameOutcome::Started;
        }

        //--- Step 4: Tick ------------------------------------------------
        match self
            .driver
            .tick(now, &mut self.world, self.input.state(), surface, reporter)
        {
            TickOutcome::Skipped => FrameOutcome::Idle,
            TickOutcome::Advanced { dt, fps } => FrameOutcome::Advanced { dt, fps },
        }
    }

    //--- Loop Control -----------------------------------------------------

    /// Flips the loop state, notifies `reporter`, and returns whether the
    /// loop is now running.
    pub fn toggle(&mut self, now: f64, reporter: &mut dyn FrameReporter) -> bool {
        let running = self.driver.toggle(now);
        reporter.running_changed(running);
        running
    }

    /// Draws the current world without advancing it.
    pub fn paint(&self, surface: &mut dyn Surface) {
        self.world.draw(surface);
    }

    //--- Accessors --------------------------------------------------------

    pub fn world(&self) -> &World {
        &self.world
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn input(&self) -> &InputSystem {
        &self.input
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.driver.is_running()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
