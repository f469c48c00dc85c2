//=========================================================================
// Aetheric Platformer Engine
//
// Main entry point: configures a session and hands it to the platform
// event loop.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Platform event loop]
//         │                          │
//         ├─ with_config()           ├─ creates channel
//         ├─ with_jump_policy()      ├─ builds Session (core)
//         ├─ with_bindings()         └─ runs Platform, blocks until exit
//         ├─ with_window_title()
//         └─ with_channel_capacity()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, JumpPolicy};
use crate::core::input::KeyBindings;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::Session;
use crate::platform::{Platform, PlatformError};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`GameConfig::default`]
/// - **Bindings**: [`KeyBindings::default`]
/// - **Window title**: "Aetheric Platformer"
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use aetheric_platformer::EngineBuilder;
/// use aetheric_platformer::core::config::JumpPolicy;
///
/// EngineBuilder::new()
///     .with_jump_policy(JumpPolicy::Latched)
///     .build()
///     .run()
///     .expect("platform failed");
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    bindings: KeyBindings,
    window_title: String,
    channel_capacity: usize,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            bindings: KeyBindings::default(),
            window_title: String::from("Aetheric Platformer"),
            channel_capacity: 128,
        }
    }

    /// Replaces the whole game configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how a held jump key re-triggers.
    pub fn with_jump_policy(mut self, policy: JumpPolicy) -> Self {
        self.config.jump_policy = policy;
        self
    }

    /// Replaces the key and mouse bindings.
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine instance.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`GameConfig::validate`].
    pub fn build(self) -> Engine {
        self.config.validate();
        info!(
            "Building engine (canvas: {}x{}, jump: {:?}, channel: {})",
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.jump_policy,
            self.channel_capacity
        );

        Engine {
            config: self.config,
            bindings: self.bindings,
            window_title: self.window_title,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Configured engine, ready to open a window and run.
pub struct Engine {
    config: GameConfig,
    bindings: KeyBindings,
    window_title: String,
    channel_capacity: usize,
}

impl Engine {
    /// Opens the window and blocks until the session ends.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Builds a stopped `Session` on the receiving end
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Returns once the window closes or quit is requested
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop, window or pixel buffer
    /// cannot be created, or if presenting a frame fails.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Build the core session ------------------------------------
        let session = Session::new(self.config, self.bindings, rx);

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, session, self.window_title);
        let result = platform.run();

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
