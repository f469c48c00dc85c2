//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the core session and presents
// frames through `pixels`.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ↓                                                      │
//  │  input_processor ── Winit types → InputEvent             │
//  │   ↓                                                      │
//  │  InputBuffer ── held until the frame boundary            │
//  │   ↓                                                      │
//  │  RedrawRequested                                         │
//  │   ├─ flush → Channel → Session::frame()                  │
//  │   ├─ Canvas (software raster) → pixels frame → present   │
//  │   └─ request next redraw while the loop is running       │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → All buffered input sent as one batch
//   → Session drains it before deciding what the frame does
//   → Empty buffers NOT sent
//
// Platform and session share the main thread, so the channel is written
// with `try_send`. A full channel drops the batch with a warning instead
// of blocking the only thread that could drain it.
//
// While the loop is stopped no redraws are scheduled. Any input or focus
// change requests one so that a start command is still delivered.
//
//=========================================================================

//=== Submodules ==========================================================

mod font;
mod input_buffer;
mod input_processor;
mod raster;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::loop_driver::FrameReporter;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{FrameOutcome, Session};
use input_buffer::InputBuffer;
use raster::Canvas;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: the event loop exits and `Engine::run` returns
/// the error.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop failed: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    #[error("failed to create window: {0}")]
    WindowCreation(#[source] OsError),

    #[error("failed to create pixel buffer: {0}")]
    PixelBuffer(#[source] pixels::Error),

    #[error("failed to present frame: {0}")]
    Present(#[source] pixels::Error),

    #[error("failed to resize surface: {0}")]
    Resize(#[source] pixels::TextureError),
}

//=== HudTitle ============================================================

/// `FrameReporter` that keeps the FPS readout and run state in the window
/// title.
pub(crate) struct HudTitle {
    base: String,
    fps: Option<u32>,
    running: bool,
    applied: Option<String>,
}

impl HudTitle {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            fps: None,
            running: false,
            applied: None,
        }
    }

    pub(crate) fn title(&self) -> String {
        let state = if self.running { "Running..." } else { "Start" };
        match self.fps {
            Some(fps) => format!("{} | FPS: {} | {}", self.base, fps, state),
            None => format!("{} | {}", self.base, state),
        }
    }

    /// Returns the title if it differs from the last one handed out.
    pub(crate) fn take_changed(&mut self) -> Option<String> {
        let title = self.title();
        if self.applied.as_deref() == Some(title.as_str()) {
            return None;
        }
        self.applied = Some(title.clone());
        Some(title)
    }
}

impl FrameReporter for HudTitle {
    fn report_fps(&mut self, fps: u32) {
        self.fps = Some(fps);
    }

    fn running_changed(&mut self, running: bool) {
        self.running = running;
    }
}

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, session, title)`
/// 2. **Execution**: `platform.run()` blocks in the Winit event loop
/// 3. **Startup**: `resumed()` creates the window and pixel buffer and
///    paints the initial scene
/// 4. **Shutdown**: close, quit, or a fatal error exits the loop
///
/// # Fields
///
/// - `window`/`pixels`: created lazily in `resumed()`
/// - `buffer`: accumulates events until `RedrawRequested`
/// - `event_sender`: channel into the session's collector
/// - `canvas`: software surface the session draws into
pub(crate) struct Platform {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    canvas: Canvas,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    session: Session,
    hud: HudTitle,
    clock: Instant,
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform around a session. No window yet.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        session: Session,
        title: impl Into<String>,
    ) -> Self {
        let config = session.world().config();
        let canvas = Canvas::new(
            config.canvas_width.round() as u32,
            config.canvas_height.round() as u32,
        );

        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            pixels: None,
            canvas,
            buffer: InputBuffer::new(),
            event_sender,
            session,
            hud: HudTitle::new(title),
            clock: Instant::now(),
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the session exits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the loop cannot start, or the first
    /// fatal error raised while it was running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Milliseconds since the platform was created.
    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Sends a non-input event to the session.
    fn notify(&self, event: PlatformEvent) {
        if let Err(e) = self.event_sender.try_send(event) {
            warn!(target: "platform", "Could not notify session: {}", e);
        }
    }

    /// Flushes buffered input events to the session as one batch.
    ///
    /// A full or disconnected channel drops the batch with a warning.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();
        trace!(target: "platform::input", "Flushing {} events", count);

        match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping {} events", count);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
            }
        }
    }

    /// Sends the buffered input ahead of `FocusLost`, so the release
    /// covers every key pressed before the focus change.
    fn focus_lost(&mut self) {
        self.flush_input_buffer();
        self.notify(PlatformEvent::FocusLost);
        self.request_redraw();
    }

    /// Buffers an input event and wakes the loop so it gets delivered.
    fn queue_input(&mut self, event: InputEvent) {
        self.buffer.push(event);
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(self.hud.title())
            .with_inner_size(LogicalSize::new(self.canvas.width(), self.canvas.height()));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::WindowCreation)?,
        );
        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(self.canvas.width(), self.canvas.height(), texture)
            .map_err(PlatformError::PixelBuffer)?;

        self.session.paint(&mut self.canvas);
        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn resize_surface(&mut self, size: PhysicalSize<u32>) -> Result<(), PlatformError> {
        // Minimized windows report zero; keep the old surface.
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        if let Some(pixels) = self.pixels.as_mut() {
            pixels
                .resize_surface(size.width, size.height)
                .map_err(PlatformError::Resize)?;
        }
        self.request_redraw();
        Ok(())
    }

    /// Runs one session frame and presents the canvas.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        self.flush_input_buffer();

        let now = self.now_ms();
        let outcome = self.session.frame(now, &mut self.canvas, &mut self.hud);
        if outcome == FrameOutcome::Exit {
            event_loop.exit();
            return Ok(());
        }

        if let (Some(window), Some(title)) = (&self.window, self.hud.take_changed()) {
            window.set_title(&title);
        }

        if let Some(pixels) = self.pixels.as_mut() {
            pixels.frame_mut().copy_from_slice(self.canvas.as_rgba());
            pixels.render().map_err(PlatformError::Present)?;
        }

        if outcome.should_reschedule() {
            self.request_redraw();
        }
        Ok(())
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and pixel buffer on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_surface(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.notify(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform", "Window lost focus");
                self.focus_lost();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match input_processor::translate_key(&key_event) {
                    Some(event) => self.queue_input(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = input_processor::translate_mouse_button(button, state);
                self.queue_input(event);
            }

            WindowEvent::Resized(size) => {
                if let Err(e) = self.resize_surface(size) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw(event_loop) {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::input::{KeyBindings, KeyCode};
    use crossbeam_channel::bounded;

    fn platform(capacity: usize) -> (Platform, crossbeam_channel::Receiver<PlatformEvent>) {
        let (tx, rx) = bounded(capacity);
        let (session, _unused) = Session::with_channel(GameConfig::default(), KeyBindings::default(), 1);
        (Platform::new(tx, session, "Test"), rx)
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _rx) = platform(4);
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.pixels.is_none());
        assert_eq!((platform.canvas.width(), platform.canvas.height()), (800, 500));
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx) = platform(4);
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx) = platform(4);
        platform.queue_input(InputEvent::KeyDown(KeyCode::Space));
        platform.queue_input(InputEvent::KeyUp(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => assert_eq!(events.len(), 2),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx) = platform(4);
        platform.queue_input(InputEvent::KeyDown(KeyCode::Space));
        drop(rx);

        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn flush_drops_batch_when_channel_full() {
        let (mut platform, rx) = platform(1);
        platform.queue_input(InputEvent::KeyDown(KeyCode::KeyA));
        platform.flush_input_buffer();
        platform.queue_input(InputEvent::KeyDown(KeyCode::KeyD));
        platform.flush_input_buffer();

        assert_eq!(
            rx.try_recv().ok(),
            Some(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyA)]))
        );
        assert!(rx.try_recv().is_err(), "second batch should have been dropped");
    }

    #[test]
    fn focus_lost_follows_buffered_input() {
        let (mut platform, rx) = platform(4);
        platform.queue_input(InputEvent::KeyDown(KeyCode::ArrowRight));

        platform.focus_lost();

        assert_eq!(
            rx.try_recv().ok(),
            Some(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::ArrowRight)]))
        );
        assert_eq!(rx.try_recv().ok(), Some(PlatformEvent::FocusLost));
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, rx) = platform(4);
        platform.queue_input(InputEvent::KeyDown(KeyCode::KeyA));

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    //=====================================================================
    // HudTitle Tests
    //=====================================================================

    #[test]
    fn hud_title_tracks_state_and_fps() {
        let mut hud = HudTitle::new("Game");
        assert_eq!(hud.title(), "Game | Start");

        hud.running_changed(true);
        hud.report_fps(63);
        assert_eq!(hud.title(), "Game | FPS: 63 | Running...");
    }

    #[test]
    fn hud_title_reports_changes_once() {
        let mut hud = HudTitle::new("Game");
        assert_eq!(hud.take_changed().as_deref(), Some("Game | Start"));
        assert_eq!(hud.take_changed(), None);

        hud.report_fps(60);
        assert!(hud.take_changed().is_some());
        hud.report_fps(60);
        assert_eq!(hud.take_changed(), None);
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<PlatformError>();
    }
}
