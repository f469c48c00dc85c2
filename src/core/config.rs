//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunable constants for physics, world geometry and loop pacing.
//
// All values are in logical world units (canvas pixels) and seconds.
// The configuration is fixed for the lifetime of a session; the world
// derives its ground line from it once at construction.
//
//=========================================================================

//=== JumpPolicy ==========================================================

/// How a held jump intent interacts with ground contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPolicy {
    /// Jump fires on every update where the intent is held and the player
    /// started the frame grounded. Holding jump bounces repeatedly.
    #[default]
    LevelTriggered,

    /// Jump fires once per press. The intent must be released before the
    /// next jump can fire.
    Latched,
}

//=== GameConfig ==========================================================

/// Physics, geometry and pacing constants for one session.
///
/// # Default Values
///
/// | Field            | Value   |
/// |------------------|---------|
/// | `gravity`        | 1800.0  |
/// | `move_speed`     | 310.0   |
/// | `jump_velocity`  | -700.0  |
/// | `ground_height`  | 96.0    |
/// | `canvas_width`   | 800.0   |
/// | `canvas_height`  | 500.0   |
/// | `wall_margin`    | 8.0     |
/// | `max_dt`         | 0.033   |
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Downward acceleration (units/s²).
    pub gravity: f64,

    /// Horizontal speed while a direction is held (units/s).
    pub move_speed: f64,

    /// Vertical velocity applied on jump. Negative is up.
    pub jump_velocity: f64,

    /// Height of the ground band at the bottom of the canvas.
    pub ground_height: f64,

    /// Logical canvas width.
    pub canvas_width: f64,

    /// Logical canvas height.
    pub canvas_height: f64,

    /// Distance kept between the player and each side wall.
    pub wall_margin: f64,

    /// Upper bound on a single simulation step (seconds).
    pub max_dt: f64,

    /// Player spawn position (top-left corner).
    pub spawn: (f64, f64),

    /// Player body size `(w, h)`.
    pub player_size: (f64, f64),

    /// Corner radius of the player body.
    pub corner_radius: f64,

    pub jump_policy: JumpPolicy,

    /// Static HUD label drawn in the top-left corner.
    pub hud_label: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            move_speed: 310.0,
            jump_velocity: -700.0,
            ground_height: 96.0,
            canvas_width: 800.0,
            canvas_height: 500.0,
            wall_margin: 8.0,
            max_dt: 0.033,
            spawn: (80.0, 300.0),
            player_size: (48.0, 56.0),
            corner_radius: 8.0,
            jump_policy: JumpPolicy::LevelTriggered,
            hud_label: String::from("Score: 0"),
        }
    }
}

impl GameConfig {
    /// Y coordinate of the top of the ground band.
    pub fn ground_y(&self) -> f64 {
        self.canvas_height - self.ground_height
    }

    /// Checks the invariants the simulation relies on.
    ///
    /// # Panics
    ///
    /// Panics if the canvas is too small to hold the player between the
    /// walls, or if any rate or size is non-positive.
    pub fn validate(&self) {
        assert!(self.gravity > 0.0, "Gravity must be positive, got {}", self.gravity);
        assert!(self.move_speed >= 0.0, "Move speed must be non-negative, got {}", self.move_speed);
        assert!(self.jump_velocity < 0.0, "Jump velocity must point up (negative), got {}", self.jump_velocity);
        assert!(self.max_dt > 0.0, "Max dt must be positive, got {}", self.max_dt);
        assert!(
            self.player_size.0 > 0.0 && self.player_size.1 > 0.0,
            "Player size must be positive, got {:?}",
            self.player_size
        );
        assert!(
            self.ground_height >= 0.0 && self.ground_height < self.canvas_height,
            "Ground height must fit inside the canvas, got {}",
            self.ground_height
        );
        assert!(
            self.canvas_width - 2.0 * self.wall_margin >= self.player_size.0,
            "Canvas width {} cannot fit a {}-wide player between {} margins",
            self.canvas_width,
            self.player_size.0,
            self.wall_margin
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
