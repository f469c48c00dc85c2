//=========================================================================
// Player Entity
//=========================================================================
//
// Position, velocity and the per-frame movement rule for the player.
//
// Update order (each step may override the previous one):
// ```text
//   input → vx            (replaced, not integrated)
//   gravity → vy          (accumulated)
//   jump → vy, on_ground  (only if grounded at frame start)
//   integrate → x, y
//   wall clamp → x        (velocity untouched)
// ```
//
// Ground contact is not resolved here; the world applies it after this
// update so that `on_ground` always reflects the previous frame's contact.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, JumpPolicy};
use crate::core::input::InputState;
use crate::core::render::{Color, Rect, Surface};

//=== Constants ===========================================================

const BODY_COLOR: Color = Color::hex(0x00bb55);
const ACCENT_COLOR: Color = Color::hex(0x008833);
const ACCENT_SIZE: f64 = 6.0;

//=== Player ==============================================================

/// The player-controlled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub w: f64,
    pub h: f64,
    pub on_ground: bool,

    /// Set when a latched jump fires; cleared once jump is released.
    jump_latched: bool,
}

impl Player {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            w,
            h,
            on_ground: false,
            jump_latched: false,
        }
    }

    /// Places the player at `(x, y)` at rest and airborne.
    pub fn reset_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.jump_latched = false;
    }

    //--- update() ---------------------------------------------------------

    /// Advances the player by `dt` seconds. Negative `dt` is treated as zero.
    pub fn update(&mut self, dt: f64, input: &InputState, config: &GameConfig) {
        let dt = dt.max(0.0);

        //--- 1. Horizontal velocity from input -----------------------------
        let mut target_vx = 0.0;
        if input.left {
            target_vx = -config.move_speed;
        }
        if input.right {
            target_vx = config.move_speed;
        }
        self.vx = target_vx;

        //--- 2. Gravity ----------------------------------------------------
        self.vy += config.gravity * dt;

        //--- 3. Jump -------------------------------------------------------
        if !input.jump {
            self.jump_latched = false;
        }
        let jump_allowed = match config.jump_policy {
            JumpPolicy::LevelTriggered => true,
            JumpPolicy::Latched => !self.jump_latched,
        };
        if input.jump && self.on_ground && jump_allowed {
            self.vy = config.jump_velocity;
            self.on_ground = false;
            self.jump_latched = true;
        }

        //--- 4. Integrate --------------------------------------------------
        self.x += self.vx * dt;
        self.y += self.vy * dt;

        //--- 5. Wall clamp -------------------------------------------------
        let (min_x, max_x) = self.horizontal_bounds(config);
        if self.x < min_x {
            self.x = min_x;
        }
        if self.x > max_x {
            self.x = max_x;
        }
    }

    /// Allowed range for `x`: `[margin, width - margin - w]`.
    pub fn horizontal_bounds(&self, config: &GameConfig) -> (f64, f64) {
        (
            config.wall_margin,
            config.canvas_width - config.wall_margin - self.w,
        )
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    //--- draw() -----------------------------------------------------------

    /// Rounded body plus a small accent square toward the facing side.
    pub fn draw(&self, surface: &mut dyn Surface, corner_radius: f64) {
        surface.fill_rounded_rect(self.bounds(), corner_radius, BODY_COLOR);
        surface.fill_rect(
            Rect::new(
                self.x + self.w * 0.6,
                self.y + self.h * 0.25,
                ACCENT_SIZE,
                ACCENT_SIZE,
            ),
            ACCENT_COLOR,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{CommandRecorder, DrawCommand};

    //--- Test Helpers -----------------------------------------------------
    fn spawn(config: &GameConfig) -> Player {
        Player::new(config.spawn.0, config.spawn.1, config.player_size.0, config.player_size.1)
    }

    fn held(left: bool, right: bool, jump: bool) -> InputState {
        InputState { left, right, jump }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-3, "expected {} ≈ {}", a, b);
    }

    //=====================================================================
    // Horizontal Movement
    //=====================================================================

    #[test]
    fn no_keys_means_no_horizontal_motion() {
        let config = GameConfig::default();
        for dt in [0.001, 0.016, 0.033] {
            let mut player = spawn(&config);
            player.vx = 999.0;
            player.update(dt, &InputState::IDLE, &config);
            assert_eq!(player.vx, 0.0);
            assert_eq!(player.x, config.spawn.0);
        }
    }

    #[test]
    fn left_and_right_set_velocity_directly() {
        let config = GameConfig::default();
        let mut player = spawn(&config);

        player.update(0.01, &held(true, false, false), &config);
        assert_eq!(player.vx, -310.0);
        assert_close(player.x, 80.0 - 3.1);

        player.update(0.01, &held(false, true, false), &config);
        assert_eq!(player.vx, 310.0);
    }

    #[test]
    fn right_wins_when_both_held() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.update(0.016, &held(true, true, false), &config);
        assert_eq!(player.vx, config.move_speed);
    }

    //=====================================================================
    // Wall Clamp
    //=====================================================================

    #[test]
    fn left_wall_clamps_position_not_velocity() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.x = 9.0;

        player.update(0.033, &held(true, false, false), &config);

        assert_eq!(player.x, 8.0);
        assert_eq!(player.vx, -310.0, "velocity keeps pushing into the wall");
    }

    #[test]
    fn right_wall_clamps_at_width_minus_margin_minus_w() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.x = 740.0;

        player.update(0.033, &held(false, true, false), &config);

        assert_eq!(player.x, 800.0 - 8.0 - 48.0);
    }

    #[test]
    fn x_stays_in_bounds_over_long_runs() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        let (min_x, max_x) = player.horizontal_bounds(&config);

        for frame in 0..600 {
            let input = held(frame % 200 < 120, frame % 200 >= 120, false);
            player.update(0.033, &input, &config);
            assert!(player.x >= min_x && player.x <= max_x, "x={} out of bounds", player.x);
        }
    }

    //=====================================================================
    // Gravity & Jump
    //=====================================================================

    #[test]
    fn gravity_accumulates_into_vy() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.update(0.016, &InputState::IDLE, &config);
        assert_close(player.vy, 28.8);
        assert_close(player.y, 300.0 + 28.8 * 0.016);
    }

    #[test]
    fn jump_from_ground_sets_jump_velocity() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.on_ground = true;

        player.update(0.016, &held(false, false, true), &config);

        assert_eq!(player.vy, -700.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn jump_while_airborne_only_applies_gravity() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.on_ground = false;
        player.vy = -120.0;

        player.update(0.02, &held(false, false, true), &config);

        assert_close(player.vy, -120.0 + 1800.0 * 0.02);
    }

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.vy = 50.0;

        player.update(-0.5, &held(false, true, false), &config);

        assert_eq!(player.x, config.spawn.0);
        assert_eq!(player.y, config.spawn.1);
        assert_eq!(player.vy, 50.0);
    }

    #[test]
    fn latched_policy_requires_release_between_jumps() {
        let config = GameConfig { jump_policy: JumpPolicy::Latched, ..GameConfig::default() };
        let mut player = spawn(&config);
        let jump = held(false, false, true);

        player.on_ground = true;
        player.update(0.016, &jump, &config);
        assert_eq!(player.vy, -700.0);

        // Landed again while still holding jump: no second jump.
        player.on_ground = true;
        player.vy = 0.0;
        player.update(0.016, &jump, &config);
        assert_close(player.vy, 28.8);

        // Release then press re-arms the jump.
        player.update(0.016, &InputState::IDLE, &config);
        player.on_ground = true;
        player.update(0.016, &jump, &config);
        assert_eq!(player.vy, -700.0);
    }

    #[test]
    fn level_triggered_policy_rejumps_while_held() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        let jump = held(false, false, true);

        player.on_ground = true;
        player.update(0.016, &jump, &config);
        player.on_ground = true;
        player.vy = 0.0;
        player.update(0.016, &jump, &config);

        assert_eq!(player.vy, -700.0);
    }

    //=====================================================================
    // Reset & Draw
    //=====================================================================

    #[test]
    fn reset_to_restores_rest_state() {
        let config = GameConfig::default();
        let mut player = spawn(&config);
        player.vx = 10.0;
        player.vy = 20.0;
        player.on_ground = true;

        player.reset_to(80.0, 300.0);

        assert_eq!(player, spawn(&config));
    }

    #[test]
    fn draw_emits_body_then_accent() {
        let player = Player::new(100.0, 200.0, 48.0, 56.0);
        let mut recorder = CommandRecorder::new();

        player.draw(&mut recorder, 8.0);

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::FillRoundedRect {
                    rect: Rect::new(100.0, 200.0, 48.0, 56.0),
                    radius: 8.0,
                    color: BODY_COLOR,
                },
                DrawCommand::FillRect {
                    rect: Rect::new(100.0 + 48.0 * 0.6, 200.0 + 14.0, 6.0, 6.0),
                    color: ACCENT_COLOR,
                },
            ]
        );
    }
}
