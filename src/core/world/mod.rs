//=========================================================================
// World
//=========================================================================
//
// Owns the player and the ground line, and orchestrates one simulation
// step plus the full-frame draw.
//
// Architecture:
// ```text
//   World::update(dt, input)
//     ├─► Player::update      (input, gravity, jump, integrate, walls)
//     └─► resolve_ground()    (snap + zero vy, or mark airborne)
//
//   World::draw(surface)
//     clear → sky → hills → ground band → player → HUD
// ```
//
//=========================================================================

//=== Submodules ==========================================================

pub mod entity;

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::input::InputState;
use crate::core::render::{Color, Rect, Surface};

pub use entity::Player;

//=== Palette =============================================================

const SKY_TOP: Color = Color::hex(0x9be7ff);
const SKY_BOTTOM: Color = Color::hex(0xd9f7ff);
const HILL_FAR: Color = Color::hex(0x8ec6a7);
const HILL_NEAR: Color = Color::hex(0x6aa36f);
const GROUND: Color = Color::hex(0x576b4f);
const HUD_TEXT: Color = Color::hex(0x003333);

const HUD_ORIGIN: (f64, f64) = (12.0, 22.0);
const HUD_SIZE: f64 = 14.0;

//=== World ===============================================================

/// Single-screen world: one player standing on a flat ground band.
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    player: Player,
    ground_y: f64,
}

impl World {
    /// Builds the world and spawns the player at the configured position.
    pub fn new(config: GameConfig) -> Self {
        let (w, h) = config.player_size;
        let player = Player::new(config.spawn.0, config.spawn.1, w, h);
        let ground_y = config.ground_y();

        Self { config, player, ground_y }
    }

    //--- update() ---------------------------------------------------------

    /// Advances the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f64, input: &InputState) {
        self.player.update(dt, input, &self.config);
        self.resolve_ground();
    }

    fn resolve_ground(&mut self) {
        let ground_line = self.ground_y - self.player.h;
        if self.player.y > ground_line {
            self.player.y = ground_line;
            self.player.vy = 0.0;
            self.player.on_ground = true;
        } else {
            self.player.on_ground = false;
        }
    }

    //--- reset() ----------------------------------------------------------

    /// Returns the player to its spawn state in place.
    pub fn reset(&mut self) {
        let (x, y) = self.config.spawn;
        self.player.reset_to(x, y);
        info!("World reset: player at ({}, {})", x, y);
    }

    //--- draw() -----------------------------------------------------------

    /// Paints the full frame onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.config.canvas_width;
        let height = self.config.canvas_height;
        let canvas = Rect::new(0.0, 0.0, width, height);

        surface.clear(canvas);
        surface.fill_vertical_gradient(canvas, SKY_TOP, SKY_BOTTOM);

        Self::draw_hills(surface, width, height);

        surface.fill_rect(
            Rect::new(0.0, self.ground_y, width, self.config.ground_height),
            GROUND,
        );

        self.player.draw(surface, self.config.corner_radius);

        surface.draw_text(&self.config.hud_label, HUD_ORIGIN, HUD_SIZE, HUD_TEXT);
    }

    fn draw_hills(surface: &mut dyn Surface, width: f64, height: f64) {
        surface.fill_ellipse((width * 0.2, height * 0.7), (250.0, 80.0), HILL_FAR);
        surface.fill_ellipse((width * 0.7, height * 0.75), (320.0, 100.0), HILL_FAR);
        surface.fill_ellipse((width * 0.5, height * 0.85), (520.0, 140.0), HILL_NEAR);
    }

    //--- Accessors --------------------------------------------------------

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn ground_y(&self) -> f64 {
        self.ground_y
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{CommandRecorder, DrawCommand};

    fn held(left: bool, right: bool, jump: bool) -> InputState {
        InputState { left, right, jump }
    }

    fn grounded_world() -> World {
        let mut world = World::new(GameConfig::default());
        let ground_line = world.ground_y() - world.player().h;
        world.player_mut().y = ground_line;
        world.player_mut().on_ground = true;
        world
    }

    //=====================================================================
    // Ground Resolution
    //=====================================================================

    #[test]
    fn grounded_player_stays_pinned_without_input() {
        let mut world = grounded_world();

        world.update(0.016, &InputState::IDLE);

        let player = world.player();
        assert_eq!(player.y, 404.0 - 56.0);
        assert_eq!(player.vy, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn falling_player_lands_on_ground_line() {
        let mut world = World::new(GameConfig::default());
        let ground_line = world.ground_y() - world.player().h;

        let mut landed = false;
        for _ in 0..120 {
            world.update(0.033, &InputState::IDLE);
            assert!(world.player().y <= ground_line);
            landed |= world.player().on_ground;
        }

        assert!(landed, "player should land within four seconds");
        assert_eq!(world.player().y, ground_line);
    }

    #[test]
    fn jump_leaves_ground_and_clears_contact() {
        let mut world = grounded_world();

        world.update(0.016, &held(false, false, true));

        let player = world.player();
        assert!(!player.on_ground);
        assert_eq!(player.vy, -700.0);
        assert!(player.y < 404.0 - 56.0);
    }

    #[test]
    fn y_never_exceeds_ground_line_under_mixed_input() {
        let mut world = World::new(GameConfig::default());
        let ground_line = world.ground_y() - world.player().h;

        for frame in 0..900u32 {
            let input = held(frame % 90 < 30, frame % 90 >= 60, frame % 45 == 0);
            world.update(0.033, &input);
            let player = world.player();
            assert!(player.y <= ground_line, "frame {}: y={} below ground", frame, player.y);
            assert!(player.x >= 8.0 && player.x <= 800.0 - 8.0 - player.w);
        }
    }

    #[test]
    fn held_jump_bounces_each_landing_with_level_trigger() {
        let mut world = grounded_world();
        let jump = held(false, false, true);

        let mut takeoffs = 0;
        let mut was_grounded = true;
        for _ in 0..300 {
            world.update(0.016, &jump);
            let grounded = world.player().on_ground;
            if was_grounded && !grounded {
                takeoffs += 1;
            }
            was_grounded = grounded;
        }

        assert!(takeoffs >= 2, "holding jump should re-trigger on landing, got {}", takeoffs);
    }

    //=====================================================================
    // Reset
    //=====================================================================

    #[test]
    fn reset_is_idempotent_and_matches_spawn() {
        let mut world = grounded_world();
        world.update(0.016, &held(false, true, true));

        world.reset();
        let once = world.player().clone();
        world.reset();

        assert_eq!(*world.player(), once);
        assert_eq!((once.x, once.y, once.vx, once.vy), (80.0, 300.0, 0.0, 0.0));
        assert!(!once.on_ground);
    }

    //=====================================================================
    // Draw Order
    //=====================================================================

    #[test]
    fn draw_issues_layers_in_order() {
        let world = World::new(GameConfig::default());
        let mut recorder = CommandRecorder::new();

        world.draw(&mut recorder);
        let commands = recorder.commands();

        assert_eq!(commands.len(), 9);
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        assert!(matches!(
            commands[1],
            DrawCommand::FillVerticalGradient { top: SKY_TOP, bottom: SKY_BOTTOM, .. }
        ));
        assert!(commands[2..5]
            .iter()
            .all(|c| matches!(c, DrawCommand::FillEllipse { .. })));
        assert_eq!(
            commands[5],
            DrawCommand::FillRect { rect: Rect::new(0.0, 404.0, 800.0, 96.0), color: GROUND }
        );
        assert!(matches!(commands[6], DrawCommand::FillRoundedRect { .. }));
        assert!(matches!(commands[7], DrawCommand::FillRect { .. }));
        assert!(matches!(
            &commands[8],
            DrawCommand::DrawText { text, .. } if text == "Score: 0"
        ));
    }

    #[test]
    fn draw_does_not_mutate_state() {
        let world = grounded_world();
        let before = world.player().clone();
        world.draw(&mut CommandRecorder::new());
        assert_eq!(*world.player(), before);
    }
}
