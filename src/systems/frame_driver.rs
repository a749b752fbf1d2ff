//! Repaint-synchronized game loop
//!
//! Each tick, in order:
//! 1. Schedule the next tick with the host
//! 2. Clear the surface
//! 3. For the player, then the enemy: integrate, then draw
//! 4. Re-derive each body's horizontal velocity from the held keys
//!
//! Velocity from step 4 is only applied by the next tick's integrate, so a
//! fresh key press shows up one tick late.

use duel_core::{Arena, Fighter, SurfaceError};
use duel_input::{BodyControl, InputState, Key};
use duel_render::{Canvas, Color, Renderer};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::AppConfig;

/// Host primitive that runs the next tick before the next display refresh
pub trait RepaintScheduler {
    fn request_repaint(&self);
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed, no tick scheduled yet
    Idle,
    /// Ticking at the host's refresh cadence
    Running,
}

/// Drives the arena one tick per repaint
pub struct FrameDriver {
    state: DriverState,
    arena: Arena,
    input: InputState,
    renderer: Renderer,
    gravity: f32,
    ticks: u64,
}

impl FrameDriver {
    pub fn new(arena: Arena, input: InputState, renderer: Renderer) -> Self {
        Self {
            state: DriverState::Idle,
            arena,
            input,
            renderer,
            gravity: duel_physics::DEFAULT_GRAVITY,
            ticks: 0,
        }
    }

    /// Build the arena, input tracker and renderer from configuration
    ///
    /// Fails if the configured surface is unusable; the loop must not start then.
    pub fn from_config(config: &AppConfig) -> Result<Self, SurfaceError> {
        let surface = config.surface.to_surface()?;

        let arena = Arena::new(
            surface,
            config.fighters.player.to_body_desc(),
            config.fighters.enemy.to_body_desc(),
        );
        let input = InputState::new()
            .with_move_speed(config.physics.move_speed)
            .with_jump_impulse(config.physics.jump_impulse);
        let renderer = Renderer::new(surface)
            .with_background(Color::from(config.rendering.background_color))
            .with_palette(config.fighters.palette());

        Ok(Self::new(arena, input, renderer).with_gravity(config.physics.gravity))
    }

    /// Builder: set per-tick gravity
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Enter the running state and schedule the first tick
    pub fn start<S: RepaintScheduler>(&mut self, scheduler: &S) {
        if self.state == DriverState::Running {
            return;
        }
        self.state = DriverState::Running;
        log::info!("Frame driver running");
        scheduler.request_repaint();
    }

    /// Run one tick. Ignored until `start` has been called.
    pub fn tick<S: RepaintScheduler, C: Canvas>(&mut self, scheduler: &S, canvas: &mut C) {
        if self.state == DriverState::Idle {
            return;
        }

        scheduler.request_repaint();

        self.renderer.clear(canvas);

        let floor_y = self.arena.floor_y();
        for fighter in Fighter::ALL {
            let body = self.arena.body_mut(fighter);
            body.integrate(self.gravity, floor_y);
            self.renderer.draw_body(canvas, fighter, body);
        }

        for fighter in Fighter::ALL {
            let body = self.arena.body_mut(fighter);
            body.set_horizontal_velocity(0.0);
            let vx = self.input.horizontal_velocity(fighter, body.last_key());
            body.set_horizontal_velocity(vx);
        }

        self.ticks += 1;
    }

    /// Feed a raw key event into the input tracker
    ///
    /// Returns true if the key belongs to the game.
    pub fn process_keyboard(&mut self, code: KeyCode, state: ElementState) -> bool {
        self.input.process_keyboard(code, state, &mut self.arena)
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key, &mut self.arena);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Ticks run since start
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{BodyDesc, Surface, Vec2};
    use duel_render::{DrawCommand, DrawList};
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingScheduler {
        requests: Cell<u32>,
    }

    impl RepaintScheduler for CountingScheduler {
        fn request_repaint(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    fn driver(player: BodyDesc, enemy: BodyDesc) -> FrameDriver {
        let surface = Surface::default();
        FrameDriver::new(
            Arena::new(surface, player, enemy),
            InputState::new(),
            Renderer::new(surface),
        )
    }

    fn resting(x: f32) -> BodyDesc {
        BodyDesc::new(Vec2::new(x, 426.0), Vec2::ZERO)
    }

    #[test]
    fn test_idle_ignores_ticks() {
        let mut driver = driver(resting(0.0), resting(400.0));
        let scheduler = CountingScheduler::default();
        let mut canvas = DrawList::new();

        driver.tick(&scheduler, &mut canvas);

        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(scheduler.requests.get(), 0);
        assert!(canvas.is_empty());
        assert_eq!(driver.tick_count(), 0);
    }

    #[test]
    fn test_start_schedules_first_tick() {
        let mut driver = driver(resting(0.0), resting(400.0));
        let scheduler = CountingScheduler::default();

        driver.start(&scheduler);
        driver.start(&scheduler);

        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(scheduler.requests.get(), 1);
    }

    #[test]
    fn test_each_tick_reschedules() {
        let mut driver = driver(resting(0.0), resting(400.0));
        let scheduler = CountingScheduler::default();
        let mut canvas = DrawList::new();

        driver.start(&scheduler);
        for _ in 0..3 {
            driver.tick(&scheduler, &mut canvas);
        }
        assert_eq!(scheduler.requests.get(), 4);
        assert_eq!(driver.tick_count(), 3);
    }

    #[test]
    fn test_draw_order_clear_player_enemy() {
        let mut driver = driver(resting(0.0), resting(400.0));
        let scheduler = CountingScheduler::default();
        let mut canvas = DrawList::new();

        driver.start(&scheduler);
        driver.tick(&scheduler, &mut canvas);

        let commands = canvas.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::Fill(Color::BLACK));
        match (commands[1], commands[2]) {
            (DrawCommand::FillRect { rect: a, .. }, DrawCommand::FillRect { rect: b, .. }) => {
                assert_eq!(a.origin.x, 0.0);
                assert_eq!(b.origin.x, 400.0);
            }
            other => panic!("Expected two rectangles, got {:?}", other),
        }
    }

    #[test]
    fn test_key_press_applies_next_tick() {
        let mut driver = driver(resting(100.0), resting(400.0));
        let scheduler = CountingScheduler::default();
        let mut canvas = DrawList::new();
        driver.start(&scheduler);

        driver.key_down(Key::PlayerRight);
        // Velocity is derived at the end of this tick, position unchanged
        driver.tick(&scheduler, &mut canvas);
        assert_eq!(driver.arena().player().position.x, 100.0);
        assert_eq!(driver.arena().player().velocity.x, 3.0);

        driver.tick(&scheduler, &mut canvas);
        assert_eq!(driver.arena().player().position.x, 103.0);
    }

    #[test]
    fn test_from_config_rejects_bad_surface() {
        let mut config = AppConfig::default();
        config.surface.height = 0.0;
        assert!(FrameDriver::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_applies_physics() {
        let mut config = AppConfig::default();
        config.physics.gravity = 0.2;
        config.physics.move_speed = 5.0;

        let mut driver = FrameDriver::from_config(&config).unwrap();
        let scheduler = CountingScheduler::default();
        let mut canvas = DrawList::new();
        driver.start(&scheduler);

        driver.key_down(Key::EnemyLeft);
        driver.tick(&scheduler, &mut canvas);

        // Enemy spawns at rest in mid-air and falls with the configured gravity
        assert!((driver.arena().enemy().velocity.y - 0.2).abs() < 0.0001);
        assert_eq!(driver.arena().enemy().velocity.x, -5.0);
    }
}
