//! Held-key tracking for both fighters
//!
//! Movement keys set a held flag and record the heading on the owning body
//! (`last_key`). When both movement keys of a fighter are held, only the one
//! pressed last moves the body; releasing it stops the body even if the other
//! key is still down.
//!
//! Jump keys skip the bookkeeping and write the jump impulse straight into the
//! body's vertical velocity, grounded or not.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::keys::{Fighter, Heading, Key, KeyAction};

/// Horizontal speed in pixels per tick
pub const DEFAULT_MOVE_SPEED: f32 = 3.0;

/// Vertical velocity set by a jump (negative is up)
pub const DEFAULT_JUMP_IMPULSE: f32 = -20.0;

/// Trait for bodies steered by the keyboard
/// Allows the tracker to work without depending on the physics crate
pub trait BodyControl {
    /// Most recently pressed movement heading
    fn last_key(&self) -> Option<Heading>;
    fn set_last_key(&mut self, heading: Heading);
    fn set_horizontal_velocity(&mut self, vx: f32);
    fn set_vertical_velocity(&mut self, vy: f32);
}

/// Lookup of the body a fighter controls
pub trait Roster {
    type Body: BodyControl;

    fn body_mut(&mut self, fighter: Fighter) -> &mut Self::Body;
}

/// Which movement keys are currently held
#[derive(Debug, Clone)]
pub struct InputState {
    player_left: bool,
    player_right: bool,
    enemy_left: bool,
    enemy_right: bool,

    // Configuration
    pub move_speed: f32,
    pub jump_impulse: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            player_left: false,
            player_right: false,
            enemy_left: false,
            enemy_right: false,

            move_speed: DEFAULT_MOVE_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
        }
    }

    /// Process a raw keyboard event
    ///
    /// Returns true if the key belongs to the game.
    pub fn process_keyboard<R: Roster>(
        &mut self,
        code: KeyCode,
        state: ElementState,
        roster: &mut R,
    ) -> bool {
        let Some(key) = Key::from_key_code(code) else {
            return false;
        };

        match state {
            ElementState::Pressed => self.key_down(key, roster),
            ElementState::Released => self.key_up(key),
        }
        true
    }

    /// Handle a key press
    pub fn key_down<R: Roster>(&mut self, key: Key, roster: &mut R) {
        log::debug!("keydown {} ({})", key.name(), key.fighter().name());

        let body = roster.body_mut(key.fighter());
        match key.action() {
            KeyAction::Move(heading) => {
                if let Some(held) = self.held_mut(key) {
                    *held = true;
                }
                body.set_last_key(heading);
            }
            KeyAction::Jump => body.set_vertical_velocity(self.jump_impulse),
        }
    }

    /// Handle a key release
    pub fn key_up(&mut self, key: Key) {
        log::debug!("keyup {} ({})", key.name(), key.fighter().name());

        if let Some(held) = self.held_mut(key) {
            *held = false;
        }
    }

    /// Check if a movement key is held. Jump keys are never tracked.
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::PlayerLeft => self.player_left,
            Key::PlayerRight => self.player_right,
            Key::EnemyLeft => self.enemy_left,
            Key::EnemyRight => self.enemy_right,
            Key::PlayerJump | Key::EnemyJump => false,
        }
    }

    /// Horizontal velocity a fighter should move with next tick
    ///
    /// A movement key only counts while it is held and is also the fighter's
    /// most recently pressed heading.
    pub fn horizontal_velocity(&self, fighter: Fighter, last_key: Option<Heading>) -> f32 {
        let left = Key::movement(fighter, Heading::Left);
        let right = Key::movement(fighter, Heading::Right);

        if self.is_held(left) && last_key == Some(Heading::Left) {
            -self.move_speed
        } else if self.is_held(right) && last_key == Some(Heading::Right) {
            self.move_speed
        } else {
            0.0
        }
    }

    /// Check if any movement key is held
    pub fn is_moving(&self) -> bool {
        self.player_left || self.player_right || self.enemy_left || self.enemy_right
    }

    fn held_mut(&mut self, key: Key) -> Option<&mut bool> {
        match key {
            Key::PlayerLeft => Some(&mut self.player_left),
            Key::PlayerRight => Some(&mut self.player_right),
            Key::EnemyLeft => Some(&mut self.enemy_left),
            Key::EnemyRight => Some(&mut self.enemy_right),
            Key::PlayerJump | Key::EnemyJump => None,
        }
    }

    /// Builder: set horizontal speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set jump impulse
    pub fn with_jump_impulse(mut self, impulse: f32) -> Self {
        self.jump_impulse = impulse;
        self
    }
}
