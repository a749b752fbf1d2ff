//! Kinematic body with gravity and a look-ahead floor test

use duel_input::{BodyControl, Heading};
use duel_math::{Rect, Vec2};
use serde::{Serialize, Deserialize};

/// Width of every body in pixels
pub const BODY_WIDTH: f32 = 50.0;

/// Height of every body in pixels
pub const BODY_HEIGHT: f32 = 150.0;

/// Downward acceleration per tick
pub const DEFAULT_GRAVITY: f32 = 0.7;

/// Construction record for a body
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Top-left corner in surface pixels
    pub position: Vec2,
    /// Initial velocity in pixels per tick
    pub velocity: Vec2,
}

impl BodyDesc {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }
}

/// A rectangular body moved by its velocity every tick
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner in surface pixels
    pub position: Vec2,
    /// Velocity in pixels per tick
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
    /// Most recently pressed horizontal heading
    pub last_key: Option<Heading>,
}

impl KinematicBody {
    pub fn new(desc: BodyDesc) -> Self {
        Self {
            position: desc.position,
            velocity: desc.velocity,
            width: BODY_WIDTH,
            height: BODY_HEIGHT,
            last_key: None,
        }
    }

    /// Advance one tick
    ///
    /// Moves by the current velocity, then decides grounding by projecting the
    /// moved position one more step with the velocity from before this call.
    /// Grounded bodies lose their vertical velocity; airborne bodies gain
    /// `gravity`. Position is never clamped, so a body can settle at or slightly
    /// below `floor_y` depending on its last step.
    pub fn integrate(&mut self, gravity: f32, floor_y: f32) {
        self.position += self.velocity;

        if self.position.y + self.height + self.velocity.y >= floor_y {
            self.velocity.y = 0.0;
        } else {
            self.velocity.y += gravity;
        }
    }

    /// Check if the next `integrate` would zero vertical velocity
    pub fn is_grounded(&self, floor_y: f32) -> bool {
        let next_y = self.position.y + self.velocity.y;
        next_y + self.height + self.velocity.y >= floor_y
    }

    /// Screen-space rectangle covered by the body
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }
}

impl BodyControl for KinematicBody {
    fn last_key(&self) -> Option<Heading> {
        self.last_key
    }

    fn set_last_key(&mut self, heading: Heading) {
        self.last_key = Some(heading);
    }

    fn set_horizontal_velocity(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_vertical_velocity(&mut self, vy: f32) {
        self.velocity.y = vy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 576.0;
    const EPSILON: f32 = 0.0001;

    fn body_at(y: f32, vy: f32) -> KinematicBody {
        KinematicBody::new(BodyDesc::new(Vec2::new(0.0, y), Vec2::new(0.0, vy)))
    }

    #[test]
    fn test_new_body() {
        let body = KinematicBody::new(BodyDesc::new(Vec2::new(400.0, 100.0), Vec2::ZERO));
        assert_eq!(body.position, Vec2::new(400.0, 100.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.width, 50.0);
        assert_eq!(body.height, 150.0);
        assert_eq!(body.last_key, None);
    }

    #[test]
    fn test_airborne_gains_gravity() {
        let mut body = body_at(0.0, 10.0);
        body.integrate(DEFAULT_GRAVITY, FLOOR);

        assert_eq!(body.position.y, 10.0);
        assert!((body.velocity.y - 10.7).abs() < EPSILON);
    }

    #[test]
    fn test_look_ahead_grounds_before_contact() {
        // 500 + 10 = 510 after the move; 510 + 150 + 10 = 670 >= 576
        let mut body = body_at(500.0, 10.0);
        body.integrate(DEFAULT_GRAVITY, FLOOR);

        assert_eq!(body.position.y, 510.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_grounding_threshold_is_inclusive() {
        // Lands exactly on the floor line: 416 + 150 + 10 == 576
        let mut body = body_at(406.0, 10.0);
        body.integrate(DEFAULT_GRAVITY, FLOOR);
        assert_eq!(body.position.y, 416.0);
        assert_eq!(body.velocity.y, 0.0);

        // One pixel short keeps falling: 415 + 150 + 10 == 575
        let mut body = body_at(405.0, 10.0);
        body.integrate(DEFAULT_GRAVITY, FLOOR);
        assert!((body.velocity.y - 10.7).abs() < EPSILON);
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut body = body_at(426.0, 0.0);
        for _ in 0..10 {
            body.integrate(DEFAULT_GRAVITY, FLOOR);
        }
        assert_eq!(body.position.y, 426.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_horizontal_velocity_moves_position() {
        let mut body = body_at(0.0, 0.0);
        body.velocity.x = -3.0;
        body.integrate(DEFAULT_GRAVITY, FLOOR);
        assert_eq!(body.position.x, -3.0);
        assert_eq!(body.velocity.x, -3.0);
    }

    #[test]
    fn test_fall_settles_without_passing_far_below() {
        let mut body = body_at(0.0, 10.0);
        for _ in 0..200 {
            body.integrate(DEFAULT_GRAVITY, FLOOR);
        }
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.bounds().bottom() <= FLOOR + 30.0);
        assert!(body.is_grounded(FLOOR));
    }

    #[test]
    fn test_jump_from_floor_rises_then_lands() {
        let mut body = body_at(426.0, 0.0);
        body.set_vertical_velocity(-20.0);

        body.integrate(DEFAULT_GRAVITY, FLOOR);
        assert_eq!(body.position.y, 406.0);
        assert!((body.velocity.y - -19.3).abs() < EPSILON);

        let mut landed = false;
        for _ in 0..200 {
            body.integrate(DEFAULT_GRAVITY, FLOOR);
            if body.velocity.y == 0.0 {
                landed = true;
                break;
            }
        }
        assert!(landed);
    }

    #[test]
    fn test_custom_gravity() {
        let mut body = body_at(0.0, 0.0);
        body.integrate(0.2, FLOOR);
        assert!((body.velocity.y - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_body_control() {
        let mut body = body_at(0.0, 0.0);
        body.set_last_key(Heading::Right);
        body.set_horizontal_velocity(3.0);
        body.set_vertical_velocity(-20.0);

        assert_eq!(body.last_key(), Some(Heading::Right));
        assert_eq!(body.velocity, Vec2::new(3.0, -20.0));
    }

    #[test]
    fn test_bounds() {
        let body = KinematicBody::new(BodyDesc::new(Vec2::new(400.0, 100.0), Vec2::ZERO));
        assert_eq!(body.bounds(), Rect::new(Vec2::new(400.0, 100.0), 50.0, 150.0));
    }
}
