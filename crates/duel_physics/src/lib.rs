//! Kinematics for the sprite duel
//!
//! Bodies are advanced with an explicit Euler step once per tick. Units are
//! pixels and ticks, not seconds: velocities are pixels per tick and gravity
//! is pixels per tick squared.

pub mod body;

pub use body::{BodyDesc, KinematicBody, BODY_HEIGHT, BODY_WIDTH, DEFAULT_GRAVITY};
