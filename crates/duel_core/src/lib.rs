//! Core types for the sprite duel
//!
//! - [`Surface`] - fixed-size drawing area, validated once at startup
//! - [`Arena`] - the single game context: surface plus the two bodies

mod surface;
mod arena;

pub use surface::{Surface, SurfaceError, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
pub use arena::Arena;

// Re-export for convenience
pub use duel_input::{Fighter, Heading};
pub use duel_math::{Rect, Vec2};
pub use duel_physics::{BodyDesc, KinematicBody};
