//! 2D math for the sprite duel
//!
//! - [`Vec2`] - position / velocity pairs in surface pixel space (y grows downward)
//! - [`Rect`] - axis-aligned rectangle with a top-left origin

mod vec2;
mod rect;

pub use vec2::Vec2;
pub use rect::Rect;
