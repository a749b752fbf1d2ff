//! Axis-aligned rectangle

use crate::Vec2;
use serde::{Serialize, Deserialize};

/// Rectangle anchored at its top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Vec2, width: f32, height: f32) -> Self {
        Self { origin, width, height }
    }

    /// Rectangle covering `[0, width] x [0, height]`
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.width
    }

    /// Bottom edge (y grows downward)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.height
    }
}
