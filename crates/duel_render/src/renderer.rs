//! Paints the arena onto a canvas

use duel_core::{Fighter, KinematicBody, Surface};

use crate::canvas::{Canvas, Color};

/// Body colors per fighter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub player: Color,
    pub enemy: Color,
}

impl Palette {
    pub fn color(&self, fighter: Fighter) -> Color {
        match fighter {
            Fighter::Player => self.player,
            Fighter::Enemy => self.enemy,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: Color::RED,
            enemy: Color::RED,
        }
    }
}

/// Clears the surface and draws bodies as filled rectangles
#[derive(Debug, Clone)]
pub struct Renderer {
    surface: Surface,
    background: Color,
    palette: Palette,
}

impl Renderer {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            background: Color::BLACK,
            palette: Palette::default(),
        }
    }

    /// Builder: set background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Builder: set body colors
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Fill the whole surface with the background color
    pub fn clear<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill(self.background);
    }

    /// Fill the body's rectangle with its fighter's color
    pub fn draw_body<C: Canvas>(&self, canvas: &mut C, fighter: Fighter, body: &KinematicBody) {
        canvas.fill_rect(body.bounds(), self.palette.color(fighter));
    }
}
