//! Drawing surface abstraction and the per-frame command list

use duel_math::Rect;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self { r: c[0], g: c[1], b: c[2], a: c[3] }
    }
}

/// Something that can be painted with solid colors
pub trait Canvas {
    /// Paint the entire surface
    fn fill(&mut self, color: Color);
    /// Paint a rectangle in surface pixels
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A single recorded drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    FillRect { rect: Rect, color: Color },
}

/// Canvas that records commands for one frame
///
/// A `fill` covers everything drawn before it, so the list only keeps
/// commands from the most recent fill onward.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Background color of the frame, if it was cleared
    pub fn fill_color(&self) -> Option<Color> {
        match self.commands.first() {
            Some(DrawCommand::Fill(color)) => Some(*color),
            _ => None,
        }
    }

    /// Rectangles in paint order
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
            DrawCommand::Fill(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_math::Vec2;

    #[test]
    fn test_fill_discards_previous_frame() {
        let mut list = DrawList::new();
        list.fill(Color::BLACK);
        list.fill_rect(Rect::from_size(10.0, 10.0), Color::RED);
        list.fill(Color::rgb(0.0, 0.0, 1.0));

        assert_eq!(list.commands(), &[DrawCommand::Fill(Color::rgb(0.0, 0.0, 1.0))]);
        assert_eq!(list.rects().count(), 0);
    }

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        let a = Rect::new(Vec2::new(0.0, 0.0), 50.0, 150.0);
        let b = Rect::new(Vec2::new(400.0, 100.0), 50.0, 150.0);

        list.fill(Color::BLACK);
        list.fill_rect(a, Color::RED);
        list.fill_rect(b, Color::RED);

        assert_eq!(list.fill_color(), Some(Color::BLACK));
        let rects: Vec<_> = list.rects().map(|(r, _)| r).collect();
        assert_eq!(rects, vec![a, b]);
    }

    #[test]
    fn test_uncleared_list_has_no_fill() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        list.fill_rect(Rect::from_size(1.0, 1.0), Color::RED);
        assert_eq!(list.fill_color(), None);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_color_conversions() {
        let color = Color::from([0.5, 0.25, 0.0, 1.0]);
        assert_eq!(color.to_array(), [0.5, 0.25, 0.0, 1.0]);
        assert_eq!(color.to_wgpu().g, 0.25);
    }
}
