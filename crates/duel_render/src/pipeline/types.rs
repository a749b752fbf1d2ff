//! GPU-compatible vertex type and DrawList tessellation

use duel_core::Surface;
use duel_math::{Rect, Vec2};

use crate::canvas::{Color, DrawList};

/// Two triangles per rectangle
pub const VERTICES_PER_RECT: usize = 6;

/// Vertex in normalized device coordinates with a flat color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Map a surface pixel (origin top-left, y down) to NDC (origin center, y up)
pub fn to_ndc(point: Vec2, surface: &Surface) -> [f32; 2] {
    [
        point.x / surface.width() * 2.0 - 1.0,
        1.0 - point.y / surface.height() * 2.0,
    ]
}

/// Two counter-clockwise triangles covering `rect`
pub fn rect_vertices(rect: Rect, color: Color, surface: &Surface) -> [RectVertex; VERTICES_PER_RECT] {
    let color = color.to_array();
    let tl = to_ndc(Vec2::new(rect.left(), rect.top()), surface);
    let tr = to_ndc(Vec2::new(rect.right(), rect.top()), surface);
    let bl = to_ndc(Vec2::new(rect.left(), rect.bottom()), surface);
    let br = to_ndc(Vec2::new(rect.right(), rect.bottom()), surface);

    [tl, bl, br, tl, br, tr].map(|position| RectVertex { position, color })
}

/// Tessellate every rectangle of a frame, in paint order
pub fn build_vertices(list: &DrawList, surface: &Surface) -> Vec<RectVertex> {
    list.rects()
        .flat_map(|(rect, color)| rect_vertices(rect, color, surface))
        .collect()
}
