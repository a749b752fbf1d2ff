//! 2D Rendering Library
//!
//! Game code draws into a [`Canvas`]; the recorded [`DrawList`] is then
//! rasterized by the wgpu pipeline.
//!
//! ## Key Components
//!
//! - [`canvas::Canvas`] - fill / fill_rect drawing surface
//! - [`canvas::DrawList`] - canvas that records one frame of commands
//! - [`renderer::Renderer`] - clears the surface and paints bodies
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::RectPipeline`] - draws a DrawList as colored quads

pub mod canvas;
pub mod context;
pub mod pipeline;
pub mod renderer;

pub use canvas::{Canvas, Color, DrawCommand, DrawList};
pub use context::{ContextError, RenderContext};
pub use pipeline::RectPipeline;
pub use renderer::{Palette, Renderer};
