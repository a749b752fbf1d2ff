//! Rendering pipeline components
//!
//! A single render pipeline that draws solid-colored quads.

pub mod types;
pub mod rect_pipeline;

pub use types::{build_vertices, rect_vertices, to_ndc, RectVertex, VERTICES_PER_RECT};
pub use rect_pipeline::RectPipeline;
