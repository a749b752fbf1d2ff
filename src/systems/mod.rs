//! Application systems
//!
//! The frame driver runs the game; window and render systems connect it to
//! the winit/wgpu host.

mod frame_driver;
mod render;
mod window;

pub use frame_driver::{DriverState, FrameDriver, RepaintScheduler};
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
