//! GPU rendering system
//!
//! Presents a recorded DrawList to the window:
//! - Render context and surface
//! - Rect pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use duel_core::Surface;
use duel_render::{Color, ContextError, DrawList, RectPipeline, RenderContext};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed; the game cannot start
    Init(ContextError),
    /// Surface was lost or is outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(e) => write!(f, "Render init failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Init(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: RectPipeline,
    surface: Surface,
}

impl RenderSystem {
    /// Create render system for a window and the logical drawing surface
    pub fn new(window: Arc<Window>, surface: Surface, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = RectPipeline::new(&context.device, context.config.format);

        log::info!(
            "Render system ready: {}x{} surface on {}x{} window",
            surface.width(),
            surface.height(),
            context.size.width,
            context.size.height
        );

        Ok(Self {
            context,
            pipeline,
            surface,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure after a lost surface
    pub fn recover(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, frame: &DrawList) -> Result<(), RenderError> {
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            frame,
            &self.surface,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let clear_color = frame.fill_color().unwrap_or(Color::BLACK);
        self.pipeline.render(&mut encoder, &view, clear_color);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current window surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
