//! Sprite Duel
//!
//! Two rectangles under gravity, steered from one keyboard.
//! Player: A / D / W. Enemy: arrow keys. Escape quits, F11 toggles fullscreen.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use duel_render::DrawList;
use sprite_duel::config::AppConfig;
use sprite_duel::input::{InputAction, InputMapper};
use sprite_duel::systems::{FrameDriver, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    driver: FrameDriver,
    /// Commands recorded by the last tick
    frame: DrawList,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig, driver: FrameDriver) -> Self {
        Self {
            config,
            driver,
            frame: DrawList::new(),
            window: None,
            render: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let surface = *self.driver.arena().surface();
        let render = match RenderSystem::new(window.window().clone(), surface, self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.driver.start(&window);
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                    let (width, height) = render.size();
                    log::debug!("Window resized to {}x{}", width, height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state, event.repeat) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {}
                    }

                    if !self.driver.process_keyboard(key, event.state) {
                        log::trace!("Ignored key {:?}", key);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(render)) = (&self.window, &mut self.render) else {
                    return;
                };

                self.driver.tick(window, &mut self.frame);

                let arena = self.driver.arena();
                window.update_title(
                    arena.player().position.to_array(),
                    arena.enemy().position.to_array(),
                );

                match render.render_frame(&self.frame) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => render.recover(),
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Frame skipped: {}", e),
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Sprite Duel");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    // An unusable surface is fatal: the loop never starts
    let driver = FrameDriver::from_config(&config).map_err(|e| {
        log::error!("{}", e);
        e
    })?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, driver);
    event_loop.run_app(&mut app)?;
    Ok(())
}
