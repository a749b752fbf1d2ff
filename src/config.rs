//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DUEL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use duel_core::{BodyDesc, Surface, SurfaceError, Vec2};
use duel_render::{Color, Palette};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Drawing surface configuration
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Spawn state and colors of both fighters
    #[serde(default)]
    pub fighters: FightersConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DUEL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DUEL_PHYSICS__GRAVITY=0.2 -> physics.gravity = 0.2
        figment = figment.merge(Env::prefixed("DUEL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sprite Duel".to_string(),
            width: 1024,
            height: 576,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Drawing surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Logical width in pixels
    pub width: f32,
    /// Logical height in pixels (the floor line)
    pub height: f32,
}

impl SurfaceConfig {
    pub fn to_surface(&self) -> Result<Surface, SurfaceError> {
        Surface::new(self.width, self.height)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: duel_core::DEFAULT_SURFACE_WIDTH,
            height: duel_core::DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Physics configuration, in pixels and ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_impulse: f32,
    /// Horizontal speed while a movement key is held
    pub move_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: duel_physics::DEFAULT_GRAVITY,
            jump_impulse: duel_input::DEFAULT_JUMP_IMPULSE,
            move_speed: duel_input::DEFAULT_MOVE_SPEED,
        }
    }
}

/// Spawn state and color of one fighter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterConfig {
    /// Top-left corner [x, y]
    pub position: [f32; 2],
    /// Initial velocity [vx, vy]
    pub velocity: [f32; 2],
    /// Fill color [r, g, b, a]
    pub color: [f32; 4],
}

impl FighterConfig {
    pub fn to_body_desc(&self) -> BodyDesc {
        BodyDesc::new(Vec2::from(self.position), Vec2::from(self.velocity))
    }
}

/// Both fighters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightersConfig {
    pub player: FighterConfig,
    pub enemy: FighterConfig,
}

impl FightersConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            player: Color::from(self.player.color),
            enemy: Color::from(self.enemy.color),
        }
    }
}

impl Default for FightersConfig {
    fn default() -> Self {
        Self {
            player: FighterConfig {
                position: [0.0, 0.0],
                velocity: [0.0, 10.0],
                color: [1.0, 0.0, 0.0, 1.0],
            },
            enemy: FighterConfig {
                position: [400.0, 100.0],
                velocity: [0.0, 0.0],
                color: [1.0, 0.0, 0.0, 1.0],
            },
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.surface.width, 1024.0);
        assert_eq!(config.surface.height, 576.0);
        assert_eq!(config.physics.gravity, 0.7);
        assert_eq!(config.physics.jump_impulse, -20.0);
        assert_eq!(config.physics.move_speed, 3.0);
    }

    #[test]
    fn test_default_spawns() {
        let fighters = FightersConfig::default();
        assert_eq!(
            fighters.player.to_body_desc(),
            BodyDesc::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0))
        );
        assert_eq!(
            fighters.enemy.to_body_desc(),
            BodyDesc::new(Vec2::new(400.0, 100.0), Vec2::ZERO)
        );
        assert_eq!(fighters.palette(), Palette::default());
    }

    #[test]
    fn test_invalid_surface() {
        let config = SurfaceConfig { width: 0.0, height: 576.0 };
        assert!(config.to_surface().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("jump_impulse"));
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.title, AppConfig::default().window.title);
    }
}
