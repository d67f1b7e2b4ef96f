//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VEUSZ_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use veusz_render::{Camera, Viewport};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output device and camera
    #[serde(default)]
    pub render: RenderConfig,
    /// Scene input and display-list output
    #[serde(default)]
    pub scene: SceneConfig,
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
    /// 3. Environment variables (`VEUSZ_*`)
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // VEUSZ_RENDER__DPI=300 -> render.dpi = 300
        figment = figment.merge(Env::prefixed("VEUSZ_").split("__"));

        let config: Self = figment.extract()?;
        config.render.validate()?;
        Ok(config)
    }
}

/// Output device and camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Device width in pixels
    pub width: u32,
    /// Device height in pixels
    pub height: u32,
    /// Device resolution in dots per inch
    pub dpi: f32,
    /// Extra scale factor for line widths
    pub scaling: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera distance from the scene origin
    pub camera_distance: f32,
    /// Camera yaw in degrees
    pub yaw: f32,
    /// Camera pitch in degrees
    pub pitch: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            dpi: 96.0,
            scaling: 1.0,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            camera_distance: 6.0,
            yaw: 30.0,
            pitch: 20.0,
        }
    }
}

impl RenderConfig {
    /// Camera described by this configuration
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new()
            .with_distance(self.camera_distance)
            .with_fov_degrees(self.fov)
            .with_clip(self.near, self.far);
        camera.orbit(self.yaw.to_radians(), self.pitch.to_radians());
        camera
    }

    /// Reject device settings that would make every projected point NaN
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::invalid(format!(
                "render size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ConfigError::invalid(format!("render.dpi must be positive, got {}", self.dpi)));
        }
        Ok(())
    }

    /// Device viewport described by this configuration
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

/// Scene input and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON scene to render; the built-in demo scene when unset
    pub path: Option<PathBuf>,
    /// Where the display list is written
    pub output: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: None,
            output: PathBuf::from("display_list.ron"),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Treat scene validation warnings as errors
    pub strict_validation: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            strict_validation: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
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
        assert_eq!(config.render.width, 800);
        assert_eq!(config.render.dpi, 96.0);
        assert!(config.scene.path.is_none());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("camera_distance"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[render]\ndpi = 300.0\n").unwrap();
        assert_eq!(config.render.dpi, 300.0);
        assert_eq!(config.render.width, 800);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let render = RenderConfig {
            height: 0,
            ..RenderConfig::default()
        };
        let err = render.validate().unwrap_err();
        assert!(err.to_string().contains("800x0"), "got {}", err);
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_camera_from_config() {
        let render = RenderConfig {
            camera_distance: 10.0,
            yaw: 0.0,
            pitch: 0.0,
            ..RenderConfig::default()
        };
        let camera = render.camera();
        assert_eq!(camera.distance, 10.0);
        assert!((camera.eye()[2] - 10.0).abs() < 1e-5);
        assert_eq!(render.viewport().aspect(), 800.0 / 600.0);
    }
}
