//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VALOR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::scene::RotationMode;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scene configuration
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
    /// 3. Environment variables (`VALOR_*`)
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

        // VALOR_CAMERA__FOV=60 -> camera.fov = 60
        figment = figment.merge(Env::prefixed("VALOR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
///
/// Only the size matters here: it supplies the aspect ratio for the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Valor".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl WindowConfig {
    /// Width over height. A zero height gives a non-finite aspect.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub position: [f32; 3],
    /// World up direction [x, y, z]
    pub up: [f32; 3],
    /// Starting yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
    /// Narrowest zoom in degrees
    pub min_fov: f32,
    /// Widest zoom in degrees
    pub max_fov: f32,
    /// Degrees of yaw/pitch per unit of look offset
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            pitch_limit: 89.0,
            min_fov: 1.0,
            max_fov: 45.0,
            sensitivity: 0.1,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Rotation added per instance index, in degrees
    pub angle_step: f32,
    /// Axis weights for the per-instance rotation
    pub rotation_axis: [f32; 3],
    /// Which rotation entry point builds the model matrices
    pub rotation_mode: RotationMode,
    /// Instance positions
    pub positions: Vec<[f32; 3]>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            angle_step: 20.0,
            rotation_axis: [1.0, 0.3, 0.5],
            rotation_mode: RotationMode::default(),
            positions: vec![
                [0.0, 0.0, 0.0],
                [2.0, 5.0, -15.0],
                [-1.5, -2.2, -2.5],
                [-3.8, -2.0, -12.3],
                [2.4, -0.4, -3.5],
                [-1.7, 3.0, -7.5],
                [1.3, -2.0, -2.5],
                [1.5, 2.0, -2.5],
                [1.5, 0.2, -1.5],
                [-1.3, 1.0, -1.5],
            ],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Print every uniform's raw data to stdout
    pub dump_raw_data: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_raw_data: false,
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
