//! Valor engine frame setup
//!
//! Builds the projection, view and model transforms for a scene with the
//! [`valor_math`] kernel and packs them into uniform data for upload.

pub mod camera;
pub mod config;
pub mod scene;
pub mod uniforms;

pub use camera::Camera;
pub use config::{AppConfig, ConfigError};
pub use scene::{ModelInstance, RotationMode, Scene};
pub use uniforms::{FrameTransforms, TransformUniforms};
