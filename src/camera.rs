//! Free-look camera
//!
//! The camera keeps a position plus yaw/pitch angles (degrees) and a zoomable
//! field of view. It produces the view matrix with [`Matrix4x4::look_at`] and the
//! projection with [`Matrix4x4::perspective`].

use valor_math::{Matrix4x4, Vector3, DEG_TO_RAD};

use crate::config::CameraConfig;

/// Camera for viewing the scene
#[derive(Clone, Debug)]
pub struct Camera {
    /// World-space position
    pub position: Vector3<f32>,
    /// World up direction
    pub up: Vector3<f32>,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,

    yaw: f32,
    pitch: f32,
    fov: f32,
    pitch_limit: f32,
    min_fov: f32,
    max_fov: f32,
    sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    /// Create a camera from its configuration section
    ///
    /// A negative `pitch_limit` is taken by magnitude and an inverted
    /// `min_fov`/`max_fov` pair is swapped. NaN limits disable the clamp.
    pub fn from_config(config: &CameraConfig) -> Self {
        let pitch_limit = config.pitch_limit.abs();
        let (min_fov, max_fov) = if config.min_fov > config.max_fov {
            (config.max_fov, config.min_fov)
        } else {
            (config.min_fov, config.max_fov)
        };
        Self {
            position: config.position.into(),
            up: config.up.into(),
            near: config.near,
            far: config.far,
            yaw: config.yaw,
            pitch: clamp_to(config.pitch, -pitch_limit, pitch_limit),
            fov: config.fov,
            pitch_limit,
            min_fov,
            max_fov,
            sensitivity: config.sensitivity,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Apply a look offset (e.g. cursor delta, y already flipped so up is positive).
    ///
    /// Both offsets are scaled by the configured sensitivity. Pitch is clamped to
    /// `±pitch_limit` so the view never flips over the pole.
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = clamp_to(
            self.pitch + y_offset * self.sensitivity,
            -self.pitch_limit,
            self.pitch_limit,
        );
    }

    /// Narrow (positive offset) or widen the field of view, within `[min_fov, max_fov]`
    pub fn zoom(&mut self, offset: f32) {
        self.fov = clamp_to(self.fov - offset, self.min_fov, self.max_fov);
    }

    /// Unit view direction derived from yaw and pitch
    pub fn front(&self) -> Vector3<f32> {
        let (yaw, pitch) = (self.yaw * DEG_TO_RAD, self.pitch * DEG_TO_RAD);
        Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalized()
    }

    pub fn view_matrix(&self) -> Matrix4x4<f32> {
        Matrix4x4::look_at(self.position, self.position + self.front(), self.up)
    }

    /// Projection for the given aspect ratio (width / height)
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4x4<f32> {
        Matrix4x4::perspective(self.fov, aspect, self.near, self.far)
    }
}

/// `f32::clamp` without its panic: a NaN bound leaves `v` unbounded on that side
#[inline]
fn clamp_to(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}
