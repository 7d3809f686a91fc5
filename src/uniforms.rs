//! GPU-facing transform uniforms
//!
//! Matrices are handed over as the 16-float row-major `raw_data` export.

use bytemuck::{Pod, Zeroable};
use valor_math::Matrix4x4;

use crate::camera::Camera;
use crate::scene::Scene;

/// Per-draw transform uniforms
/// Layout: 192 bytes total (projection, view, model; 64 bytes each)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TransformUniforms {
    pub projection: [f32; 16],
    pub view: [f32; 16],
    pub model: [f32; 16],
}

impl Default for TransformUniforms {
    fn default() -> Self {
        let identity = Matrix4x4::<f32>::identity().raw_data();
        Self {
            projection: identity,
            view: identity,
            model: identity,
        }
    }
}

impl TransformUniforms {
    pub fn new(projection: &Matrix4x4<f32>, view: &Matrix4x4<f32>, model: &Matrix4x4<f32>) -> Self {
        Self {
            projection: projection.raw_data(),
            view: view.raw_data(),
            model: model.raw_data(),
        }
    }

    /// Bytes ready for a uniform buffer write
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// True when every entry of all three matrices is finite
    pub fn is_finite(&self) -> bool {
        self.projection
            .iter()
            .chain(self.view.iter())
            .chain(self.model.iter())
            .all(|v| v.is_finite())
    }
}

/// Everything the renderer needs to draw one frame of the scene
#[derive(Clone, Debug)]
pub struct FrameTransforms {
    pub projection: Matrix4x4<f32>,
    pub view: Matrix4x4<f32>,
    /// One entry per scene instance, in scene order
    pub draws: Vec<TransformUniforms>,
}

impl FrameTransforms {
    /// Compute the transforms for `scene` seen through `camera` at `aspect`
    pub fn build(camera: &Camera, scene: &Scene, aspect: f32) -> Self {
        let projection = camera.projection_matrix(aspect);
        let view = camera.view_matrix();
        let draws = scene
            .model_matrices()
            .iter()
            .map(|model| TransformUniforms::new(&projection, &view, model))
            .collect();

        Self { projection, view, draws }
    }

    /// All draws packed back to back
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.draws)
    }

    /// Number of draws with a non-finite entry anywhere
    pub fn non_finite_draws(&self) -> usize {
        self.draws.iter().filter(|d| !d.is_finite()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RotationMode;
    use valor_math::Vector3;

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<TransformUniforms>(), 192);
        assert_eq!(TransformUniforms::default().as_bytes().len(), 192);
    }

    #[test]
    fn test_default_is_identity() {
        let u = TransformUniforms::default();
        assert_eq!(u.model[0], 1.0);
        assert_eq!(u.model[5], 1.0);
        assert_eq!(u.model[1], 0.0);
    }

    #[test]
    fn test_new_copies_raw_data() {
        let p = Matrix4x4::perspective(45.0, 1.5, 0.1, 100.0);
        let v = Matrix4x4::identity();
        let m = Matrix4x4::translate(Matrix4x4::identity(), Vector3::new(1.0, 2.0, 3.0));
        let u = TransformUniforms::new(&p, &v, &m);
        assert_eq!(u.projection, p.raw_data());
        assert_eq!(u.model[0], 2.0);
        assert_eq!(u.model[10], 4.0);
    }

    #[test]
    fn test_frame_has_one_draw_per_instance() {
        let frame = FrameTransforms::build(&Camera::default(), &Scene::default(), 1280.0 / 720.0);
        assert_eq!(frame.draws.len(), 10);
        assert_eq!(frame.uniform_bytes().len(), 10 * 192);
        assert_eq!(frame.non_finite_draws(), 0);
        assert_eq!(frame.draws[0].view, frame.view.raw_data());
    }

    #[test]
    fn test_degenerate_planes_are_reported_not_clamped() {
        let mut camera = Camera::default();
        camera.far = camera.near;
        let mut scene = Scene::new(Vector3::X, RotationMode::Legacy);
        scene.add_instance(Vector3::ZERO, 0.0);
        let frame = FrameTransforms::build(&camera, &scene, 1.0);
        assert_eq!(frame.non_finite_draws(), 1);
        assert!(!frame.projection.is_finite());
    }
}
