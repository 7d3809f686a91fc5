//! Scene of model instances
//!
//! Each instance is a position. Its model matrix is built from the identity by
//! translating to the position and then rotating by `angle_step * index` degrees
//! about the configured axis.

use serde::{Serialize, Deserialize};
use valor_math::{Matrix4x4, Quaternion, Vector3};

use crate::config::SceneConfig;

/// Which rotation entry point builds model matrices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    /// [`Quaternion::rotate`]
    #[default]
    Quaternion,
    /// [`Matrix4x4::rotate`] (combined weighted axis rotations)
    Matrix,
    /// [`Matrix4x4::rotate_legacy`] (rotation ignored)
    Legacy,
}

impl RotationMode {
    pub fn apply(self, m: Matrix4x4<f32>, angle_degrees: f32, axis: Vector3<f32>) -> Matrix4x4<f32> {
        match self {
            RotationMode::Quaternion => Quaternion::rotate(m, angle_degrees, axis),
            RotationMode::Matrix => Matrix4x4::rotate(m, angle_degrees, axis),
            RotationMode::Legacy => Matrix4x4::rotate_legacy(m, angle_degrees, axis),
        }
    }
}

/// A positioned instance in the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInstance {
    pub position: Vector3<f32>,
    /// Rotation in degrees
    pub angle: f32,
}

/// All instances plus the shared rotation settings
#[derive(Clone, Debug)]
pub struct Scene {
    instances: Vec<ModelInstance>,
    axis: Vector3<f32>,
    mode: RotationMode,
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl Scene {
    /// Create an empty scene
    pub fn new(axis: Vector3<f32>, mode: RotationMode) -> Self {
        Self {
            instances: Vec::new(),
            axis,
            mode,
        }
    }

    /// Build a scene from its configuration section
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::new(config.rotation_axis.into(), config.rotation_mode);
        for (i, position) in config.positions.iter().enumerate() {
            scene.add_instance((*position).into(), config.angle_step * i as f32);
        }
        scene
    }

    /// Builder-style override of the rotation mode
    pub fn with_mode(mut self, mode: RotationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn add_instance(&mut self, position: Vector3<f32>, angle: f32) {
        self.instances.push(ModelInstance { position, angle });
    }

    #[inline]
    pub fn instances(&self) -> &[ModelInstance] {
        &self.instances
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Model matrix for one instance
    pub fn model_matrix(&self, instance: &ModelInstance) -> Matrix4x4<f32> {
        let model = Matrix4x4::translate(Matrix4x4::identity(), instance.position);
        self.mode.apply(model, instance.angle, self.axis)
    }

    /// Model matrices for every instance, in insertion order
    pub fn model_matrices(&self) -> Vec<Matrix4x4<f32>> {
        self.instances.iter().map(|i| self.model_matrix(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let scene = Scene::default();
        assert_eq!(scene.len(), 10);
        assert_eq!(scene.instances()[0].angle, 0.0);
        assert_eq!(scene.instances()[3].angle, 60.0);
        assert_eq!(scene.instances()[1].position, Vector3::new(2.0, 5.0, -15.0));
    }

    #[test]
    fn test_legacy_mode_only_translates() {
        let mut scene = Scene::new(Vector3::new(1.0, 0.3, 0.5), RotationMode::Legacy);
        scene.add_instance(Vector3::new(1.0, 2.0, 3.0), 45.0);
        let m = scene.model_matrix(&scene.instances()[0]);
        assert_eq!(m, Matrix4x4::translate(Matrix4x4::identity(), Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_quaternion_mode_matches_kernel() {
        let axis = Vector3::new(1.0, 0.3, 0.5);
        let mut scene = Scene::new(axis, RotationMode::Quaternion);
        scene.add_instance(Vector3::new(-1.5, -2.2, -2.5), 40.0);

        let translated = Matrix4x4::translate(Matrix4x4::identity(), Vector3::new(-1.5, -2.2, -2.5));
        let expected = Quaternion::rotate(translated, 40.0, axis);
        assert_eq!(scene.model_matrices(), vec![expected]);
    }

    #[test]
    fn test_matrix_mode_matches_kernel() {
        let scene = Scene::default().with_mode(RotationMode::Matrix);
        let instance = scene.instances()[2];
        let translated = Matrix4x4::translate(Matrix4x4::identity(), instance.position);
        let expected = Matrix4x4::rotate(translated, instance.angle, Vector3::new(1.0, 0.3, 0.5));
        assert_eq!(scene.model_matrix(&instance), expected);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(Vector3::X, RotationMode::Matrix);
        assert!(scene.is_empty());
        assert!(scene.model_matrices().is_empty());
    }
}
