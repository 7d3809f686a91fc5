//! 3-component vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Scalar;

/// 3D vector with x, y, z components
///
/// Used for translations, rotation axes and the point part of a [`crate::Quaternion`].
/// `Default` is the zero vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: repr(C) with three fields of the same Pod scalar, so no padding.
unsafe impl<T: Scalar + Zeroable> Zeroable for Vector3<T> {}
unsafe impl<T: Scalar + Pod> Pod for Vector3<T> {}

impl<T: Scalar> Vector3<T> {
    pub const ZERO: Self = Self { x: T::ZERO, y: T::ZERO, z: T::ZERO };
    pub const X: Self = Self { x: T::ONE, y: T::ZERO, z: T::ZERO };
    pub const Y: Self = Self { x: T::ZERO, y: T::ONE, z: T::ZERO };
    pub const Z: Self = Self { x: T::ZERO, y: T::ZERO, z: T::ONE };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `v`
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`. The zero vector has length 0.
    #[inline]
    pub fn length(self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction; the zero vector is returned as is
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > T::ZERO {
            self * (T::ONE / len)
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> std::ops::Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Scalar> std::ops::Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_default_is_zero() {
        let v: Vector3<f64> = Vector3::default();
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector3::new(3.0f32, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::new(3.0f64, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::<f32>::ZERO.length(), 0.0);
    }

    #[test]
    fn test_cross() {
        let z = Vector3::<f32>::X.cross(Vector3::Y);
        assert_eq!(z, Vector3::Z);
        let neg_z = Vector3::<f32>::Y.cross(Vector3::X);
        assert_eq!(neg_z, -Vector3::Z);
    }

    #[test]
    fn test_normalized() {
        let n = Vector3::new(0.0f32, 3.0, 0.0).normalized();
        assert!((n.y - 1.0).abs() < 0.0001);
        assert_eq!(n.x, 0.0);
        assert_eq!(Vector3::<f32>::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn test_ops() {
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let b = Vector3::new(4.0f32, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::splat(3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_assignment_copies_all_components() {
        let a = Vector3::new(1.0f32, 2.0, 3.0);
        let mut b = Vector3::ZERO;
        assert_ne!(a, b);
        b = a;
        assert_eq!(b.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pod_layout() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        assert_eq!(bytemuck::bytes_of(&v).len(), 12);
    }
}
