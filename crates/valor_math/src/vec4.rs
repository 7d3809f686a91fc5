//! 4-component vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Scalar, Vector3};

/// 4-component vector with x, y, z, w components
///
/// Serves as a [`crate::Matrix4x4`] row and as the rotation part of a
/// [`crate::Quaternion`]; w is the homogeneous component.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// SAFETY: repr(C) with four fields of the same Pod scalar, so no padding.
unsafe impl<T: Scalar + Zeroable> Zeroable for Vector4<T> {}
unsafe impl<T: Scalar + Pod> Pod for Vector4<T> {}

impl<T: Scalar> Vector4<T> {
    pub const ZERO: Self = Self { x: T::ZERO, y: T::ZERO, z: T::ZERO, w: T::ZERO };
    pub const X: Self = Self { x: T::ONE, y: T::ZERO, z: T::ZERO, w: T::ZERO };
    pub const Y: Self = Self { x: T::ZERO, y: T::ONE, z: T::ZERO, w: T::ZERO };
    pub const Z: Self = Self { x: T::ZERO, y: T::ZERO, z: T::ONE, w: T::ZERO };
    pub const W: Self = Self { x: T::ZERO, y: T::ZERO, z: T::ZERO, w: T::ONE };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Extend a Vector3 with a w component
    #[inline]
    pub fn from_xyz(v: Vector3<T>, w: T) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector4<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: Scalar> std::ops::Sub for Vector4<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl<T: Scalar> std::ops::Neg for Vector4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0f32, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vector4::new(1.0f64, 1.0, 1.0, 1.0);
        assert!((v.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_add_sub() {
        let a = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0f32, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vector4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul_neg() {
        let v = Vector4::new(1.0f32, -2.0, 3.0, -4.0);
        assert_eq!(v * 2.0, Vector4::new(2.0, -4.0, 6.0, -8.0));
        assert_eq!(-v, Vector4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_xyz() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector4::from_xyz(v.xyz(), 9.0).w, 9.0);
    }

    #[test]
    fn test_from_array() {
        let v: Vector4<f64> = [1.0, 2.0, 3.0, 4.0].into();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }
}
