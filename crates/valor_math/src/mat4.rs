//! Row-major 4x4 matrix and the transforms built from it
//!
//! The matrix stores four [`Vector4`] rows and [`Matrix4x4::raw_data`] flattens
//! them row by row. Constructors do not share one convention:
//!
//! - [`Matrix4x4::perspective`] and [`Matrix4x4::look_at`] store the transpose of
//!   the column-vector matrix (homogeneous terms in `row3.w` and `row4`). Their
//!   raw data is what a column-major GL uniform expects, and under this storage
//!   points are row vectors, so a chain composes as `model × view × projection`.
//! - The blocks from [`Matrix4x4::axis_rotations`] are laid out as column-vector
//!   rotations; read with row vectors they turn the other way.
//! - `scale` and `translate` fit neither (see below).
//!
//! Only the perspective and look-at matrices are upload-ready as-is.
//!
//! `scale` and `translate` only touch the diagonal entries. This is the
//! contract the renderer was written against and composed transforms depend on
//! it; use [`Matrix4x4::multiply`] with a hand-built matrix for a full affine
//! transform.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Scalar, Vector3, Vector4};

/// 4x4 matrix stored as four rows
///
/// `Default` is the identity.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4<T> {
    pub row1: Vector4<T>,
    pub row2: Vector4<T>,
    pub row3: Vector4<T>,
    pub row4: Vector4<T>,
}

// SAFETY: repr(C) with four Pod rows of identical size, so no padding.
unsafe impl<T: Scalar + Zeroable> Zeroable for Matrix4x4<T> {}
unsafe impl<T: Scalar + Pod> Pod for Matrix4x4<T> {}

impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Matrix4x4<T> {
    pub const IDENTITY: Self = Self {
        row1: Vector4::X,
        row2: Vector4::Y,
        row3: Vector4::Z,
        row4: Vector4::W,
    };

    #[inline]
    pub const fn from_rows(
        row1: Vector4<T>,
        row2: Vector4<T>,
        row3: Vector4<T>,
        row4: Vector4<T>,
    ) -> Self {
        Self { row1, row2, row3, row4 }
    }

    /// Identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Right-handed perspective projection.
    ///
    /// `fov_degrees` is converted to radians internally and the focal term is
    /// `t = 1 / tan(fov) / 2`. With `near == far` the depth terms divide by
    /// zero and come back non-finite.
    pub fn perspective(fov_degrees: T, aspect: T, near: T, far: T) -> Self {
        let f_plus_n = far + near;
        let f_minus_n = far - near;
        let t = T::ONE / fov_degrees.to_radians().tan() / T::TWO;

        Self::from_rows(
            Vector4::new(t / aspect, T::ZERO, T::ZERO, T::ZERO),
            Vector4::new(T::ZERO, t, T::ZERO, T::ZERO),
            Vector4::new(T::ZERO, T::ZERO, -f_plus_n / f_minus_n, -T::ONE),
            Vector4::new(T::ZERO, T::ZERO, -T::TWO * far * near / f_minus_n, T::ZERO),
        )
    }

    /// View matrix looking from `eye` towards `target`.
    ///
    /// Stored in the same layout as [`Self::perspective`]: the basis vectors run
    /// down the first three columns and the eye translation sits in `row4`.
    pub fn look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Self {
        let f = (target - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        Self::from_rows(
            Vector4::new(s.x, u.x, -f.x, T::ZERO),
            Vector4::new(s.y, u.y, -f.y, T::ZERO),
            Vector4::new(s.z, u.z, -f.z, T::ZERO),
            Vector4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), T::ONE),
        )
    }

    /// Componentwise sum of all 16 entries
    pub fn add(a: Self, b: Self) -> Self {
        Self::from_rows(a.row1 + b.row1, a.row2 + b.row2, a.row3 + b.row3, a.row4 + b.row4)
    }

    /// Row-by-column product `a × b`
    pub fn multiply(a: Self, b: Self) -> Self {
        let cols = b.transpose();
        let row = |r: Vector4<T>| {
            Vector4::new(r.dot(cols.row1), r.dot(cols.row2), r.dot(cols.row3), r.dot(cols.row4))
        };

        Self::from_rows(row(a.row1), row(a.row2), row(a.row3), row(a.row4))
    }

    /// Copy of `m` with `row1.x`, `row2.y`, `row3.z` multiplied by the matching
    /// component of `scale`. Off-diagonal terms are left alone, so any rotation
    /// already in `m` is only partially scaled.
    pub fn scale(m: Self, scale: Vector4<T>) -> Self {
        let mut tmp = m;
        tmp.row1.x *= scale.x;
        tmp.row2.y *= scale.y;
        tmp.row3.z *= scale.z;
        tmp
    }

    /// Copy of `m` with `t.x`, `t.y`, `t.z` added to `row1.x`, `row2.y`, `row3.z`.
    ///
    /// Note this is not a last-column translation: `translate(identity, (1, 2, 3))`
    /// yields the diagonal `(2, 3, 4, 1)`.
    pub fn translate(m: Self, t: Vector3<T>) -> Self {
        let mut tmp = m;
        tmp.row1.x += t.x;
        tmp.row2.y += t.y;
        tmp.row3.z += t.z;
        tmp
    }

    /// The three weighted partial rotations `[x_rotate, y_rotate, z_rotate]`.
    ///
    /// Each entry of a plain axis rotation is scaled by the weight of the axis
    /// its column belongs to, so a weight of zero collapses that column.
    pub fn axis_rotations(angle_degrees: T, weights: Vector3<T>) -> [Self; 3] {
        let theta = angle_degrees.to_radians();
        let (s, c) = (theta.sin(), theta.cos());
        let (o, w) = (T::ZERO, Vector4::W);

        let x_rotate = Self::from_rows(
            Vector4::new(weights.x, o, o, o),
            Vector4::new(o, c * weights.y, -s * weights.z, o),
            Vector4::new(o, s * weights.y, c * weights.z, o),
            w,
        );
        let y_rotate = Self::from_rows(
            Vector4::new(c * weights.x, o, s * weights.z, o),
            Vector4::new(o, weights.y, o, o),
            Vector4::new(-s * weights.x, o, c * weights.z, o),
            w,
        );
        let z_rotate = Self::from_rows(
            Vector4::new(c * weights.x, -s * weights.y, o, o),
            Vector4::new(s * weights.x, c * weights.y, o, o),
            Vector4::new(o, o, weights.z, o),
            w,
        );

        [x_rotate, y_rotate, z_rotate]
    }

    /// Rotate `m` by the combined weighted axis rotations:
    /// `m × (x_rotate × y_rotate × z_rotate)`.
    ///
    /// With weights `(1, 1, 1)` this is a proper rotation by `angle_degrees`
    /// about X, then Y, then Z.
    pub fn rotate(m: Self, angle_degrees: T, weights: Vector3<T>) -> Self {
        let [x_rotate, y_rotate, z_rotate] = Self::axis_rotations(angle_degrees, weights);
        let combined = Self::multiply(Self::multiply(x_rotate, y_rotate), z_rotate);
        Self::multiply(m, combined)
    }

    /// Rotation as the renderer originally shipped it: the partial matrices are
    /// built and discarded, and `m` comes back unchanged.
    pub fn rotate_legacy(m: Self, angle_degrees: T, weights: Vector3<T>) -> Self {
        let _ = Self::axis_rotations(angle_degrees, weights);
        m
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(
            Vector4::new(self.row1.x, self.row2.x, self.row3.x, self.row4.x),
            Vector4::new(self.row1.y, self.row2.y, self.row3.y, self.row4.y),
            Vector4::new(self.row1.z, self.row2.z, self.row3.z, self.row4.z),
            Vector4::new(self.row1.w, self.row2.w, self.row3.w, self.row4.w),
        )
    }

    #[inline]
    pub fn rows(&self) -> [Vector4<T>; 4] {
        [self.row1, self.row2, self.row3, self.row4]
    }

    #[inline]
    pub fn to_rows_array(&self) -> [[T; 4]; 4] {
        [
            self.row1.to_array(),
            self.row2.to_array(),
            self.row3.to_array(),
            self.row4.to_array(),
        ]
    }

    /// Flatten rows 1..4, columns x, y, z, w in that order.
    pub fn raw_data(&self) -> [T; 16] {
        let (r1, r2, r3, r4) = (self.row1, self.row2, self.row3, self.row4);
        [
            r1.x, r1.y, r1.z, r1.w,
            r2.x, r2.y, r2.z, r2.w,
            r3.x, r3.y, r3.z, r3.w,
            r4.x, r4.y, r4.z, r4.w,
        ]
    }

    /// Raw data of the transpose, for consumers expecting the other order.
    pub fn column_major_data(&self) -> [T; 16] {
        self.transpose().raw_data()
    }

    /// True when all 16 entries are finite
    pub fn is_finite(&self) -> bool {
        self.raw_data().iter().all(|v| v.is_finite())
    }
}

impl<T: Scalar + Pod> Matrix4x4<T> {
    /// Row-major bytes, identical in order to [`Self::raw_data`]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Scalar> std::ops::Add for Matrix4x4<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Matrix4x4::add(self, other)
    }
}

impl<T: Scalar> std::ops::Mul for Matrix4x4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Matrix4x4::multiply(self, other)
    }
}
