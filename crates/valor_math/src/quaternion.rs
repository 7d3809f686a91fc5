//! Quaternion rotation pair and its matrix conversions
//!
//! A [`Quaternion`] here is not a bare unit quaternion. It pairs the rotation
//! `q` (w last) with the vector `p` the rotation acts on, and the conversions
//! below operate on both together:
//!
//! 1. [`Quaternion::mat_to_quat`] derives `q` from a matrix, taking `w` from `row4.w`
//! 2. [`Quaternion::euler_angle_to_quaternion`] encodes an axis/angle into `p`
//! 3. [`Quaternion::multiply`] rotates `p` by `q`, storing the result in `q.xyz` with `w = 1`
//! 4. [`Quaternion::quat_to_mat`] expands `q` into the upper 3x3 of a matrix
//!
//! [`Quaternion::rotate`] chains these in that order. None of the steps
//! renormalize, so the pipeline is not norm preserving and the rotation block of
//! `quat_to_mat` carries half-scaled entries (the textbook form doubles every term).

use serde::{Deserialize, Serialize};

use crate::{Matrix4x4, Scalar, Vector3, Vector4};

/// Rotation `q` together with the point `p` it is applied to
///
/// `Default` is the identity rotation: `q = (0, 0, 0, 1)`, `p = (0, 0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    /// Rotation component, w last
    pub q: Vector4<T>,
    /// Point component the rotation acts on
    pub p: Vector3<T>,
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Quaternion<T> {
    pub const IDENTITY: Self = Self {
        q: Vector4::W,
        p: Vector3::ZERO,
    };

    #[inline]
    pub const fn new(q: Vector4<T>, p: Vector3<T>) -> Self {
        Self { q, p }
    }

    #[inline]
    pub fn square(s: T) -> T {
        s * s
    }

    /// Rotate `q1.p` by `q1.q` using the sandwich-product expansion.
    ///
    /// The rotated vector lands in `q.xyz` of the result; `q.w` is always 1 and
    /// `p` is zero, so the result is generally not unit length.
    pub fn multiply(q1: Self) -> Self {
        let sq = Self::square;
        let two = T::TWO;
        let Vector4 { x: qx, y: qy, z: qz, w: qw } = q1.q;
        let Vector3 { x: px, y: py, z: pz } = q1.p;

        let mut temp = Self::IDENTITY;
        temp.q.w = T::ONE;
        temp.q.x = (px * sq(qw) + px * sq(qx) - px * sq(qy) - px * sq(qz))
            + ((two * py) * qx * qy - (two * py) * qw * qz)
            + ((two * pz) * qw * qy + (two * pz) * qx * qz);
        temp.q.y = ((two * px) * qw * qz + (two * px) * qx * qy)
            + (py * sq(qw) - py * sq(qx) + py * sq(qy) - py * sq(qz))
            + ((two * pz) * qy * qz + (two * pz) * qw * qx);
        temp.q.z = ((two * px) * qx * qz - (two * px) * qw * qy)
            + ((two * py) * qw * qx + (two * py) * qy * qz)
            + (pz * sq(qw) - pz * sq(qx) - pz * sq(qy) + pz * sq(qz));

        temp
    }

    /// Computes `m = |v|` and returns `(m, m, m, m)`.
    ///
    /// The components are replaced by the magnitude rather than divided by it.
    pub fn normalize(v: Vector4<T>) -> Vector4<T> {
        let sq = Self::square;
        let m = (sq(v.w) + sq(v.x) + sq(v.y) + sq(v.z)).sqrt();
        Vector4::new(m, m, m, m)
    }

    /// Copy of `m` with `row1.xyz` and `row2.xyz` multiplied by `s`, and `row3.z`
    /// multiplied by `s` twice. `row3.x`, `row3.y`, the w column and `row4` are copied.
    pub fn scalar(m: Matrix4x4<T>, s: T) -> Matrix4x4<T> {
        let mut tmp = m;
        tmp.row1.x *= s;
        tmp.row1.y *= s;
        tmp.row1.z *= s;

        tmp.row2.x *= s;
        tmp.row2.y *= s;
        tmp.row2.z *= s;

        tmp.row3.z *= s;
        tmp.row3.z *= s;
        tmp
    }

    /// Expand `rot.q` into the upper 3x3 block of an otherwise identity matrix.
    ///
    /// Diagonal terms are `w² + a² - 1/2` and off-diagonal terms are single
    /// products, i.e. half the usual rotation matrix. `rot.p` is ignored.
    pub fn quat_to_mat(rot: Self) -> Matrix4x4<T> {
        let sq = Self::square;
        let half = T::HALF;
        let Vector4 { x, y, z, w } = rot.q;

        let x1 = sq(w) + sq(x) - half;
        let x2 = x * y - w * z;
        let x3 = w * y + x * z;

        let y1 = w * z + x * y;
        let y2 = sq(w) + sq(y) - half;
        let y3 = y * z - w * x;

        let z1 = x * z - w * y;
        let z2 = w * x + y * z;
        let z3 = sq(w) + sq(z) - half;

        Matrix4x4::from_rows(
            Vector4::new(x1, x2, x3, T::ZERO),
            Vector4::new(y1, y2, y3, T::ZERO),
            Vector4::new(z1, z2, z3, T::ZERO),
            Vector4::W,
        )
    }

    /// Derive `q` from a matrix.
    ///
    /// The trace is taken as `4·row4.w² - 1`, then `w = sqrt((trace + 1) / 4)` and
    /// each of x, y, z is `sqrt(diagonal / 2) + (1 - trace) / 4`. A negative
    /// diagonal entry makes the matching component NaN. `p` is zero.
    pub fn mat_to_quat(m: Matrix4x4<T>) -> Self {
        let two = T::TWO;
        let four = two * two;
        let trace = four * Self::square(m.row4.w) - T::ONE;
        let tail = (T::ONE - trace) / four;

        let mut temp = Self::IDENTITY;
        temp.q.w = ((trace + T::ONE) / four).sqrt();
        temp.q.x = (m.row1.x / two).sqrt() + tail;
        temp.q.y = (m.row2.y / two).sqrt() + tail;
        temp.q.z = (m.row3.z / two).sqrt() + tail;
        temp
    }

    /// Encode an axis and angle into the `p` component.
    ///
    /// `angle` is used as given (radians when called from [`Self::rotate`]). For each
    /// non-zero axis weight, in x, y, z order, `angle` is first multiplied by that
    /// weight and the matching `p` component becomes `cos(angle/2) + sin(angle/2)`.
    /// The scaling accumulates, so the y term sees `angle · x · y`.
    pub fn euler_angle_to_quaternion(axis: Vector3<T>, angle: T) -> Self {
        let encode = |a: T| (a / T::TWO).cos() + (a / T::TWO).sin();
        let mut angle = angle;
        let mut temp = Self::IDENTITY;

        if axis.x != T::ZERO {
            angle *= axis.x;
            temp.p.x = encode(angle);
        }
        if axis.y != T::ZERO {
            angle *= axis.y;
            temp.p.y = encode(angle);
        }
        if axis.z != T::ZERO {
            angle *= axis.z;
            temp.p.z = encode(angle);
        }

        temp
    }

    /// Rotate `m` through the quaternion pipeline and return `m × rotation`.
    ///
    /// The identity is converted with [`Self::mat_to_quat`], the axis is encoded with
    /// [`Self::euler_angle_to_quaternion`] and transplanted into `p`, then
    /// [`Self::multiply`] and [`Self::quat_to_mat`] produce the rotation matrix.
    pub fn rotate(m: Matrix4x4<T>, angle_degrees: T, axis: Vector3<T>) -> Matrix4x4<T> {
        let radians = angle_degrees.to_radians();
        let mut q = Self::mat_to_quat(Matrix4x4::identity());
        let p = Self::euler_angle_to_quaternion(axis, radians);

        q.p = p.p;
        let q = Self::multiply(q);
        let rotation = Self::quat_to_mat(q);
        Matrix4x4::multiply(m, rotation)
    }
}
