//! Scalar abstraction shared by every kernel type

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Degrees to radians factor for single precision callers.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Floating-point type the kernel is instantiated with.
///
/// Implemented for `f32` and `f64`. All arithmetic inside a single operation
/// stays in the instantiated precision.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;

    /// Lossless for `f64`, identity for `f32`.
    fn from_f32(value: f32) -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn is_finite(self) -> bool;

    /// Degrees to radians as `angle * (PI / 180)`.
    #[inline]
    fn to_radians(self) -> Self {
        self * (Self::PI / Self::from_f32(180.0))
    }
}

macro_rules! impl_scalar {
    ($t:ident) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = std::$t::consts::PI;

            #[inline]
            fn from_f32(value: f32) -> Self {
                value as $t
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
