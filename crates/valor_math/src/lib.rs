//! 3D Transformation Kernel
//!
//! This crate provides the vector, matrix and quaternion types the Valor engine
//! uses to build camera, projection and model transforms.
//!
//! ## Core Types
//!
//! - [`Vector3`] - 3-component vector (translations, axes, points)
//! - [`Vector4`] - 4-component vector (matrix rows, quaternion storage)
//! - [`Matrix4x4`] - row-major 4x4 matrix, exported through [`Matrix4x4::raw_data`]
//! - [`Quaternion`] - rotation pair `(q, p)` with conversions to and from [`Matrix4x4`]
//!
//! Every type is generic over a [`Scalar`] (`f32` or `f64`).
//!
//! ## Non-finite results
//!
//! Nothing in this crate validates its inputs. Degenerate arguments produce
//! infinities or NaN which are handed back to the caller unchanged:
//!
//! - [`Matrix4x4::perspective`] with `near == far` (division by zero)
//! - [`Quaternion::mat_to_quat`] when a diagonal entry is negative (square root of a negative)
//! - [`Vector3::normalized`] is the one exception: the zero vector stays zero

mod scalar;
mod vec3;
mod vec4;
pub mod mat4;
pub mod quaternion;

pub use scalar::{Scalar, DEG_TO_RAD};
pub use vec3::Vector3;
pub use vec4::Vector4;
pub use mat4::Matrix4x4;
pub use quaternion::Quaternion;
