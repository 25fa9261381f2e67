// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the rotation mathematics primitives.
//!
//! This module contains the vector, quaternion and matrix types together with the
//! conversions between them. Conventions are fixed once for the whole crate:
//!
//! * Quaternions are stored as `(x, y, z, w)` with `w` as the scalar part.
//! * `lhs * rhs` on quaternions is the Hamilton product. When rotating a vector,
//!   `rhs` is applied first, then `lhs`.
//! * [`Mat4`] is row-major and acts on **row vectors**: `v' = v · M`. Translation
//!   lives in the last row, and `a * b` applies `a` first.
//!
//! All angular functions operate in **radians**.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// Dot product above which [`Quaternion::slerp`] falls back to linear interpolation.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Tolerance on `cos + 1` for treating two directions as antiparallel.
pub const ANTIPARALLEL_EPSILON: f32 = 1e-6;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

// --- Declare Sub-Modules ---

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod rotation;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::MathError;
pub use self::matrix::Mat4;
pub use self::quaternion::Quaternion;
pub use self::rotation::direction_to_direction;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use quatlab_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use quatlab_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
