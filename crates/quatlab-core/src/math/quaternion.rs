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

//! Provides a Quaternion type for representing 3D rotations.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use super::{Mat4, MathError, Vec3, SLERP_LINEAR_THRESHOLD};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Represents a quaternion for 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" part. For representing rotations, it should be a "unit
/// quaternion" where `x² + y² + z² + w² = 1`. `q` and `-q` represent the same
/// rotation.
///
/// Multiplication is the Hamilton product. When the result is used to rotate a
/// vector, `a * b` applies `b` first and `a` second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`Quaternion::from_axis_angle`].
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector. It is used as given,
    ///   so a non-unit axis yields a non-unit (scaled) quaternion.
    /// * `angle_radians`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let (s, c) = (angle_radians * 0.5).sin_cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Extracts the rotation of the upper-left 3x3 block of a matrix.
    ///
    /// The block must be a pure rotation. The result is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroNormQuaternion`] if the block is so far from a
    /// rotation that no quaternion can be recovered.
    pub fn from_rotation_matrix(m: &Mat4) -> Result<Self, MathError> {
        // `m` acts on row vectors, so the column-vector element (i, j) is rows[j][i].
        let m00 = m.rows[0].x;
        let m10 = m.rows[0].y;
        let m20 = m.rows[0].z;
        let m01 = m.rows[1].x;
        let m11 = m.rows[1].y;
        let m21 = m.rows[1].z;
        let m02 = m.rows[2].x;
        let m12 = m.rows[2].y;
        let m22 = m.rows[2].z;

        // Algorithm from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
        let trace = m00 + m11 + m22;
        let mut q = Self::IDENTITY;

        if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            q.w = 0.25 * s;
            q.x = (m21 - m12) / s;
            q.y = (m02 - m20) / s;
            q.z = (m10 - m01) / s;
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            q.w = (m21 - m12) / s;
            q.x = 0.25 * s;
            q.y = (m01 + m10) / s;
            q.z = (m02 + m20) / s;
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            q.w = (m02 - m20) / s;
            q.x = (m01 + m10) / s;
            q.y = 0.25 * s;
            q.z = (m12 + m21) / s;
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            q.w = (m10 - m01) / s;
            q.x = (m02 + m20) / s;
            q.y = (m12 + m21) / s;
            q.z = 0.25 * s;
        }
        q.normalize()
    }

    /// Calculates the squared norm of the quaternion.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the norm (length) of the quaternion.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a norm of 1.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroNormQuaternion`] if the norm is zero.
    pub fn normalize(&self) -> Result<Self, MathError> {
        let norm = self.norm();
        let inv_norm = 1.0 / norm;
        if norm > 0.0 && inv_norm.is_finite() {
            Ok(*self * inv_norm)
        } else {
            Err(MathError::ZeroNormQuaternion)
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of the quaternion: the conjugate divided by the
    /// squared norm.
    ///
    /// For a unit quaternion this equals the conjugate, but the division is
    /// always performed so that non-unit quaternions invert correctly.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroNormQuaternion`] if the norm is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use quatlab_core::math::Quaternion;
    /// let q = Quaternion::new(2.0, 3.0, 4.0, 1.0);
    /// let identity = q * q.inverse().unwrap();
    /// assert!((identity.w - 1.0).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Self, MathError> {
        let norm_squared = self.norm_squared();
        let inv_norm_squared = 1.0 / norm_squared;
        if norm_squared > 0.0 && inv_norm_squared.is_finite() {
            Ok(self.conjugate() * inv_norm_squared)
        } else {
            Err(MathError::ZeroNormQuaternion)
        }
    }

    /// Computes the dot product of two quaternions, treated as 4-vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a 3D vector by this quaternion using the sandwich product
    /// `q * (v, 0) * conjugate(q)`.
    ///
    /// The scalar part of the product is discarded. It is zero for a unit
    /// quaternion; a non-unit quaternion scales the result by its squared norm.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let p = Self::new(v.x, v.y, v.z, 0.0);
        let r = *self * p * self.conjugate();
        Vec3::new(r.x, r.y, r.z)
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// Slerp interpolates at constant angular speed along the shorter great arc
    /// between the two orientations. If `start` and `end` lie in opposite
    /// hemispheres, `end` is negated first (it is the same rotation).
    ///
    /// When the two are nearly parallel (dot above [`SLERP_LINEAR_THRESHOLD`])
    /// the result is the component-wise linear interpolation, which is **not**
    /// renormalized.
    ///
    /// *   `t` - The interpolation factor. It is not clamped: values outside
    ///     `[0.0, 1.0]` extrapolate along the same arc.
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        let mut cos_theta = start.dot(end);
        let mut end_adjusted = end;

        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end_adjusted = -end;
        }

        if cos_theta > SLERP_LINEAR_THRESHOLD {
            log::trace!("slerp: near-parallel inputs (dot = {cos_theta}), using lerp");
            return (start * (1.0 - t)) + (end_adjusted * t);
        }

        let theta = cos_theta.acos();
        let sin_theta_inv = 1.0 / theta.sin();
        let scale_start = ((1.0 - t) * theta).sin() * sin_theta_inv;
        let scale_end = (t * theta).sin() * sin_theta_inv;
        (start * scale_start) + (end_adjusted * scale_end)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Right-multiplies this quaternion by another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion. See [`Quaternion::rotate_vec3`].
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a standard rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}
