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

//! Defines the `Mat4` type and associated operations.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use super::{MathError, Quaternion, Vec3, Vec4};
use std::ops::{Index, Mul};

/// A 4x4 row-major matrix acting on row vectors (`v' = v · M`).
///
/// The upper-left 3x3 block holds rotation (and any scale), row 3 holds the
/// translation, and column 3 holds the projective terms used by the homogeneous
/// divide in [`Mat4::transform_point`]. Because vectors multiply from the left,
/// `a * b` is the transform that applies `a` first and `b` second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Mat4 {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four row vectors.
    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Returns a column of the matrix as a `Vec4`.
    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.rows[0].get(index),
            self.rows[1].get(index),
            self.rows[2].get(index),
            self.rows[3].get(index),
        )
    }

    /// Creates a rotation matrix from an axis and an angle (Rodrigues' formula).
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; it is not normalized here.
    /// * `angle`: The angle of rotation in radians.
    ///
    /// The result agrees with `Mat4::from_quat(Quaternion::from_axis_angle(axis, angle))`
    /// but is built without going through a quaternion.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_axis_sin_cos(axis, s, c)
    }

    /// Creates a rotation matrix from a unit axis and the sine and cosine of the
    /// rotation angle, taken as-is.
    ///
    /// This is the Rodrigues form shared by [`Mat4::from_axis_angle`] and
    /// [`direction_to_direction`](super::direction_to_direction), where the sine
    /// and cosine are already known and recomputing them from an angle would only
    /// lose precision.
    pub fn from_axis_sin_cos(axis: Vec3, s: f32, c: f32) -> Self {
        let t = 1.0 - c;
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        Self::from_rows(
            Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            Vec4::W,
        )
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion is used as given; pass a unit quaternion to obtain an
    /// orthogonal matrix.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let x = q.x;
        let y = q.y;
        let z = q.z;
        let w = q.w;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_rows(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Rotates a direction by this matrix, using only the upper-left 3x3 block.
    ///
    /// Translation and the projective column are ignored and no homogeneous
    /// divide takes place.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.rows[0].truncate() * v.x
            + self.rows[1].truncate() * v.y
            + self.rows[2].truncate() * v.z
    }

    /// Transforms a point by this matrix, including translation and the
    /// homogeneous divide.
    ///
    /// The point is extended to `(x, y, z, 1)`, multiplied by the matrix, and the
    /// resulting `x, y, z` are divided by the resulting `w`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DegenerateHomogeneous`] if the resulting `w` is zero
    /// (not greater than `f32::EPSILON` in magnitude).
    pub fn transform_point(&self, v: Vec3) -> Result<Vec3, MathError> {
        let h = row_times(Vec4::from_vec3(v, 1.0), self);
        if h.w.abs() <= f32::EPSILON {
            return Err(MathError::DegenerateHomogeneous { w: h.w });
        }
        Ok(h.truncate() / h.w)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Computes the determinant of the matrix.
    ///
    /// A rotation matrix has a determinant of `+1`; `-1` indicates a reflection.
    pub fn determinant(&self) -> f32 {
        let r0 = self.rows[0];
        let r1 = self.rows[1];
        let r2 = self.rows[2];
        let r3 = self.rows[3];

        let m00 = r1.y * (r2.z * r3.w - r3.z * r2.w) - r2.y * (r1.z * r3.w - r3.z * r1.w)
            + r3.y * (r1.z * r2.w - r2.z * r1.w);
        let m01 = r0.y * (r2.z * r3.w - r3.z * r2.w) - r2.y * (r0.z * r3.w - r3.z * r0.w)
            + r3.y * (r0.z * r2.w - r2.z * r0.w);
        let m02 = r0.y * (r1.z * r3.w - r3.z * r1.w) - r1.y * (r0.z * r3.w - r3.z * r0.w)
            + r3.y * (r0.z * r1.w - r1.z * r0.w);
        let m03 = r0.y * (r1.z * r2.w - r2.z * r1.w) - r1.y * (r0.z * r2.w - r2.z * r0.w)
            + r2.y * (r0.z * r1.w - r1.z * r0.w);

        r0.x * m00 - r1.x * m01 + r2.x * m02 - r3.x * m03
    }
}

/// Multiplies a row vector by a matrix.
#[inline]
fn row_times(v: Vec4, m: &Mat4) -> Vec4 {
    Vec4::new(
        v.dot(m.col(0)),
        v.dot(m.col(1)),
        v.dot(m.col(2)),
        v.dot(m.col(3)),
    )
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Composes two transforms: `self` is applied first, then `rhs`.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_rows(
            row_times(self.rows[0], &rhs),
            row_times(self.rows[1], &rhs),
            row_times(self.rows[2], &rhs),
            row_times(self.rows[3], &rhs),
        )
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    /// Multiplies a row vector by a matrix (`v · M`).
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        row_times(self, &rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix row by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
