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

//! Rotations between two directions.

use super::{Mat4, MathError, Vec3, ANTIPARALLEL_EPSILON};

/// Builds the rotation matrix that turns the direction `from` onto the direction `to`.
///
/// Both inputs must be unit vectors. The rotation axis is `from × to` and the
/// angle is the one between the two vectors; the sine and cosine of that angle
/// are taken directly from the cross and dot products and fed to the Rodrigues
/// form ([`Mat4::from_axis_sin_cos`]).
///
/// Two configurations have no usable cross product:
///
/// * Antiparallel inputs (`from · to ≈ -1`): any axis perpendicular to `from`
///   works, so one is built by zeroing a component of `from` and swapping the
///   other two, and the result is a half turn about it. The zeroed component is
///   `z` unless `z` dominates, so the axis never collapses near a coordinate axis.
/// * Parallel inputs: the identity matrix.
///
/// # Errors
///
/// Returns [`MathError::ZeroLengthVector`] if `from` or `to` is the zero vector,
/// since no rotation axis exists.
///
/// # Examples
///
/// ```
/// use quatlab_core::math::{direction_to_direction, Vec3};
/// let m = direction_to_direction(Vec3::X, -Vec3::X).unwrap();
/// let v = m.transform_vector(Vec3::X);
/// assert!((v.x + 1.0).abs() < 1e-5);
/// ```
pub fn direction_to_direction(from: Vec3, to: Vec3) -> Result<Mat4, MathError> {
    let cross = from.cross(to);
    let cos_theta = from.dot(to);
    let sin_theta = cross.length();

    if (cos_theta + 1.0).abs() <= ANTIPARALLEL_EPSILON {
        let axis = perpendicular(from).normalize()?;
        log::trace!("direction_to_direction: antiparallel inputs, half turn about {axis:?}");
        return Ok(Mat4::from_axis_sin_cos(axis, 0.0, -1.0));
    }

    if sin_theta <= f32::EPSILON && cos_theta > 0.0 {
        log::trace!("direction_to_direction: parallel inputs, identity");
        return Ok(Mat4::IDENTITY);
    }

    let axis = cross.normalize()?;
    Ok(Mat4::from_axis_sin_cos(axis, sin_theta, cos_theta))
}

/// Returns a vector perpendicular to `v`, or zero if `v` is zero.
///
/// The result is at least as long as the larger of the two components kept, which
/// for a unit `v` is at least `1/√3`.
fn perpendicular(v: Vec3) -> Vec3 {
    if v.x.abs() > v.z.abs() || v.y.abs() > v.z.abs() {
        Vec3::new(v.y, -v.x, 0.0)
    } else {
        Vec3::new(v.z, 0.0, -v.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_rotation(m: &Mat4) {
        assert_abs_diff_eq!(
            *m * m.transpose(),
            Mat4::IDENTITY,
            epsilon = EPSILON * 10.0
        );
        assert_relative_eq!(m.determinant(), 1.0, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_maps_from_onto_to() {
        let from = Vec3::new(-0.6, 0.9, 0.2).normalize().unwrap();
        let to = Vec3::new(0.4, 0.7, -0.5).normalize().unwrap();
        let m = direction_to_direction(from, to).unwrap();

        assert_rotation(&m);
        assert_abs_diff_eq!(m.transform_vector(from), to, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_axis_is_fixed() {
        let from = Vec3::X;
        let to = Vec3::Y;
        let m = direction_to_direction(from, to).unwrap();
        assert_abs_diff_eq!(m.transform_vector(Vec3::Z), Vec3::Z, epsilon = EPSILON);
        assert_abs_diff_eq!(m.transform_vector(Vec3::Y), -Vec3::X, epsilon = EPSILON);
    }

    #[test]
    fn test_antiparallel_x_axis() {
        let from = Vec3::new(1.0, 0.0, 0.0).normalize().unwrap();
        let to = Vec3::new(-1.0, 0.0, 0.0).normalize().unwrap();
        let m = direction_to_direction(from, to).unwrap();

        assert_rotation(&m);
        assert_abs_diff_eq!(m.transform_vector(from), to, epsilon = EPSILON);
    }

    #[test]
    fn test_antiparallel_general() {
        let from = Vec3::new(1.0, 0.7, 0.5).normalize().unwrap();
        let m = direction_to_direction(from, -from).unwrap();

        assert_rotation(&m);
        assert_abs_diff_eq!(m.transform_vector(from), -from, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_antiparallel_z_axis_uses_second_perpendicular() {
        let m = direction_to_direction(Vec3::Z, -Vec3::Z).unwrap();

        assert_rotation(&m);
        assert_abs_diff_eq!(m.transform_vector(Vec3::Z), -Vec3::Z, epsilon = EPSILON);
        // Half turn about X.
        assert_abs_diff_eq!(m.transform_vector(Vec3::X), Vec3::X, epsilon = EPSILON);
    }

    #[test]
    fn test_antiparallel_near_coordinate_axes() {
        let nearly_z = Vec3::new(1e-7, 0.0, 1.0).normalize().unwrap();
        let nearly_y = Vec3::new(0.0, 1.0, -1e-7).normalize().unwrap();
        let nearly_x = Vec3::new(-1.0, 1e-7, 1e-7).normalize().unwrap();

        for from in [nearly_z, nearly_y, nearly_x, Vec3::Y] {
            let axis = perpendicular(from);
            assert!(axis.length() > 0.5, "degenerate axis {axis:?} for {from:?}");
            assert_abs_diff_eq!(axis.dot(from), 0.0, epsilon = EPSILON);

            let m = direction_to_direction(from, -from).unwrap();
            assert_rotation(&m);
            assert_abs_diff_eq!(m.transform_vector(from), -from, epsilon = EPSILON * 10.0);
        }
    }

    #[test]
    fn test_parallel_is_identity() {
        let v = Vec3::new(0.3, -0.4, 0.5).normalize().unwrap();
        assert_eq!(direction_to_direction(v, v), Ok(Mat4::IDENTITY));
    }

    #[test]
    fn test_zero_from_is_an_error() {
        // Neither the cross product nor the perpendicular gives an axis.
        assert_eq!(perpendicular(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(
            direction_to_direction(Vec3::ZERO, Vec3::X),
            Err(MathError::ZeroLengthVector)
        );
    }
}
