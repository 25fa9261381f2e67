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

//! The demo programs' literal inputs, evaluated into labelled results.

use std::fmt;
use std::str::FromStr;

use quatlab_core::math::{direction_to_direction, Mat4, MathError, Quaternion, Vec3};

use crate::config::ConfigError;

/// The interpolation parameters printed by the slerp demo.
pub const SLERP_STEPS: [f32; 5] = [0.0, 0.3, 0.5, 0.7, 1.0];

/// One of the rotation demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// Rodrigues' formula: an axis-angle rotation matrix.
    Rodrigues,
    /// Rotation matrices mapping one direction onto another.
    DirectionToDirection,
    /// Quaternion identity, conjugate, inverse, normalization, product and norm.
    QuaternionBasics,
    /// Rotating a point by a quaternion and by the equivalent matrix.
    RotateVector,
    /// Slerp between a quaternion and its negation.
    Slerp,
}

impl DemoKind {
    /// Every demo, in the order they are printed by default.
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Rodrigues,
        DemoKind::DirectionToDirection,
        DemoKind::QuaternionBasics,
        DemoKind::RotateVector,
        DemoKind::Slerp,
    ];

    /// The name used on the command line and in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Rodrigues => "rodrigues",
            DemoKind::DirectionToDirection => "direction-to-direction",
            DemoKind::QuaternionBasics => "quaternion-basics",
            DemoKind::RotateVector => "rotate-vector",
            DemoKind::Slerp => "slerp",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownDemo(s.to_string()))
    }
}

/// A computed value, ready to be formatted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(f32),
    /// A 3D vector.
    Vector(Vec3),
    /// A quaternion in `(x, y, z, w)` order.
    Quaternion(Quaternion),
    /// A 4x4 matrix.
    Matrix(Mat4),
}

/// A labelled value printed on one or more screen lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The text printed before the value.
    pub label: String,
    /// The value itself.
    pub value: Value,
}

impl Entry {
    fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Evaluates one demo from its fixed inputs.
///
/// # Errors
///
/// Propagates any [`MathError`] from the core; none is expected for the built-in
/// inputs.
pub fn evaluate(kind: DemoKind) -> Result<Vec<Entry>, MathError> {
    match kind {
        DemoKind::Rodrigues => rodrigues(),
        DemoKind::DirectionToDirection => direction_pairs(),
        DemoKind::QuaternionBasics => quaternion_basics(),
        DemoKind::RotateVector => rotate_vector(),
        DemoKind::Slerp => Ok(slerp()),
    }
}

fn rodrigues() -> Result<Vec<Entry>, MathError> {
    let axis = Vec3::new(1.0, 1.0, 1.0).normalize()?;
    let rotate_matrix = Mat4::from_axis_angle(axis, 0.44);
    Ok(vec![Entry::new("rotateMatrix", Value::Matrix(rotate_matrix))])
}

fn direction_pairs() -> Result<Vec<Entry>, MathError> {
    let from0 = Vec3::new(1.0, 0.7, 0.5).normalize()?;
    let to0 = -from0;
    let from1 = Vec3::new(-0.6, 0.9, 0.2).normalize()?;
    let to1 = Vec3::new(0.4, 0.7, -0.5).normalize()?;

    let rotate_matrix0 = direction_to_direction(Vec3::X, -Vec3::X)?;
    let rotate_matrix1 = direction_to_direction(from0, to0)?;
    let rotate_matrix2 = direction_to_direction(from1, to1)?;

    Ok(vec![
        Entry::new("rotateMatrix0", Value::Matrix(rotate_matrix0)),
        Entry::new("rotateMatrix1", Value::Matrix(rotate_matrix1)),
        Entry::new("rotateMatrix2", Value::Matrix(rotate_matrix2)),
        Entry::new(
            "from0 * rotateMatrix1",
            Value::Vector(rotate_matrix1.transform_vector(from0)),
        ),
        Entry::new(
            "from1 * rotateMatrix2",
            Value::Vector(rotate_matrix2.transform_vector(from1)),
        ),
    ])
}

fn quaternion_basics() -> Result<Vec<Entry>, MathError> {
    let q1 = Quaternion::new(2.0, 3.0, 4.0, 1.0);
    let q2 = Quaternion::new(1.0, 3.0, 5.0, 2.0);

    Ok(vec![
        Entry::new("Identity", Value::Quaternion(Quaternion::IDENTITY)),
        Entry::new("Conjugate", Value::Quaternion(q1.conjugate())),
        Entry::new("Inverse", Value::Quaternion(q1.inverse()?)),
        Entry::new("Normalize", Value::Quaternion(q1.normalize()?)),
        Entry::new("q1 * q2", Value::Quaternion(q1 * q2)),
        Entry::new("q2 * q1", Value::Quaternion(q2 * q1)),
        Entry::new("Norm", Value::Scalar(q1.norm())),
    ])
}

fn rotate_vector() -> Result<Vec<Entry>, MathError> {
    let axis = Vec3::new(1.0, 0.4, -0.2).normalize()?;
    let rotation = Quaternion::from_axis_angle(axis, 0.45);
    let point = Vec3::new(2.1, -0.9, 1.3);
    let rotate_matrix = Mat4::from_quat(rotation);

    Ok(vec![
        Entry::new("rotation", Value::Quaternion(rotation)),
        Entry::new("rotateMatrix", Value::Matrix(rotate_matrix)),
        Entry::new("rotateByQuaternion", Value::Vector(rotation * point)),
        Entry::new(
            "rotateByMatrix",
            Value::Vector(rotate_matrix.transform_vector(point)),
        ),
        Entry::new(
            "transformPoint",
            Value::Vector(rotate_matrix.transform_point(point)?),
        ),
    ])
}

fn slerp() -> Vec<Entry> {
    // The axis is left unnormalized.
    let rotation0 = Quaternion::from_axis_angle(Vec3::new(0.71, 0.71, 0.0), 0.3);
    let rotation1 = -rotation0;

    SLERP_STEPS
        .iter()
        .map(|&t| {
            let interpolated = Quaternion::slerp(rotation0, rotation1, t);
            Entry::new(format!("Slerp (t={t:.1})"), Value::Quaternion(interpolated))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use quatlab_core::math::EPSILON;

    fn value_of(entries: &[Entry], label: &str) -> Value {
        entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
            .unwrap_or_else(|| panic!("missing entry {label}"))
    }

    #[test]
    fn test_names_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.name().parse::<DemoKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!("quaternion".parse::<DemoKind>().is_err());
    }

    #[test]
    fn test_every_demo_evaluates() {
        for kind in DemoKind::ALL {
            let entries = evaluate(kind).unwrap();
            assert!(!entries.is_empty(), "{kind} produced nothing");
        }
    }

    #[test]
    fn test_quaternion_basics_values() {
        let entries = evaluate(DemoKind::QuaternionBasics).unwrap();
        assert_eq!(
            value_of(&entries, "q1 * q2"),
            Value::Quaternion(Quaternion::new(8.0, 3.0, 16.0, -29.0))
        );
        assert_eq!(
            value_of(&entries, "q2 * q1"),
            Value::Quaternion(Quaternion::new(2.0, 15.0, 10.0, -29.0))
        );
        let Value::Scalar(norm) = value_of(&entries, "Norm") else {
            panic!("Norm is not a scalar");
        };
        assert_abs_diff_eq!(norm, 30.0f32.sqrt(), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_vector_paths_agree() {
        let entries = evaluate(DemoKind::RotateVector).unwrap();
        let (Value::Vector(by_quat), Value::Vector(by_matrix), Value::Vector(by_point)) = (
            value_of(&entries, "rotateByQuaternion"),
            value_of(&entries, "rotateByMatrix"),
            value_of(&entries, "transformPoint"),
        ) else {
            panic!("rotated values are not vectors");
        };
        assert_abs_diff_eq!(by_quat, by_matrix, epsilon = EPSILON * 10.0);
        assert_abs_diff_eq!(by_matrix, by_point, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_direction_pairs_reach_targets() {
        let entries = evaluate(DemoKind::DirectionToDirection).unwrap();
        let from0 = Vec3::new(1.0, 0.7, 0.5).normalize().unwrap();
        let to1 = Vec3::new(0.4, 0.7, -0.5).normalize().unwrap();

        let Value::Vector(rotated0) = value_of(&entries, "from0 * rotateMatrix1") else {
            panic!("not a vector");
        };
        let Value::Vector(rotated1) = value_of(&entries, "from1 * rotateMatrix2") else {
            panic!("not a vector");
        };
        assert_abs_diff_eq!(rotated0, -from0, epsilon = EPSILON * 10.0);
        assert_abs_diff_eq!(rotated1, to1, epsilon = EPSILON * 10.0);
    }

    #[test]
    fn test_slerp_of_negated_pair_is_constant() {
        let entries = evaluate(DemoKind::Slerp).unwrap();
        assert_eq!(entries.len(), SLERP_STEPS.len());
        assert_eq!(entries[1].label, "Slerp (t=0.3)");

        let rotation0 = Quaternion::from_axis_angle(Vec3::new(0.71, 0.71, 0.0), 0.3);
        for entry in entries {
            let Value::Quaternion(q) = entry.value else {
                panic!("{} is not a quaternion", entry.label);
            };
            assert_abs_diff_eq!(q, rotation0, epsilon = EPSILON);
        }
    }
}
