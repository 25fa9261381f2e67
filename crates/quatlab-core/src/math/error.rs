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

//! Defines the error type for degenerate numeric input.

use thiserror::Error;

/// An error raised when an operation receives input it cannot produce a finite
/// result for.
///
/// Out-of-convention input, such as a non-unit rotation axis, is not an error:
/// it produces a correspondingly scaled transform.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A vector of zero length was passed to `normalize`.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
    /// A quaternion of zero norm was passed to `normalize` or `inverse`.
    #[error("cannot normalize or invert a zero-norm quaternion")]
    ZeroNormQuaternion,
    /// A homogeneous transform produced a `w` of zero.
    #[error("homogeneous divide by zero (w = {w})")]
    DegenerateHomogeneous {
        /// The `w` component produced by the transform.
        w: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MathError::ZeroLengthVector.to_string(),
            "cannot normalize a zero-length vector"
        );
        assert_eq!(
            MathError::DegenerateHomogeneous { w: 0.0 }.to_string(),
            "homogeneous divide by zero (w = 0)"
        );
    }
}
