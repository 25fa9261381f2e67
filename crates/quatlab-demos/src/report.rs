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

//! Text rendering of demo results.

use quatlab_core::math::{Mat4, Quaternion, Vec3};

use crate::fixtures::{Entry, Value};

/// Formats vectors, quaternions and matrices with a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    precision: usize,
}

impl Formatter {
    /// Creates a formatter printing `precision` decimals per component.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn component(&self, value: f32) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    fn components(&self, values: &[f32]) -> String {
        values
            .iter()
            .map(|&v| self.component(v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `label : (x, y, z)`
    pub fn vector(&self, label: &str, v: Vec3) -> String {
        format!("{label} : ({})", self.components(&[v.x, v.y, v.z]))
    }

    /// `label : (x, y, z, w)`
    pub fn quaternion(&self, label: &str, q: Quaternion) -> String {
        format!("{label} : ({})", self.components(&[q.x, q.y, q.z, q.w]))
    }

    /// The label on its own line, then one right-aligned line per row.
    pub fn matrix(&self, label: &str, m: &Mat4) -> Vec<String> {
        let width = self.precision + 4;
        let mut lines = Vec::with_capacity(5);
        lines.push(label.to_string());
        for row in &m.rows {
            let cells = [row.x, row.y, row.z, row.w]
                .iter()
                .map(|&v| format!("{:>width$}", self.component(v)))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("  {cells}"));
        }
        lines
    }

    /// Formats one entry into its screen lines.
    pub fn entry(&self, entry: &Entry) -> Vec<String> {
        match &entry.value {
            Value::Scalar(s) => vec![format!("{} : {}", entry.label, self.component(*s))],
            Value::Vector(v) => vec![self.vector(&entry.label, *v)],
            Value::Quaternion(q) => vec![self.quaternion(&entry.label, *q)],
            Value::Matrix(m) => self.matrix(&entry.label, m),
        }
    }
}

/// A text screen redrawn from scratch every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<String>,
}

impl Screen {
    /// Creates an empty screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous frame's text.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Appends a line below the existing ones.
    pub fn print(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The lines drawn so far in this frame.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
