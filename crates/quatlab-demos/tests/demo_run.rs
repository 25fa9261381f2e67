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

use anyhow::Result;
use approx::assert_abs_diff_eq;
use quatlab_demos::input::{Key, ScriptedInput};
use quatlab_demos::{DemoApp, DemoConfig};
use tempfile::tempdir;

fn run(config: &DemoConfig) -> Result<(Vec<String>, u64)> {
    let input = ScriptedInput::exit_after(config.frames, config.exit_key);
    let mut app = DemoApp::new(config, input)?;
    let lines = app.run()?.lines().to_vec();
    Ok((lines, app.frames_drawn()))
}

fn components(lines: &[String], label: &str) -> Vec<f32> {
    let prefix = format!("{label} : (");
    lines
        .iter()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or_else(|| panic!("missing {label}"))
        .split(", ")
        .map(|c| c.parse().unwrap())
        .collect()
}

#[test]
fn test_config_file_drives_a_run() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("demos.json");

    let config = DemoConfig {
        frames: 4,
        precision: 4,
        demos: vec!["quaternion-basics".to_string(), "slerp".to_string()],
        exit_key: Key::Enter,
    };
    config.to_file(&path)?;
    let loaded = DemoConfig::from_file(&path)?;
    assert_eq!(loaded, config);

    let (lines, frames) = run(&loaded)?;
    assert_eq!(frames, 4);

    // Seven quaternion-basics lines, then five slerp lines.
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Identity : (0.0000, 0.0000, 0.0000, 1.0000)");
    assert_eq!(lines[1], "Conjugate : (-2.0000, -3.0000, -4.0000, 1.0000)");
    assert_eq!(lines[2], "Inverse : (-0.0667, -0.1000, -0.1333, 0.0333)");
    assert_eq!(lines[4], "q1 * q2 : (8.0000, 3.0000, 16.0000, -29.0000)");
    assert_eq!(lines[5], "q2 * q1 : (2.0000, 15.0000, 10.0000, -29.0000)");
    assert_eq!(lines[6], "Norm : 5.4772");

    // The end quaternion is the negated start, so every step lands on the start.
    assert_eq!(lines[7], "Slerp (t=0.0) : (0.1061, 0.1061, 0.0000, 0.9888)");
    assert_eq!(lines[8], "Slerp (t=0.3) : (0.1061, 0.1061, 0.0000, 0.9888)");
    assert_eq!(lines[11], "Slerp (t=1.0) : (0.1061, 0.1061, 0.0000, 0.9888)");
    Ok(())
}

#[test]
fn test_partial_config_file_uses_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "demos": ["rodrigues"] }"#)?;

    let config = DemoConfig::from_file(&path)?;
    assert_eq!(config.frames, 1);
    assert_eq!(config.precision, 4);
    assert_eq!(config.exit_key, Key::Escape);

    let (lines, frames) = run(&config)?;
    assert_eq!(frames, 1);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "rotateMatrix");
    assert!(lines[4].ends_with("1.0000"));
    Ok(())
}

#[test]
fn test_missing_or_malformed_file_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    assert!(DemoConfig::from_file(dir.path().join("absent.json")).is_err());

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ frames: ")?;
    let err = DemoConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"));
    Ok(())
}

#[test]
fn test_default_run_prints_every_demo() -> Result<()> {
    let (lines, frames) = run(&DemoConfig::default())?;
    assert_eq!(frames, 1);

    for label in [
        "rotateMatrix",
        "rotateMatrix0",
        "rotateMatrix1",
        "rotateMatrix2",
        "Identity",
        "rotation",
        "rotateByQuaternion",
        "rotateByMatrix",
        "transformPoint",
        "Slerp (t=0.7)",
    ] {
        assert!(
            lines
                .iter()
                .any(|line| line == label || line.starts_with(&format!("{label} : "))),
            "missing {label}"
        );
    }

    // The two rotated points agree.
    let by_quaternion = components(&lines, "rotateByQuaternion");
    let by_matrix = components(&lines, "rotateByMatrix");
    assert_eq!(by_quaternion.len(), 3);
    for (a, b) in by_quaternion.iter().zip(&by_matrix) {
        assert_abs_diff_eq!(*a, *b, epsilon = 2e-4);
    }
    Ok(())
}
