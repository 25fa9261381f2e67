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

//! # Quatlab Demos
//!
//! A headless stand-in for the windowed demo programs. Each frame it polls the
//! input, evaluates the selected demos with [`quatlab_core`], and redraws a text
//! screen, until the exit key is pressed.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod fixtures;
pub mod input;
pub mod report;

pub use app::DemoApp;
pub use config::{ConfigError, DemoConfig};
pub use fixtures::DemoKind;
