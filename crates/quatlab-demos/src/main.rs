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

//! Quatlab demo runner
//! Prints the rotation demos in a headless frame loop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use quatlab_demos::input::ScriptedInput;
use quatlab_demos::{DemoApp, DemoConfig, DemoKind};

/// Quatlab rotation demos
#[derive(Parser)]
#[command(name = "quatlab-demos")]
#[command(about = "Prints 3D rotation demos: Rodrigues, quaternions, slerp")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Demo to run (repeatable, defaults to all of them)
    #[arg(short, long = "demo")]
    demos: Vec<String>,

    /// Number of frames to draw before the exit key is pressed
    #[arg(short, long)]
    frames: Option<u32>,

    /// Decimal places for printed values
    #[arg(short, long)]
    precision: Option<usize>,

    /// List the available demos and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list {
        for kind in DemoKind::ALL {
            println!("{kind}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    if !cli.demos.is_empty() {
        config.demos = cli.demos;
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    let input = ScriptedInput::exit_after(config.frames, config.exit_key);
    let mut app = DemoApp::new(&config, input)?;
    let screen = app.run()?;
    for line in screen.lines() {
        println!("{line}");
    }

    Ok(())
}
