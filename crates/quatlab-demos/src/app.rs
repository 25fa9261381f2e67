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

//! The frame loop.

use anyhow::Result;

use crate::config::DemoConfig;
use crate::fixtures::{self, DemoKind};
use crate::input::{InputSource, Key, KeyboardState};
use crate::report::{Formatter, Screen};

/// Runs the selected demos once per frame until the exit key is pressed.
pub struct DemoApp<I: InputSource> {
    demos: Vec<DemoKind>,
    formatter: Formatter,
    exit_key: Key,
    input: I,
    keyboard: KeyboardState,
    screen: Screen,
    frames_drawn: u64,
}

impl<I: InputSource> DemoApp<I> {
    /// Builds an app from a validated configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: &DemoConfig, input: I) -> Result<Self> {
        let demos = config.validate()?;
        log::info!(
            "Demo selection: {}",
            demos
                .iter()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self {
            demos,
            formatter: Formatter::new(config.precision),
            exit_key: config.exit_key,
            input,
            keyboard: KeyboardState::new(),
            screen: Screen::new(),
            frames_drawn: 0,
        })
    }

    /// Draws one frame and reports whether the loop should stop.
    ///
    /// Keys are polled at the start of the frame; the exit check happens after
    /// the frame is drawn, so the frame in which the key goes down is still shown.
    pub fn frame(&mut self) -> Result<bool> {
        let down = self.input.poll(self.frames_drawn);
        self.keyboard.advance(&down);

        self.screen.clear();
        for &kind in &self.demos {
            let entries = fixtures::evaluate(kind)?;
            for entry in &entries {
                for line in self.formatter.entry(entry) {
                    self.screen.print(line);
                }
            }
        }
        self.frames_drawn += 1;
        log::debug!(
            "Frame {} drew {} lines",
            self.frames_drawn,
            self.screen.lines().len()
        );

        Ok(self.keyboard.is_triggered(self.exit_key))
    }

    /// Draws frames until the exit key is triggered.
    ///
    /// Returns the screen as it was drawn in the last frame. The input source
    /// must eventually press the exit key; with one that never does (such as an
    /// empty [`ScriptedInput`](crate::input::ScriptedInput)) this never returns.
    /// Drive such sources with [`DemoApp::frame`] instead.
    pub fn run(&mut self) -> Result<&Screen> {
        while !self.frame()? {}
        log::info!(
            "Exit key {:?} pressed after {} frame(s)",
            self.exit_key,
            self.frames_drawn
        );
        Ok(&self.screen)
    }

    /// The number of frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    #[test]
    fn test_runs_until_exit_frame() {
        let config = DemoConfig {
            frames: 3,
            demos: vec!["rodrigues".to_string()],
            ..DemoConfig::default()
        };
        let mut app =
            DemoApp::new(&config, ScriptedInput::exit_after(config.frames, config.exit_key))
                .unwrap();
        let lines = app.run().unwrap().lines().to_vec();

        assert_eq!(app.frames_drawn(), 3);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "rotateMatrix");
    }

    #[test]
    fn test_held_key_does_not_exit_twice() {
        // Escape is already down on frame 0, released on frame 1 and pressed
        // again on frame 2: only the presses on frames 0 and 2 trigger.
        let input = ScriptedInput::new()
            .hold(Key::Escape, 0, 0)
            .hold(Key::Escape, 2, 2);
        let config = DemoConfig {
            demos: vec!["slerp".to_string()],
            ..DemoConfig::default()
        };
        let mut app = DemoApp::new(&config, input).unwrap();

        assert!(app.frame().unwrap());
        assert!(!app.frame().unwrap());
        assert!(app.frame().unwrap());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let input = ScriptedInput::new()
            .hold(Key::Space, 0, 5)
            .hold(Key::Escape, 4, 4);
        let config = DemoConfig {
            demos: vec!["quaternion-basics".to_string()],
            ..DemoConfig::default()
        };
        let mut app = DemoApp::new(&config, input).unwrap();
        app.run().unwrap();
        assert_eq!(app.frames_drawn(), 5);
    }

    #[test]
    fn test_silent_input_never_requests_exit() {
        let config = DemoConfig {
            demos: vec!["rodrigues".to_string()],
            ..DemoConfig::default()
        };
        let mut app = DemoApp::new(&config, ScriptedInput::new()).unwrap();
        for _ in 0..10 {
            assert!(!app.frame().unwrap());
        }
        assert_eq!(app.frames_drawn(), 10);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DemoConfig {
            demos: vec!["nope".to_string()],
            ..DemoConfig::default()
        };
        assert!(DemoApp::new(&config, ScriptedInput::new()).is_err());
    }
}
