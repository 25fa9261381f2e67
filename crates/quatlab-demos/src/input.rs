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

//! Keyboard state for the demo loop.
//!
//! The driver keeps the key snapshot of the current and of the previous frame,
//! so that a key counts as *triggered* only on the frame it goes down.

use serde::{Deserialize, Serialize};

/// The keys the demo driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// The escape key, the default exit key.
    Escape,
    /// The space bar.
    Space,
    /// The enter/return key.
    Enter,
}

impl Key {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        match self {
            Key::Escape => 0,
            Key::Space => 1,
            Key::Enter => 2,
        }
    }
}

/// Double-buffered key state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    current: [bool; Key::COUNT],
    previous: [bool; Key::COUNT],
}

impl KeyboardState {
    /// Creates a state with every key up in both frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the current snapshot to the previous one and records `down` as the
    /// keys held during the new frame.
    pub fn advance(&mut self, down: &[Key]) {
        self.previous = self.current;
        self.current = [false; Key::COUNT];
        for key in down {
            self.current[key.index()] = true;
        }
    }

    /// Returns `true` while `key` is held.
    pub fn is_down(&self, key: Key) -> bool {
        self.current[key.index()]
    }

    /// Returns `true` only on the frame `key` went from up to down.
    pub fn is_triggered(&self, key: Key) -> bool {
        self.current[key.index()] && !self.previous[key.index()]
    }
}

/// A source of per-frame key snapshots.
pub trait InputSource {
    /// Returns the keys held during frame `frame` (counted from 0).
    fn poll(&mut self, frame: u64) -> Vec<Key>;
}

/// Input that replays a fixed script, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    holds: Vec<(Key, u64, u64)>,
}

impl ScriptedInput {
    /// Creates a script in which no key is ever pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds `key` down from frame `from` up to and including frame `until`.
    pub fn hold(mut self, key: Key, from: u64, until: u64) -> Self {
        self.holds.push((key, from, until));
        self
    }

    /// A script that presses `key` during the last of `frames` frames and keeps
    /// it held afterwards.
    pub fn exit_after(frames: u32, key: Key) -> Self {
        let last = u64::from(frames.max(1)) - 1;
        Self::new().hold(key, last, u64::MAX)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<Key> {
        self.holds
            .iter()
            .filter(|(_, from, until)| (*from..=*until).contains(&frame))
            .map(|(key, _, _)| *key)
            .collect()
    }
}
