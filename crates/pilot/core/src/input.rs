//! Keyboard vocabulary and the key-input port.
//!
//! Commands never synthesize input themselves. They call into a [`KeyInput`]
//! implementation, which owns the timing of each press and the actual device.
use std::time::Duration;

use strum::{Display, EnumIter, EnumString};

use crate::error::ValidationError;

/// Physical keys used by the hero command book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Alt,
    Ctrl,
    #[strum(to_string = "lshift", serialize = "shift")]
    LShift,
    Space,
    A,
    D,
    E,
    F,
    Q,
    R,
    T,
    W,
    #[strum(serialize = "2")]
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Two,
    #[strum(serialize = "3")]
    #[cfg_attr(feature = "serde", serde(rename = "3"))]
    Three,
    #[strum(serialize = "4")]
    #[cfg_attr(feature = "serde", serde(rename = "4"))]
    Four,
}

impl Key {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidKey {
                value: value.to_string(),
            })
    }
}

/// Compass direction accepted by movement primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidDirection {
                value: value.to_string(),
            })
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub const fn key(self) -> Key {
        match self {
            Direction::Up => Key::Up,
            Direction::Down => Key::Down,
            Direction::Left => Key::Left,
            Direction::Right => Key::Right,
        }
    }
}

/// Horizontal subset of [`Direction`], used by attacks that face a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotHorizontal {
                value: value.to_string(),
            })
    }

    pub const fn key(self) -> Key {
        match self {
            HorizontalDirection::Left => Key::Left,
            HorizontalDirection::Right => Key::Right,
        }
    }
}

impl From<HorizontalDirection> for Direction {
    fn from(direction: HorizontalDirection) -> Self {
        match direction {
            HorizontalDirection::Left => Direction::Left,
            HorizontalDirection::Right => Direction::Right,
        }
    }
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        direction.key()
    }
}

impl From<HorizontalDirection> for Key {
    fn from(direction: HorizontalDirection) -> Self {
        direction.key()
    }
}

/// How long a key stays down and how long to wait after releasing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressTiming {
    pub down: Duration,
    pub up: Duration,
}

impl PressTiming {
    pub const DEFAULT_DOWN: Duration = Duration::from_millis(50);
    pub const DEFAULT_UP: Duration = Duration::from_millis(100);

    pub const fn new(down: Duration, up: Duration) -> Self {
        Self { down, up }
    }

    #[must_use]
    pub const fn with_down(mut self, down: Duration) -> Self {
        self.down = down;
        self
    }

    #[must_use]
    pub const fn with_up(mut self, up: Duration) -> Self {
        self.up = up;
        self
    }

    /// Wall time one repetition occupies.
    pub fn cycle(&self) -> Duration {
        self.down + self.up
    }
}

impl Default for PressTiming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DOWN, Self::DEFAULT_UP)
    }
}

/// One observable key action, as recorded by sinks and simulators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Press {
        key: Key,
        repetitions: u32,
        timing: PressTiming,
    },
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    pub fn key(&self) -> Key {
        match *self {
            KeyEvent::Press { key, .. } | KeyEvent::Down(key) | KeyEvent::Up(key) => key,
        }
    }
}

/// Low-level key synthesis.
///
/// `press` blocks for `repetitions * timing.cycle()`. `key_down` and `key_up`
/// return immediately.
pub trait KeyInput: Send + Sync {
    fn press(&self, key: Key, repetitions: u32, timing: PressTiming);

    fn key_down(&self, key: Key);

    fn key_up(&self, key: Key);
}

/// A key held down for as long as the guard lives.
///
/// Dropping the guard releases the key, so every exit path of a command
/// (early return, kill-switch, panic unwind) leaves the device clean.
#[must_use = "the key is released as soon as the guard is dropped"]
pub struct HeldKey<'a> {
    keys: &'a dyn KeyInput,
    key: Key,
}

impl<'a> HeldKey<'a> {
    pub fn new(keys: &'a dyn KeyInput, key: Key) -> Self {
        keys.key_down(key);
        Self { keys, key }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Release the key now rather than at end of scope.
    pub fn release(self) {}
}

impl Drop for HeldKey<'_> {
    fn drop(&mut self) {
        self.keys.key_up(self.key);
    }
}
