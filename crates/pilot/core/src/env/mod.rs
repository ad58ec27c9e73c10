//! Ports through which a running command observes and drives the game.
//!
//! The capture pipeline, layout planner, kill-switch owner and input device
//! all live outside this crate. [`Env`] bundles borrowed handles to them so a
//! command can be executed against real adapters, a simulator, or test
//! doubles without knowing which.
mod clock;
mod feed;
mod humanizer;
mod switch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use feed::{DirectPath, PathPlanner, PositionFeed};
pub use humanizer::{Calm, Humanizer};
pub use switch::KillSwitch;

use std::time::Duration;

use crate::config::Settings;
use crate::geometry::Point;
use crate::input::{HeldKey, Key, KeyInput, PressTiming};

/// Aggregates the collaborators a command needs for one invocation.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    position: &'a dyn PositionFeed,
    planner: &'a dyn PathPlanner,
    switch: &'a dyn KillSwitch,
    keys: &'a dyn KeyInput,
    clock: &'a dyn Clock,
    humanizer: &'a dyn Humanizer,
    settings: &'a Settings,
}

impl<'a> Env<'a> {
    pub fn new(
        position: &'a dyn PositionFeed,
        planner: &'a dyn PathPlanner,
        switch: &'a dyn KillSwitch,
        keys: &'a dyn KeyInput,
        clock: &'a dyn Clock,
        humanizer: &'a dyn Humanizer,
        settings: &'a Settings,
    ) -> Self {
        Self {
            position,
            planner,
            switch,
            keys,
            clock,
            humanizer,
            settings,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    pub fn keys(&self) -> &'a dyn KeyInput {
        self.keys
    }

    pub fn clock(&self) -> &'a dyn Clock {
        self.clock
    }

    /// Latest position estimate. May be stale.
    pub fn position(&self) -> Point {
        self.position.current_position()
    }

    pub fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }

    /// Waypoints from the current position to `target`.
    pub fn path_to(&self, target: Point) -> Vec<Point> {
        self.planner.shortest_path(self.position(), target)
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn sleep(&self, duration: Duration) {
        self.clock.sleep(duration);
    }

    /// Taps `key` with default timing.
    pub fn press(&self, key: Key, repetitions: u32) {
        self.press_with(key, repetitions, PressTiming::default());
    }

    pub fn press_with(&self, key: Key, repetitions: u32, timing: PressTiming) {
        tracing::trace!(%key, repetitions, ?timing, "press");
        self.keys.press(key, repetitions, timing);
    }

    /// Holds `key` until the returned guard is dropped.
    pub fn hold(&self, key: Key) -> HeldKey<'a> {
        tracing::trace!(%key, "hold");
        HeldKey::new(self.keys, key)
    }

    /// Sleeps for whatever extra delay the humanizer asks for.
    pub fn humanize(&self) {
        if let Some(delay) = self.humanizer.pre_attack_delay() {
            tracing::trace!(?delay, "humanizer delay");
            self.clock.sleep(delay);
        }
    }
}
