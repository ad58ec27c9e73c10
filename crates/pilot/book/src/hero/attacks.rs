//! Attacks that face a side before striking.
use std::time::Duration;

use pilot_core::params::check_non_negative;
use pilot_core::{
    Command, CommandInfo, Env, HorizontalDirection, Key, PressTiming, ValidationError,
};

const FACE_DELAY: Duration = Duration::from_millis(50);
const LIGHT_SETTLE: Duration = Duration::from_millis(200);
const HEAVY_SETTLE: Duration = Duration::from_millis(300);

/// Faces `direction`, then presses `key` `attacks` times per repetition.
///
/// The direction stays held through the strikes and is released before the
/// settle delay.
fn strike(
    env: &Env<'_>,
    direction: HorizontalDirection,
    key: Key,
    attacks: u32,
    repetitions: u32,
    timing: PressTiming,
) {
    env.sleep(FACE_DELAY);
    let held = env.hold(direction.key());
    env.sleep(FACE_DELAY);
    env.humanize();
    for _ in 0..repetitions {
        if !env.is_enabled() {
            break;
        }
        env.press_with(key, attacks, timing);
    }
    held.release();
}

/// Attack with Raging Blows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RagingBlows {
    direction: HorizontalDirection,
    attacks: u32,
    repetitions: u32,
}

impl RagingBlows {
    pub const NAME: &'static str = "RagingBlows";

    const KEY: Key = Key::Ctrl;
    const PRESS_UP: Duration = Duration::from_millis(150);

    pub const fn new(direction: HorizontalDirection, attacks: u32, repetitions: u32) -> Self {
        Self {
            direction,
            attacks,
            repetitions,
        }
    }

    /// Longer combos need longer to recover.
    fn settle(&self) -> Duration {
        if self.attacks > 2 {
            HEAVY_SETTLE
        } else {
            LIGHT_SETTLE
        }
    }
}

impl Command for RagingBlows {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(
            direction = %self.direction,
            attacks = self.attacks,
            "attacking with raging blows"
        );
        strike(
            env,
            self.direction,
            Self::KEY,
            self.attacks,
            self.repetitions,
            PressTiming::default().with_up(Self::PRESS_UP),
        );
        env.sleep(self.settle());
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME)
            .var("direction", self.direction)
            .var("attacks", self.attacks)
            .var("repetitions", self.repetitions)
    }
}

/// Attack with Panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panic {
    direction: HorizontalDirection,
}

impl Panic {
    pub const NAME: &'static str = "Panic";

    pub const fn new(direction: HorizontalDirection) -> Self {
        Self { direction }
    }
}

impl Command for Panic {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(direction = %self.direction, "attacking with panic");
        strike(env, self.direction, Key::A, 1, 1, PressTiming::default());
        env.sleep(LIGHT_SETTLE);
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME).var("direction", self.direction)
    }
}

/// Attack with Rupture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rupture {
    direction: HorizontalDirection,
}

impl Rupture {
    pub const NAME: &'static str = "Rupture";

    pub const fn new(direction: HorizontalDirection) -> Self {
        Self { direction }
    }
}

impl Command for Rupture {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(direction = %self.direction, "attacking with rupture");
        strike(env, self.direction, Key::D, 1, 1, PressTiming::default());
        env.sleep(LIGHT_SETTLE);
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME).var("direction", self.direction)
    }
}

/// Hops in one direction, attacking with `button` after every hop, for
/// `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HopAttack {
    button: Key,
    direction: HorizontalDirection,
    duration: Duration,
}

impl HopAttack {
    pub const NAME: &'static str = "HopAttack";

    const HOP_UP: Duration = Duration::from_millis(600);
    const HOP_TO_ATTACK: Duration = Duration::from_millis(60);
    const ATTACK_UP: Duration = Duration::from_millis(50);

    pub fn new(
        button: Key,
        direction: HorizontalDirection,
        seconds: f64,
    ) -> Result<Self, ValidationError> {
        let seconds = check_non_negative("duration", seconds)?;
        let duration =
            Duration::try_from_secs_f64(seconds).map_err(|_| ValidationError::OutOfRange {
                param: "duration",
                value: seconds.to_string(),
            })?;
        Ok(Self {
            button,
            direction,
            duration,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Command for HopAttack {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(button = %self.button, direction = %self.direction, "hop attacking");

        let start = env.now();
        let _held = env.hold(self.direction.key());
        while env.is_enabled() && env.now().saturating_sub(start) < self.duration {
            env.press_with(Key::Alt, 1, PressTiming::default().with_up(Self::HOP_UP));
            env.sleep(Self::HOP_TO_ATTACK);
            env.press_with(
                self.button,
                1,
                PressTiming::default().with_up(Self::ATTACK_UP),
            );
        }
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME)
            .var("button", self.button)
            .var("direction", self.direction)
            .var("duration", self.duration.as_secs_f64())
    }
}
