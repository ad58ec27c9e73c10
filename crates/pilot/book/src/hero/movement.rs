//! Closed-loop movement: coarse navigation, fine correction, and the single
//! jump maneuver both are built from.
//!
//! `Move` and `Adjust` alternate between correcting the horizontal and the
//! vertical error, one action per turn, re-sampling the position feed after
//! every action. Both spend from a single step budget per invocation and stop
//! as soon as the target is within tolerance, the budget is spent, the
//! kill-switch is cleared, or a horizontal and a vertical turn in a row find
//! nothing to correct.
use std::time::Duration;

use pilot_core::params::check_finite;
use pilot_core::{
    Command, CommandInfo, Direction, Env, HorizontalDirection, Key, Point, PressTiming, Settings,
    ValidationError,
};

/// Axis corrected on the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn flip(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

fn target_point(x: f64, y: f64) -> Result<Point, ValidationError> {
    Ok(Point::new(check_finite("x", x)?, check_finite("y", y)?))
}

/// Moves to a position along the shortest path of the current layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    target: Point,
    max_steps: u32,
}

impl Move {
    pub const NAME: &'static str = "Move";

    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            target: target_point(x, y)?,
            max_steps: Settings::DEFAULT_MOVE_STEPS,
        })
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Jumps toward `waypoint` until it or the final target is reached.
    ///
    /// Returns the budget left for the remaining waypoints.
    fn step(&self, env: &Env<'_>, waypoint: Point, mut remaining: u32) -> u32 {
        let tolerance = env.settings().move_tolerance();
        let threshold = env.settings().move_axis_threshold();
        let mut axis = Axis::Horizontal;
        let mut idle_turns = 0;

        loop {
            let here = env.position();
            if !env.is_enabled()
                || remaining == 0
                || here.within(waypoint, tolerance)
                || here.within(self.target, tolerance)
            {
                return remaining;
            }

            let direction = match axis {
                Axis::Horizontal => {
                    let dx = waypoint.x - here.x;
                    (dx.abs() > threshold).then_some(if dx < 0.0 {
                        Direction::Left
                    } else {
                        Direction::Right
                    })
                }
                Axis::Vertical => {
                    let dy = waypoint.y - here.y;
                    (dy.abs() > threshold).then_some(if dy < 0.0 {
                        Direction::Up
                    } else {
                        Direction::Down
                    })
                }
            };

            match direction {
                Some(direction) => {
                    tracing::debug!(%here, %waypoint, %direction, remaining, "move correction");
                    Jump::new(direction).perform(env);
                    remaining -= 1;
                    idle_turns = 0;
                }
                None => {
                    idle_turns += 1;
                    if idle_turns == 2 {
                        tracing::debug!(%here, %waypoint, "no correction on either axis");
                        return remaining;
                    }
                }
            }
            axis = axis.flip();
        }
    }
}

impl Command for Move {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(goal = %self.target, max_steps = self.max_steps, "moving");

        let mut remaining = self.max_steps;
        for waypoint in env.path_to(self.target) {
            if !env.is_enabled() || remaining == 0 {
                break;
            }
            remaining = self.step(env, waypoint, remaining);
        }

        tracing::debug!(
            position = %env.position(),
            spent = self.max_steps - remaining,
            "move finished"
        );
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME)
            .var("x", self.target.x)
            .var("y", self.target.y)
            .var("max_steps", self.max_steps)
    }
}

/// Fine-tunes the position with short walks and hops.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjust {
    target: Point,
    max_steps: u32,
}

impl Adjust {
    pub const NAME: &'static str = "Adjust";

    const DROP_HOLD: Duration = Duration::from_millis(50);
    const DROP_SETTLE: Duration = Duration::from_millis(50);
    const DROP_HOPS: u32 = 3;
    const DROP_HOP_DOWN: Duration = Duration::from_millis(100);

    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            target: target_point(x, y)?,
            max_steps: Settings::DEFAULT_ADJUST_STEPS,
        })
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Walks with `direction` held until the horizontal error on that side is
    /// within `threshold`. Bounded by [`Settings::MAX_WALK_POLLS`].
    fn walk(&self, env: &Env<'_>, direction: HorizontalDirection, threshold: f64) {
        let _held = env.hold(direction.key());
        for _ in 0..Settings::MAX_WALK_POLLS {
            if !env.is_enabled() {
                break;
            }
            let dx = self.target.x - env.position().x;
            let outside = match direction {
                HorizontalDirection::Left => dx < -threshold,
                HorizontalDirection::Right => dx > threshold,
            };
            if !outside {
                break;
            }
            env.sleep(Settings::WALK_POLL_INTERVAL);
        }
    }

    /// Drops through the platform below.
    fn drop_down(&self, env: &Env<'_>) {
        let held = env.hold(Key::Down);
        env.sleep(Self::DROP_HOLD);
        env.press_with(
            Key::Alt,
            Self::DROP_HOPS,
            PressTiming::default().with_down(Self::DROP_HOP_DOWN),
        );
        held.release();
        env.sleep(Self::DROP_SETTLE);
    }
}

impl Command for Adjust {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(goal = %self.target, max_steps = self.max_steps, "adjusting");

        let tolerance = env.settings().adjust_tolerance();
        let threshold = env.settings().adjust_axis_threshold();
        let mut remaining = self.max_steps;
        let mut axis = Axis::Horizontal;
        let mut idle_turns = 0;

        loop {
            let here = env.position();
            if !env.is_enabled() || remaining == 0 || here.within(self.target, tolerance) {
                break;
            }

            let corrected = match axis {
                Axis::Horizontal => {
                    let dx = self.target.x - here.x;
                    let outside = dx.abs() > threshold;
                    if outside {
                        let direction = if dx < 0.0 {
                            HorizontalDirection::Left
                        } else {
                            HorizontalDirection::Right
                        };
                        tracing::debug!(%here, %direction, remaining, "adjust walk");
                        self.walk(env, direction, threshold);
                    }
                    outside
                }
                Axis::Vertical => {
                    let dy = self.target.y - here.y;
                    let outside = dy.abs() > threshold;
                    if outside {
                        tracing::debug!(%here, dy, remaining, "adjust hop");
                        if dy < 0.0 {
                            env.press(Key::W, 1);
                        } else {
                            self.drop_down(env);
                        }
                    }
                    outside
                }
            };

            if corrected {
                remaining -= 1;
                idle_turns = 0;
            } else {
                idle_turns += 1;
                if idle_turns == 2 {
                    tracing::debug!(%here, "no correction on either axis");
                    break;
                }
            }
            axis = axis.flip();
        }
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME)
            .var("x", self.target.x)
            .var("y", self.target.y)
            .var("max_steps", self.max_steps)
    }
}

/// Performs a flash jump, rope lift or drop in one direction.
///
/// One maneuver, no feedback. Callers re-sample the position afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    direction: Direction,
}

impl Jump {
    pub const NAME: &'static str = "Jump";

    const ROPE_LIFT_UP: Duration = Duration::from_secs(1);
    const FLASH_WINDUP: Duration = Duration::from_millis(100);
    const FLASH_SETTLE: Duration = Duration::from_millis(500);

    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn parse(direction: &str) -> Result<Self, ValidationError> {
        Direction::parse(direction).map(Self::new)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The maneuver itself, without the command-level log line. `Move`
    /// issues one of these per correction.
    fn perform(&self, env: &Env<'_>) {
        let held = env.hold(self.direction.key());
        match self.direction {
            Direction::Up => {
                held.release();
                env.press_with(Key::W, 1, PressTiming::default().with_up(Self::ROPE_LIFT_UP));
            }
            Direction::Down => {
                env.press(Key::Alt, 1);
                held.release();
            }
            Direction::Left | Direction::Right => {
                env.sleep(Self::FLASH_WINDUP);
                env.press(Key::Alt, 1);
                env.press(Key::Alt, 1);
                held.release();
                env.sleep(Self::FLASH_SETTLE);
            }
        }
    }
}

impl Command for Jump {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(direction = %self.direction, "jumping");
        self.perform(env);
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME).var("direction", self.direction)
    }
}
