use std::f64::consts::SQRT_2;
use std::time::Duration;

use crate::error::ValidationError;
use crate::params::check_positive;

/// Tunable parameters shared by every command in a book.
///
/// Tolerances are always finite and positive; they can only be changed
/// through the checked `with_*` setters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Settings {
    /// Distance from the target at which `Move` considers itself arrived.
    move_tolerance: f64,
    /// Distance from the target at which `Adjust` considers itself arrived.
    adjust_tolerance: f64,
    /// Cooldown of the buff macro bundled into `Buff`.
    pub buff_cooldown: Duration,
}

impl Settings {
    // ===== compile-time constants =====
    /// Step budget of `Move` when the routine does not give one.
    pub const DEFAULT_MOVE_STEPS: u32 = 15;
    /// Step budget of `Adjust` when the routine does not give one.
    pub const DEFAULT_ADJUST_STEPS: u32 = 5;
    /// Interval between position polls while walking with a held key.
    pub const WALK_POLL_INTERVAL: Duration = Duration::from_millis(50);
    /// Upper bound on polls per held-key walk (about three seconds).
    pub const MAX_WALK_POLLS: u32 = 60;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_TOLERANCE: f64 = 0.1;
    pub const DEFAULT_ADJUST_TOLERANCE: f64 = 0.01;
    pub const DEFAULT_BUFF_COOLDOWN: Duration = Duration::from_secs(180);

    pub fn new() -> Self {
        Self {
            move_tolerance: Self::DEFAULT_MOVE_TOLERANCE,
            adjust_tolerance: Self::DEFAULT_ADJUST_TOLERANCE,
            buff_cooldown: Self::DEFAULT_BUFF_COOLDOWN,
        }
    }

    /// # Errors
    ///
    /// Rejects a tolerance that is not finite and positive.
    pub fn with_move_tolerance(mut self, tolerance: f64) -> Result<Self, ValidationError> {
        self.move_tolerance = check_positive("move_tolerance", tolerance)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Rejects a tolerance that is not finite and positive.
    pub fn with_adjust_tolerance(mut self, tolerance: f64) -> Result<Self, ValidationError> {
        self.adjust_tolerance = check_positive("adjust_tolerance", tolerance)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_buff_cooldown(mut self, cooldown: Duration) -> Self {
        self.buff_cooldown = cooldown;
        self
    }

    pub fn move_tolerance(&self) -> f64 {
        self.move_tolerance
    }

    pub fn adjust_tolerance(&self) -> f64 {
        self.adjust_tolerance
    }

    /// Per-axis error above which `Move` issues a correction.
    ///
    /// Both axes inside `tolerance / √2` implies the point is inside the
    /// tolerance circle.
    pub fn move_axis_threshold(&self) -> f64 {
        self.move_tolerance / SQRT_2
    }

    /// Per-axis error above which `Adjust` issues a correction.
    pub fn adjust_axis_threshold(&self) -> f64 {
        self.adjust_tolerance / SQRT_2
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
