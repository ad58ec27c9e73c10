//! Pilot configuration loaded from the process environment.
use std::env;
use std::sync::Arc;
use std::time::Duration;

use pilot_core::{Calm, Humanizer, Point, Settings};

use crate::adapters::StageFright;
use crate::error::{ConfigError, Result};

/// Everything needed to assemble a [`Pilot`](crate::Pilot) besides the
/// adapters themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct PilotConfig {
    pub settings: Settings,
    /// Insert random hesitation before attacks.
    pub stage_fright: bool,
    /// Seed for the hesitation draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Where the simulated character starts.
    pub start: Point,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            stage_fright: false,
            seed: None,
            start: Point::new(0.5, 0.5),
        }
    }
}

impl PilotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PILOT_MOVE_TOLERANCE` - Arrival distance for `Move` (default: 0.1)
    /// - `PILOT_ADJUST_TOLERANCE` - Arrival distance for `Adjust` (default: 0.01)
    /// - `PILOT_BUFF_COOLDOWN_SECS` - Buff macro cooldown (default: 180)
    /// - `PILOT_STAGE_FRIGHT` - Hesitate before attacks (default: false)
    /// - `PILOT_SEED` - Seed for hesitation draws (default: random)
    /// - `PILOT_START_X`, `PILOT_START_Y` - Simulated start position (default: 0.5)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(tolerance) = read_finite(&lookup, "PILOT_MOVE_TOLERANCE")? {
            config.settings = config
                .settings
                .with_move_tolerance(tolerance)
                .map_err(|_| {
                    ConfigError::invalid(
                        "PILOT_MOVE_TOLERANCE",
                        &tolerance.to_string(),
                        "must be positive",
                    )
                })?;
        }
        if let Some(tolerance) = read_finite(&lookup, "PILOT_ADJUST_TOLERANCE")? {
            config.settings = config
                .settings
                .with_adjust_tolerance(tolerance)
                .map_err(|_| {
                    ConfigError::invalid(
                        "PILOT_ADJUST_TOLERANCE",
                        &tolerance.to_string(),
                        "must be positive",
                    )
                })?;
        }

        if let Some(raw) = lookup("PILOT_BUFF_COOLDOWN_SECS") {
            let secs: f64 = parse(&raw, "PILOT_BUFF_COOLDOWN_SECS", "expected seconds")?;
            config.settings.buff_cooldown = Duration::try_from_secs_f64(secs).map_err(|_| {
                ConfigError::invalid("PILOT_BUFF_COOLDOWN_SECS", &raw, "expected seconds")
            })?;
        }

        if let Some(raw) = lookup("PILOT_STAGE_FRIGHT") {
            config.stage_fright = parse_flag(&raw).ok_or_else(|| {
                ConfigError::invalid("PILOT_STAGE_FRIGHT", &raw, "expected a boolean")
            })?;
        }

        if let Some(raw) = lookup("PILOT_SEED") {
            config.seed = Some(parse(&raw, "PILOT_SEED", "expected an unsigned integer")?);
        }

        if let Some(x) = read_finite(&lookup, "PILOT_START_X")? {
            config.start.x = x;
        }
        if let Some(y) = read_finite(&lookup, "PILOT_START_Y")? {
            config.start.y = y;
        }

        Ok(config)
    }

    /// Humanizer matching the stage-fright setting.
    pub fn humanizer(&self) -> Arc<dyn Humanizer> {
        match (self.stage_fright, self.seed) {
            (false, _) => Arc::new(Calm),
            (true, Some(seed)) => Arc::new(StageFright::new(seed)),
            (true, None) => Arc::new(StageFright::from_entropy()),
        }
    }
}

fn parse<T: std::str::FromStr>(raw: &str, key: &'static str, reason: &'static str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, raw, reason))
}

fn read_finite(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<f64>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value: f64 = parse(&raw, key, "expected a number")?;
    if !value.is_finite() {
        return Err(ConfigError::invalid(key, &raw, "must be finite"));
    }
    Ok(Some(value))
}

/// Accepts the usual spellings of a boolean switch.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
