use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use pilot_core::Humanizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hesitates before most attacks for a random, human-looking moment.
#[derive(Debug)]
pub struct StageFright {
    rng: Mutex<StdRng>,
    probability: f64,
    delay_ms: RangeInclusive<u64>,
}

impl StageFright {
    /// Chance that any given attack is delayed.
    pub const PROBABILITY: f64 = 0.7;
    pub const MIN_DELAY: Duration = Duration::from_millis(100);
    pub const MAX_DELAY: Duration = Duration::from_millis(300);

    /// Deterministic draws for a given `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            probability: Self::PROBABILITY,
            delay_ms: Self::MIN_DELAY.as_millis() as u64..=Self::MAX_DELAY.as_millis() as u64,
        }
    }
}

impl Humanizer for StageFright {
    fn pre_attack_delay(&self) -> Option<Duration> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        if !rng.gen_bool(self.probability) {
            return None;
        }
        Some(Duration::from_millis(rng.gen_range(self.delay_ms.clone())))
    }
}
