use std::time::Duration;

/// Jitter policy applied before attacks to avoid machine-regular timing.
pub trait Humanizer: Send + Sync {
    /// Extra delay to insert before the next attack, if any.
    fn pre_attack_delay(&self) -> Option<Duration>;
}

/// Never delays.
#[derive(Clone, Copy, Debug, Default)]
pub struct Calm;

impl Humanizer for Calm {
    fn pre_attack_delay(&self) -> Option<Duration> {
        None
    }
}
