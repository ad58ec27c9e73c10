use std::time::Duration;

/// Last-fired timestamp of one gated ability.
///
/// Timestamps are clock readings (time since the clock's origin). A cooldown
/// that has never fired is always ready. After firing, it becomes ready again
/// once strictly more than `window` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cooldown {
    window: Duration,
    last_fired: Option<Duration>,
}

impl Cooldown {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    pub const fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }

    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_fired {
            None => true,
            // A reading earlier than the last firing counts as zero elapsed.
            Some(last) => now.saturating_sub(last) > self.window,
        }
    }

    /// Marks the ability fired at `now` if it is ready. Returns whether it was.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last_fired = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_fired_is_ready() {
        let cooldown = Cooldown::new(Duration::from_secs(10));
        assert!(cooldown.is_ready(Duration::ZERO));
        assert_eq!(cooldown.last_fired(), None);
    }

    #[test]
    fn gates_within_window() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));
        assert!(cooldown.try_fire(Duration::from_secs(1)));
        assert!(!cooldown.try_fire(Duration::from_secs(5)));
        // Exactly at the boundary is still inside the window.
        assert!(!cooldown.try_fire(Duration::from_secs(11)));
        assert!(cooldown.try_fire(Duration::from_millis(11_001)));
        assert_eq!(cooldown.last_fired(), Some(Duration::from_millis(11_001)));
    }

    #[test]
    fn clock_regression_does_not_fire() {
        let mut cooldown = Cooldown::new(Duration::from_secs(10));
        assert!(cooldown.try_fire(Duration::from_secs(100)));
        assert!(!cooldown.try_fire(Duration::from_secs(50)));
    }
}
