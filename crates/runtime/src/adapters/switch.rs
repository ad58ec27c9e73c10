use std::sync::atomic::{AtomicBool, Ordering};

use pilot_core::KillSwitch;

/// Run flag toggled by a hotkey or signal handler.
#[derive(Debug)]
pub struct KillSwitchFlag {
    enabled: AtomicBool,
}

impl KillSwitchFlag {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    /// Asks every running command to stop at its next check.
    pub fn disable(&self) {
        tracing::info!("kill switch cleared");
        self.enabled.store(false, Ordering::SeqCst);
    }

    /// Flips the flag, returning the new state.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::SeqCst)
    }
}

impl Default for KillSwitchFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl KillSwitch for KillSwitchFlag {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}
