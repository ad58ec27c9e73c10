use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide run flag. Commands stop acting as soon as it reads false.
pub trait KillSwitch: Send + Sync {
    fn is_enabled(&self) -> bool;
}

impl KillSwitch for AtomicBool {
    fn is_enabled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
