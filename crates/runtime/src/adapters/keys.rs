use std::sync::Arc;

use pilot_core::{Clock, Key, KeyInput, PressTiming};

/// Input sink that logs every key event instead of sending it.
///
/// Presses still take their full down and up time, so commands run with the
/// same timing they would have against a real device.
pub struct TracingKeys {
    clock: Arc<dyn Clock>,
}

impl TracingKeys {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl KeyInput for TracingKeys {
    fn press(&self, key: Key, repetitions: u32, timing: PressTiming) {
        for _ in 0..repetitions {
            tracing::trace!(%key, "key down");
            self.clock.sleep(timing.down);
            tracing::trace!(%key, "key up");
            self.clock.sleep(timing.up);
        }
    }

    fn key_down(&self, key: Key) {
        tracing::trace!(%key, "key held");
    }

    fn key_up(&self, key: Key) {
        tracing::trace!(%key, "key released");
    }
}
