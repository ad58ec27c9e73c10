//! Production-side implementations of the command ports.
//!
//! These are the pieces the capture pipeline, the hotkey listener and the
//! scheduler share with running commands. The input sink here only traces
//! key events. Real input synthesis plugs in through the same
//! [`KeyInput`](pilot_core::KeyInput) port.
mod feed;
mod humanizer;
mod keys;
mod switch;

pub use feed::SharedPosition;
pub use humanizer::StageFright;
pub use keys::TracingKeys;
pub use switch::KillSwitchFlag;
