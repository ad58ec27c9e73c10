//! Runtime wiring for hero pilot commands.
//!
//! This crate supplies concrete implementations of the ports declared in
//! `pilot-core`, a simulated character to run commands against, and the
//! [`Pilot`] that lends those adapters to one command at a time.
//!
//! Modules are organized by responsibility:
//! - [`adapters`] holds the shared position cell, kill-switch flag,
//!   stage-fright humanizer and a tracing key sink
//! - [`sim`] models a character that moves in response to key input
//! - [`config`] loads [`PilotConfig`] from the environment
//! - [`pilot`] assembles adapters and runs commands
pub mod adapters;
pub mod config;
pub mod error;
pub mod pilot;
pub mod sim;

pub use adapters::{KillSwitchFlag, SharedPosition, StageFright, TracingKeys};
pub use config::PilotConfig;
pub use error::{ConfigError, Result};
pub use pilot::{Pilot, PilotBuilder, RunReport};
pub use sim::{Physics, SimulatedCharacter};
