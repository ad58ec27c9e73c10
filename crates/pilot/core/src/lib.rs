//! Command contract, value types and collaborator ports for the hero pilot.
//!
//! `pilot-core` defines what a command is ([`Command`], [`CommandInfo`]), the
//! values commands are built from ([`Point`], [`Direction`], [`Key`]) and the
//! ports through which a running command observes and drives the game
//! ([`Env`]). Concrete command books and runtime adapters depend on the types
//! re-exported here.
pub mod command;
pub mod config;
pub mod cooldown;
pub mod env;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;

pub use command::{Command, CommandInfo};
pub use config::Settings;
pub use cooldown::Cooldown;
pub use env::{
    Calm, Clock, DirectPath, Env, Humanizer, KillSwitch, ManualClock, PathPlanner, PositionFeed,
    SystemClock,
};
pub use error::{ErrorSeverity, ValidationError};
pub use geometry::Point;
pub use input::{Direction, HeldKey, HorizontalDirection, Key, KeyEvent, KeyInput, PressTiming};
