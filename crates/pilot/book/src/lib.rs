//! Command books: named, validated commands a routine can be built from.
//!
//! A [`CommandBook`] maps command names to constructors that coerce textual
//! routine arguments into validated commands. The [`hero`] module provides
//! the book for the Hero class: closed-loop movement (`Move`, `Adjust`,
//! `Jump`), directional attacks and cooldown-gated skills.
//!
//! # Architecture
//!
//! - [`book`]: registry and routine-line parsing
//! - [`args`]: binding of positional and keyword arguments to parameters
//! - [`hero`]: the Hero commands themselves
pub mod args;
pub mod book;
pub mod hero;

#[cfg(test)]
pub(crate) mod testing;

pub use args::Args;
pub use book::{Builder, CommandBook};
