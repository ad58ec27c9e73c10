//! The command contract.
//!
//! A command is built once, usually while a routine is parsed, and executed
//! any number of times by an external scheduler. Construction validates every
//! parameter; execution never fails, it simply does as much as the step
//! budget, cooldowns and kill-switch allow.
use std::fmt;

use crate::env::Env;

/// A named, validated unit of behavior with a single entry point.
pub trait Command: Send {
    /// Runs the behavior once, synchronously.
    ///
    /// Returns when the behavior converges, its budget runs out, or the
    /// kill-switch is cleared. No key is left held on return.
    fn execute(&mut self, env: &Env<'_>);

    /// Name and parameters for display.
    fn info(&self) -> CommandInfo;

    fn name(&self) -> &'static str {
        self.info().name
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    #[inline]
    fn execute(&mut self, env: &Env<'_>) {
        (**self).execute(env)
    }

    #[inline]
    fn info(&self) -> CommandInfo {
        (**self).info()
    }
}

/// Command name plus its parameters in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommandInfo {
    pub name: &'static str,
    pub vars: Vec<(&'static str, String)>,
}

impl CommandInfo {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            vars: Vec::new(),
        }
    }

    #[must_use]
    pub fn var(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.vars.push((key, value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// One-line label for a routine list, e.g. `Move(x=0.5, y=0.25, max_steps=15)`.
    pub fn label(&self) -> String {
        let args = self
            .vars
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({args})", self.name)
    }
}

/// Details panel layout: the name, then one `key: value` line per parameter.
impl fmt::Display for CommandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (key, value) in &self.vars {
            write!(f, "\n{key}: {value}")?;
        }
        Ok(())
    }
}
