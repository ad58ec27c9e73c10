//! Name-to-constructor registry for routine commands.
use std::fmt;

use pilot_core::{Command, Settings, ValidationError};

use crate::args::Args;

/// Builds one command from its routine arguments.
pub type Builder = fn(&Args, &Settings) -> Result<Box<dyn Command>, ValidationError>;

struct Entry {
    name: &'static str,
    builder: Builder,
}

/// Registry of the commands a routine may use.
///
/// Lookups ignore ASCII case, so `move` and `Move` build the same command.
pub struct CommandBook {
    name: &'static str,
    settings: Settings,
    entries: Vec<Entry>,
}

impl CommandBook {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            settings: Settings::default(),
            entries: Vec::new(),
        }
    }

    /// Settings handed to every builder.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Adds `builder` under `name`, replacing any earlier entry of that name.
    #[must_use]
    pub fn register(mut self, name: &'static str, builder: Builder) -> Self {
        match self.entry(name) {
            Some(index) => self.entries[index].builder = builder,
            None => self.entries.push(Entry { name, builder }),
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Builds the command registered as `name`.
    pub fn build(&self, name: &str, args: &Args) -> Result<Box<dyn Command>, ValidationError> {
        let index = self
            .entry(name)
            .ok_or_else(|| ValidationError::UnknownCommand {
                name: name.trim().to_string(),
            })?;
        (self.entries[index].builder)(args, &self.settings)
    }

    /// Builds a command from a routine line such as `Move, x=0.5, y=0.2`.
    ///
    /// The first comma-separated field names the command; the rest are its
    /// arguments.
    pub fn parse_line(&self, line: &str) -> Result<Box<dyn Command>, ValidationError> {
        let mut fields = line.split(',');
        let name = fields.next().unwrap_or_default();
        let args = Args::parse(&fields.collect::<Vec<_>>());
        let command = self.build(name, &args)?;
        tracing::debug!(book = self.name, command = %command.info().label(), "parsed routine line");
        Ok(command)
    }

    fn entry(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.entries
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for CommandBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBook")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("commands", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
