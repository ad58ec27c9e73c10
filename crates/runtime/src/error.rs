//! Errors raised while assembling a pilot.

/// Configuration and wiring errors.
///
/// Commands themselves never fail at run time, so everything here happens
/// before the first command executes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}='{value}' is invalid: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("pilot has no {component} configured")]
    MissingComponent { component: &'static str },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason,
        }
    }

    /// Stable identifier for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            Self::MissingComponent { .. } => "CONFIG_MISSING_COMPONENT",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
