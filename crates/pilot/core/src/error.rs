//! Construction-time validation errors.
//!
//! Commands validate every parameter eagerly. A command that fails validation
//! is never built, so nothing in the execution path has to re-check its
//! inputs. Convergence shortfalls and kill-switch interruptions are normal
//! outcomes and have no error type.

/// Severity level of an error, used for categorization by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A single argument is out of contract. Fix the routine line and retry.
    Validation,

    /// The routine refers to something this command book does not know.
    Unsupported,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Errors raised while building a command from its parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    #[error("'{value}' is not a valid direction (expected up, down, left or right)")]
    InvalidDirection { value: String },

    #[error("'{value}' is not a horizontal direction (expected left or right)")]
    NotHorizontal { value: String },

    #[error("'{value}' is not a known key")]
    InvalidKey { value: String },

    #[error("{param} must be an integer, got '{value}'")]
    NotAnInteger { param: &'static str, value: String },

    #[error("{param} must be a number, got '{value}'")]
    NotANumber { param: &'static str, value: String },

    #[error("{param} must be non-negative, got {value}")]
    Negative { param: &'static str, value: String },

    #[error("{param} must be finite")]
    NonFinite { param: &'static str },

    #[error("{param} is out of range, got {value}")]
    OutOfRange { param: &'static str, value: String },

    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("{command} is missing required argument '{param}'")]
    MissingArgument {
        command: &'static str,
        param: &'static str,
    },

    #[error("{command} got an unexpected argument '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("{command} takes at most {expected} arguments, got {found}")]
    TooManyArguments {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCommand { .. } => ErrorSeverity::Unsupported,
            _ => ErrorSeverity::Validation,
        }
    }

    /// Stable identifier for logs and display surfaces.
    pub fn error_code(&self) -> &'static str {
        use ValidationError::*;
        match self {
            InvalidDirection { .. } => "VALIDATION_INVALID_DIRECTION",
            NotHorizontal { .. } => "VALIDATION_NOT_HORIZONTAL",
            InvalidKey { .. } => "VALIDATION_INVALID_KEY",
            NotAnInteger { .. } => "VALIDATION_NOT_AN_INTEGER",
            NotANumber { .. } => "VALIDATION_NOT_A_NUMBER",
            Negative { .. } => "VALIDATION_NEGATIVE",
            NonFinite { .. } => "VALIDATION_NON_FINITE",
            OutOfRange { .. } => "VALIDATION_OUT_OF_RANGE",
            UnknownCommand { .. } => "BOOK_UNKNOWN_COMMAND",
            MissingArgument { .. } => "BOOK_MISSING_ARGUMENT",
            UnexpectedArgument { .. } => "BOOK_UNEXPECTED_ARGUMENT",
            TooManyArguments { .. } => "BOOK_TOO_MANY_ARGUMENTS",
        }
    }
}
