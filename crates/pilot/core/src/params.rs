//! Coercion of textual routine arguments into validated values.
//!
//! Routine files carry every argument as text. These helpers perform the
//! type coercion and range checks once, at construction, and name the
//! offending parameter in the error.
use crate::error::ValidationError;

/// Parses a finite real number.
pub fn finite(param: &'static str, value: &str) -> Result<f64, ValidationError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            param,
            value: value.to_string(),
        })?;
    check_finite(param, parsed)
}

/// Parses a finite, non-negative real number.
pub fn non_negative(param: &'static str, value: &str) -> Result<f64, ValidationError> {
    check_non_negative(param, finite(param, value)?)
}

/// Parses a non-negative integer that fits a `u32`.
pub fn count(param: &'static str, value: &str) -> Result<u32, ValidationError> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            param,
            value: value.to_string(),
        })?;
    check_count(param, parsed)
}

pub fn check_finite(param: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { param })
    }
}

pub fn check_non_negative(param: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = check_finite(param, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            param,
            value: value.to_string(),
        });
    }
    Ok(value)
}

pub fn check_positive(param: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = check_finite(param, value)?;
    if value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            param,
            value: value.to_string(),
        });
    }
    Ok(value)
}

pub fn check_count(param: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative {
            param,
            value: value.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        param,
        value: value.to_string(),
    })
}
