//! Boundary parsing for raw text coming from the shell.
//!
//! Input is trimmed and parsed with `str::parse::<f64>`. Non-finite values
//! (`NaN`, `inf`) are rejected here so they never reach the calculator.

use crate::error::ValidationError;
use crate::models::{IntakeTarget, VegetableEntry};

/// Parse a potassium-per-100g value. Range is checked by [`VegetableEntry::new`].
pub fn parse_potassium(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidPotassium(raw.to_string())),
    }
}

/// Parse a name and potassium pair into a validated entry.
///
/// A missing name is reported before a bad number, matching the order the
/// form checks its fields.
pub fn parse_entry(name: &str, potassium: &str) -> Result<VegetableEntry, ValidationError> {
    if name.trim().is_empty() || potassium.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let value = parse_potassium(potassium)?;
    VegetableEntry::new(name, value)
}

/// Parse the desired intake in milligrams.
pub fn parse_intake(raw: &str) -> Result<IntakeTarget, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingIntake);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => IntakeTarget::new(value),
        _ => Err(ValidationError::InvalidIntake(raw.to_string())),
    }
}
