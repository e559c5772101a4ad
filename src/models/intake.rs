use crate::error::ValidationError;

/// Desired total potassium intake in milligrams. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeTarget(f64);

impl IntakeTarget {
    pub fn new(milligrams: f64) -> Result<Self, ValidationError> {
        if !milligrams.is_finite() {
            return Err(ValidationError::InvalidIntake(milligrams.to_string()));
        }

        if milligrams <= 0.0 {
            return Err(ValidationError::NonPositiveIntake);
        }

        Ok(Self(milligrams))
    }

    #[inline]
    pub fn milligrams(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for IntakeTarget {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
