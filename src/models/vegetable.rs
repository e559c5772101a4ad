use crate::error::ValidationError;

/// A vegetable and its potassium content, as entered by the user.
///
/// Fields are private so every entry in circulation has a non-empty name and
/// a finite, positive potassium value.
#[derive(Debug, Clone, PartialEq)]
pub struct VegetableEntry {
    name: String,
    potassium_per_100g: f64,
}

impl VegetableEntry {
    /// Build an entry from an already-numeric potassium value.
    ///
    /// The name is trimmed before the emptiness check.
    pub fn new(name: &str, potassium_per_100g: f64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if !potassium_per_100g.is_finite() {
            return Err(ValidationError::InvalidPotassium(
                potassium_per_100g.to_string(),
            ));
        }

        if potassium_per_100g <= 0.0 {
            return Err(ValidationError::NonPositivePotassium);
        }

        Ok(Self {
            name: name.to_string(),
            potassium_per_100g,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Milligrams of potassium per 100g.
    #[inline]
    pub fn potassium_per_100g(&self) -> f64 {
        self.potassium_per_100g
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{}: {} mg/100g", self.name, self.potassium_per_100g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let entry = VegetableEntry::new("  Spinach ", 558.0).unwrap();
        assert_eq!(entry.name(), "Spinach");
        assert_eq!(entry.potassium_per_100g(), 558.0);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(
            VegetableEntry::new("   ", 558.0),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            VegetableEntry::new("Kale", 0.0),
            Err(ValidationError::NonPositivePotassium)
        );
        assert_eq!(
            VegetableEntry::new("Kale", -12.5),
            Err(ValidationError::NonPositivePotassium)
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(
            VegetableEntry::new("Kale", f64::NAN),
            Err(ValidationError::InvalidPotassium(_))
        ));
        assert!(matches!(
            VegetableEntry::new("Kale", f64::INFINITY),
            Err(ValidationError::InvalidPotassium(_))
        ));
    }
}
