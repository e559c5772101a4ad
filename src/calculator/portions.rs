use tracing::debug;

use crate::calculator::constants::{PORTION_BASIS_GRAMS, PORTION_DECIMALS};
use crate::error::ValidationError;
use crate::models::{IntakeTarget, PortionResult, VegetableEntry};

/// Sum of potassium-per-100g across all entries.
pub fn total_potassium(entries: &[VegetableEntry]) -> f64 {
    entries.iter().map(|e| e.potassium_per_100g()).sum()
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    let factor = 10_f64.powi(PORTION_DECIMALS);
    (value * factor).round() / factor
}

/// Compute a portion for every entry, in input order.
///
/// The total is the plain sum of per-100g values and is compared directly
/// against the intake. Every entry receives the same portion,
/// `intake / total * 100`, rounded to two decimals.
///
/// Fails with [`ValidationError::NoPotassium`] when the total is zero and with
/// [`ValidationError::PortionOutOfRange`] when the portion overflows `f64`.
pub fn compute_portions(
    entries: &[VegetableEntry],
    intake: Option<IntakeTarget>,
) -> Result<Vec<PortionResult>, ValidationError> {
    let total = total_potassium(entries);

    let intake = intake.ok_or(ValidationError::MissingIntake)?.milligrams();

    if total > intake {
        return Err(ValidationError::ExceedsIntake);
    }

    if total == 0.0 {
        return Err(ValidationError::NoPotassium);
    }

    let portion = round2(intake / total * PORTION_BASIS_GRAMS);
    if !portion.is_finite() {
        return Err(ValidationError::PortionOutOfRange);
    }

    debug!(total, intake, portion, count = entries.len(), "computed portions");

    Ok(entries
        .iter()
        .map(|e| PortionResult::new(e.name().to_string(), portion))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, potassium: f64) -> VegetableEntry {
        VegetableEntry::new(name, potassium).unwrap()
    }

    fn intake(mg: f64) -> Option<IntakeTarget> {
        Some(IntakeTarget::new(mg).unwrap())
    }

    #[test]
    fn test_total_potassium() {
        let entries = vec![entry("Spinach", 558.0), entry("Kale", 320.0)];
        assert!((total_potassium(&entries) - 878.0).abs() < 1e-9);
        assert_eq!(total_potassium(&[]), 0.0);
    }

    #[test]
    fn test_round2() {
        assert!((round2(398.633_257) - 398.63).abs() < 1e-9);
        assert!((round2(1.005_1) - 1.01).abs() < 1e-9);
        assert!((round2(2.344) - 2.34).abs() < 1e-9);
        assert!((round2(0.125) - 0.13).abs() < 1e-9);
    }

    #[test]
    fn test_total_equal_to_intake_is_allowed() {
        let entries = vec![entry("Potato", 425.0)];
        let portions = compute_portions(&entries, intake(425.0)).unwrap();
        assert_eq!(portions.len(), 1);
        assert!((portions[0].portion_grams - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_intake_checked_before_exceeds() {
        let entries = vec![entry("Potato", 9000.0)];
        assert_eq!(
            compute_portions(&entries, None),
            Err(ValidationError::MissingIntake)
        );
    }

    #[test]
    fn test_overflowing_portion_is_rejected() {
        let entries = vec![entry("Dust", 1e-300)];
        assert_eq!(
            compute_portions(&entries, intake(1e10)),
            Err(ValidationError::PortionOutOfRange)
        );

        let entries = vec![entry("Kale", 1.0)];
        assert_eq!(
            compute_portions(&entries, intake(1e306)),
            Err(ValidationError::PortionOutOfRange)
        );
    }

    #[test]
    fn test_empty_entries_is_no_potassium() {
        assert_eq!(
            compute_portions(&[], intake(3500.0)),
            Err(ValidationError::NoPotassium)
        );
    }
}
