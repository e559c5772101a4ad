use tracing::debug;

use crate::calculator::{self, parse_entry, parse_intake};
use crate::error::ValidationError;
use crate::models::{IntakeTarget, PortionResult, VegetableEntry};

/// Owns the vegetable list and the desired intake.
///
/// The two pieces of state are independent: adding entries never touches the
/// intake and vice versa. Results are recomputed on every call to
/// [`PortionCalculator::calculate`] and never stored.
#[derive(Debug, Clone, Default)]
pub struct PortionCalculator {
    /// Entries in the order they were added.
    entries: Vec<VegetableEntry>,
    intake: Option<IntakeTarget>,
}

impl PortionCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an entry. The list is unchanged on error.
    pub fn add_entry(
        &mut self,
        name: &str,
        potassium_per_100g: &str,
    ) -> Result<&VegetableEntry, ValidationError> {
        let entry = parse_entry(name, potassium_per_100g).inspect_err(|e| {
            debug!(name, potassium_per_100g, error = %e, "rejected vegetable entry");
        })?;

        Ok(self.append(entry))
    }

    fn append(&mut self, entry: VegetableEntry) -> &VegetableEntry {
        debug!("added {}", entry.debug_string());
        let index = self.entries.len();
        self.entries.push(entry);
        &self.entries[index]
    }

    /// Parse and store the desired intake.
    ///
    /// Blank input clears the stored target. Other failures keep the previous
    /// target.
    pub fn set_intake(&mut self, raw: &str) -> Result<IntakeTarget, ValidationError> {
        match parse_intake(raw) {
            Ok(target) => {
                self.intake = Some(target);
                Ok(target)
            }
            Err(e) => {
                if e == ValidationError::MissingIntake {
                    self.intake = None;
                }
                debug!(raw, error = %e, "rejected intake");
                Err(e)
            }
        }
    }

    /// Compute portions from the current state.
    pub fn calculate(&self) -> Result<Vec<PortionResult>, ValidationError> {
        calculator::compute_portions(&self.entries, self.intake)
    }

    pub fn entries(&self) -> &[VegetableEntry] {
        &self.entries
    }

    pub fn intake(&self) -> Option<IntakeTarget> {
        self.intake
    }

    /// Sum of potassium-per-100g across the current entries.
    pub fn total_potassium(&self) -> f64 {
        calculator::total_potassium(&self.entries)
    }

    /// Count of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
