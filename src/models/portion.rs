use std::fmt;

use serde::Serialize;

/// Computed serving size for one vegetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionResult {
    /// Name of the vegetable this portion belongs to.
    pub name: String,

    /// Portion indicator, already rounded to two decimals.
    pub portion_grams: f64,
}

impl PortionResult {
    pub fn new(name: String, portion_grams: f64) -> Self {
        Self {
            name,
            portion_grams,
        }
    }
}

impl fmt::Display for PortionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}g", self.name, self.portion_grams)
    }
}
