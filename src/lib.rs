pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use calculator::compute_portions;
pub use error::{PotassiumError, Result, ValidationError};
pub use models::{IntakeTarget, PortionResult, VegetableEntry};
pub use state::PortionCalculator;
