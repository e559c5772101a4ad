use thiserror::Error;

/// Input rejected at the calculator boundary.
///
/// Every variant renders a non-empty message suitable for showing to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Potassium content must be a number: {0:?}")]
    InvalidPotassium(String),

    #[error("Potassium content must be greater than zero.")]
    NonPositivePotassium,

    #[error("Please enter the desired potassium intake.")]
    MissingIntake,

    #[error("Desired potassium intake must be a number: {0:?}")]
    InvalidIntake(String),

    #[error("Desired potassium intake must be greater than zero.")]
    NonPositiveIntake,

    #[error("Total potassium exceeds the desired intake.")]
    ExceedsIntake,

    #[error("Total potassium is zero. Add at least one vegetable first.")]
    NoPotassium,

    #[error("Computed portion is too large to represent.")]
    PortionOutOfRange,
}

#[derive(Debug, Error)]
pub enum PotassiumError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PotassiumError>;
