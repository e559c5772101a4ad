mod intake;
mod portion;
mod vegetable;

pub use intake::IntakeTarget;
pub use portion::PortionResult;
pub use vegetable::VegetableEntry;
