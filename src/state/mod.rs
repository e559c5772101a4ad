mod manager;

pub use manager::PortionCalculator;
