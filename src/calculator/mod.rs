pub mod constants;
pub mod parse;
pub mod portions;

pub use constants::*;
pub use parse::{parse_entry, parse_intake, parse_potassium};
pub use portions::{compute_portions, round2, total_potassium};
