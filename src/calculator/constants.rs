/// Multiplier applied to the intake/total ratio to get a per-100g portion.
pub const PORTION_BASIS_GRAMS: f64 = 100.0;

/// Decimal places kept in every computed portion.
pub const PORTION_DECIMALS: i32 = 2;

/// Placeholder shown in the name prompt.
pub const EXAMPLE_VEGETABLE: &str = "Spinach";

/// Placeholder shown in the potassium prompt (mg per 100g).
pub const EXAMPLE_POTASSIUM: &str = "558";

/// Placeholder shown in the intake prompt (mg).
pub const EXAMPLE_INTAKE: &str = "3500";
