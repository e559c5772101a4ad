use dialoguer::{Confirm, Input};

use crate::calculator::{EXAMPLE_INTAKE, EXAMPLE_POTASSIUM, EXAMPLE_VEGETABLE};
use crate::error::Result;

/// Raw text collected for one vegetable, not yet validated.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub name: String,
    pub potassium: String,
}

/// Prompt for a vegetable. Returns `None` when the name is left empty.
pub fn prompt_entry() -> Result<Option<RawEntry>> {
    let name: String = Input::new()
        .with_prompt(format!(
            "Vegetable name (e.g., {}; press Enter to finish)",
            EXAMPLE_VEGETABLE
        ))
        .allow_empty(true)
        .interact_text()?;

    if name.trim().is_empty() {
        return Ok(None);
    }

    let potassium: String = Input::new()
        .with_prompt(format!(
            "Potassium content per 100g (e.g., {})",
            EXAMPLE_POTASSIUM
        ))
        .allow_empty(true)
        .interact_text()?;

    Ok(Some(RawEntry { name, potassium }))
}

/// Prompt for the desired intake as raw text.
pub fn prompt_intake() -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Desired potassium intake in mg (e.g., {})",
            EXAMPLE_INTAKE
        ))
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
