pub mod prompts;
pub mod render;

pub use prompts::{RawEntry, prompt_entry, prompt_intake, prompt_yes_no};
pub use render::{display_entries, display_error, display_results, format_results, results_json};
