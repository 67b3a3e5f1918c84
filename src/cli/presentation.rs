//! CLI presentation: text and json formatters per command.

mod generate;
mod materials;
mod regions;

pub use generate::{format_generate_output, NO_REGIONS_MESSAGE};
pub use materials::format_materials_output;
pub use regions::format_regions_output;
