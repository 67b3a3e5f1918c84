//! CLI domain: parse, route, help, output, and presentation only.
//! The transform itself lives in the synthesizer; routes stay thin.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, GenerateFormat, MaterialsFormat};
pub use presentation::{
    format_generate_output, format_materials_output, format_regions_output, NO_REGIONS_MESSAGE,
};
pub use route::{clean_prompted_path, RunContext};
