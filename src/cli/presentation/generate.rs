//! Generate command presentation: pasteable XML or JSON.

use crate::cli::parse::GenerateFormat;
use crate::error::ProcessingError;
use crate::fragment::render_xml;
use crate::synthesizer::Synthesis;
use serde_json::json;

/// Printed instead of fragments when the map has no generator regions.
pub const NO_REGIONS_MESSAGE: &str =
    "No regions matching 'team-*-generator-*-*' were found in the map.";

pub fn format_generate_output(
    synthesis: &Synthesis,
    format: GenerateFormat,
) -> Result<String, ProcessingError> {
    match format {
        GenerateFormat::Text => {
            if synthesis.is_empty() {
                Ok(NO_REGIONS_MESSAGE.to_string())
            } else {
                Ok(render_xml(&synthesis.fragments))
            }
        }
        GenerateFormat::Json => {
            let variables: Vec<_> = synthesis.fragments.variables().collect();
            let out = json!({
                "regions": synthesis.regions.len(),
                "variables": variables,
                "spawners": synthesis.fragments.spawners,
            });
            Ok(serde_json::to_string_pretty(&out)?)
        }
    }
}
