//! Regions command presentation.

use crate::cli::parse::GenerateFormat;
use crate::error::ProcessingError;
use crate::levels::GeneratorTable;
use crate::region::Region;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

use super::generate::NO_REGIONS_MESSAGE;

pub fn format_regions_output(
    regions: &[Region],
    table: &GeneratorTable,
    format: GenerateFormat,
) -> Result<String, ProcessingError> {
    match format {
        GenerateFormat::Json => Ok(serde_json::to_string_pretty(regions)?),
        GenerateFormat::Text => {
            if regions.is_empty() {
                return Ok(NO_REGIONS_MESSAGE.to_string());
            }
            let mut rows = Table::new();
            rows.load_preset(UTF8_BORDERS_ONLY);
            rows.set_header(vec!["Region", "Team", "Material", "Number", "Levels"]);
            for r in regions {
                let levels = table
                    .get(&r.material)
                    .map(|g| g.levels.len())
                    .unwrap_or(0);
                rows.add_row(vec![
                    r.id.clone(),
                    r.team_id(),
                    r.material.clone(),
                    r.index.clone(),
                    levels.to_string(),
                ]);
            }
            let title = format!("Generator regions ({})", regions.len());
            Ok(format!("{}\n{}", title.bold().underline(), rows))
        }
    }
}
