//! Materials command presentation: the effective level table.

use crate::cli::parse::MaterialsFormat;
use crate::error::ProcessingError;
use crate::levels::GeneratorTable;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Same shape as the `[generators]` section of a configuration file.
#[derive(Serialize)]
struct GeneratorsSection<'a> {
    generators: &'a GeneratorTable,
}

pub fn format_materials_output(
    table: &GeneratorTable,
    format: MaterialsFormat,
) -> Result<String, ProcessingError> {
    match format {
        MaterialsFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        MaterialsFormat::Toml => Ok(toml::to_string(&GeneratorsSection { generators: table })?),
        MaterialsFormat::Text => {
            let mut rows = Table::new();
            rows.load_preset(UTF8_BORDERS_ONLY);
            rows.set_header(vec!["Material", "Item", "Level", "Delay"]);
            for (material, generator) in table.materials() {
                let item = table.item_material(material);
                for timing in &generator.levels {
                    rows.add_row(vec![
                        material.to_string(),
                        item.clone(),
                        timing.level.to_string(),
                        timing.delay.clone(),
                    ]);
                }
            }
            let title = format!(
                "Generator levels ({} materials, up to level {})",
                table.len(),
                table.max_level()
            );
            Ok(format!("{}\n{}", title.bold().underline(), rows))
        }
    }
}
