//! Fragment emission
//!
//! Turns sorted generator regions into the two blocks a map author pastes into
//! `map.xml`: level variables for `<filters>` and timed spawners for `<spawners>`.

use crate::levels::GeneratorTable;
use crate::region::Region;
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Item quantity produced by every spawn.
pub const ITEM_AMOUNT: u32 = 1;

/// A team-scoped level variable used as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedVariable {
    /// Filter identifier, `{region-id}-lv{level}`
    pub id: String,
    /// Internal variable name, shared by all levels of a generator
    pub var: String,
    /// Owning team identifier
    pub team: String,
    pub value: u32,
}

/// A timed spawn rule gated by a level filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedSpawner {
    pub spawn_region: String,
    pub delay: String,
    pub filter: String,
    pub item_material: String,
    pub item_amount: u32,
}

/// Variables grouped by level, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGroup {
    pub level: u32,
    pub variables: Vec<EmittedVariable>,
}

/// Everything emitted for one map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragments {
    pub levels: Vec<LevelGroup>,
    pub spawners: Vec<EmittedSpawner>,
}

impl Fragments {
    /// All variables in emission order.
    pub fn variables(&self) -> impl Iterator<Item = &EmittedVariable> {
        self.levels.iter().flat_map(|g| g.variables.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.spawners.is_empty() && self.variables().next().is_none()
    }
}

fn variable(region: &Region, level: u32) -> EmittedVariable {
    EmittedVariable {
        id: region.filter_id(level),
        var: region.variable_name(),
        team: region.team_id(),
        value: level,
    }
}

/// Variable pass, grouped by level: every region at level 0, then each level up to the
/// table maximum for the regions whose material reaches it.
pub fn build_level_groups(regions: &[Region], table: &GeneratorTable) -> Vec<LevelGroup> {
    let mut groups = Vec::new();
    groups.push(LevelGroup {
        level: 0,
        variables: regions.iter().map(|r| variable(r, 0)).collect(),
    });

    for level in 1..=table.max_level() {
        let variables = regions
            .iter()
            .filter(|r| {
                table
                    .get(&r.material)
                    .map(|g| g.has_level(level))
                    .unwrap_or(false)
            })
            .map(|r| variable(r, level))
            .collect();
        groups.push(LevelGroup { level, variables });
    }

    groups
}

/// Variable pass, flattened.
pub fn build_variables(regions: &[Region], table: &GeneratorTable) -> Vec<EmittedVariable> {
    build_level_groups(regions, table)
        .into_iter()
        .flat_map(|g| g.variables)
        .collect()
}

/// Spawner pass: one spawner per configured level of each region.
pub fn build_spawners(regions: &[Region], table: &GeneratorTable) -> Vec<EmittedSpawner> {
    let mut spawners = Vec::new();
    for region in regions {
        let Some(generator) = table.get(&region.material) else {
            continue;
        };
        let item_material = table.item_material(&region.material);
        for timing in &generator.levels {
            spawners.push(EmittedSpawner {
                spawn_region: region.id.clone(),
                delay: timing.delay.clone(),
                filter: region.filter_id(timing.level),
                item_material: item_material.clone(),
                item_amount: ITEM_AMOUNT,
            });
        }
    }
    spawners
}

/// Run both passes.
pub fn synthesize(regions: &[Region], table: &GeneratorTable) -> Fragments {
    let fragments = Fragments {
        levels: build_level_groups(regions, table),
        spawners: build_spawners(regions, table),
    };
    debug!(
        regions = regions.len(),
        variables = fragments.variables().count(),
        spawners = fragments.spawners.len(),
        "Synthesized fragments"
    );
    fragments
}

/// Render fragments as the XML text pasted into the map.
pub fn render_xml(fragments: &Fragments) -> String {
    let mut out = String::new();

    out.push_str("<!-- Generator level variables: paste inside <filters> -->\n");
    for group in fragments.levels.iter().filter(|g| !g.variables.is_empty()) {
        out.push_str(&format!("\n\t<!-- Level {} -->\n", group.level));
        for v in &group.variables {
            out.push_str(&format!(
                "\t<variable id=\"{}\" var=\"{}\" team=\"{}\">{}</variable>\n",
                escape(v.id.as_str()),
                escape(v.var.as_str()),
                escape(v.team.as_str()),
                v.value
            ));
        }
    }

    out.push_str("\n<!-- Generator spawners: paste inside <spawners> -->\n\n");
    for s in &fragments.spawners {
        out.push_str(&format!(
            "\t<spawner spawn-region=\"{}\" delay=\"{}\" filter=\"{}\">\n",
            escape(s.spawn_region.as_str()),
            escape(s.delay.as_str()),
            escape(s.filter.as_str())
        ));
        out.push_str(&format!(
            "\t    <item amount=\"{}\" material=\"{}\"/>\n",
            s.item_amount,
            escape(s.item_material.as_str())
        ));
        out.push_str("\t</spawner>\n");
    }

    out
}
