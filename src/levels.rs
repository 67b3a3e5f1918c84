//! Generator level table
//!
//! Per-material upgrade tiers: which levels a generator has and how often each level
//! spawns. The table is built once at startup (built-in defaults, optionally overridden
//! by configuration files) and is read-only afterwards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One upgrade tier of a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTiming {
    /// 1-based level number
    pub level: u32,
    /// PGM duration string, e.g. `0.75s`
    pub delay: String,
}

impl LevelTiming {
    pub fn new(level: u32, delay: impl Into<String>) -> Self {
        Self {
            level,
            delay: delay.into(),
        }
    }
}

/// Level list and item override for one material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorLevels {
    /// Item material written into spawners (defaults to the display name of the key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    /// Ordered levels, contiguous from 1
    pub levels: Vec<LevelTiming>,
}

impl GeneratorLevels {
    pub fn new(levels: Vec<LevelTiming>) -> Self {
        Self { item: None, levels }
    }

    /// Whether this material reaches `level`.
    pub fn has_level(&self, level: u32) -> bool {
        level >= 1 && level as usize <= self.levels.len()
    }
}

/// Material name → generator levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorTable {
    generators: BTreeMap<String, GeneratorLevels>,
}

impl GeneratorTable {
    /// Empty table; useful for building custom tables in tests and tools.
    pub fn new() -> Self {
        Self::default()
    }

    /// The timings used by MineLC-style EggWars.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(
            "iron",
            GeneratorLevels::new(vec![
                LevelTiming::new(1, "1s"),
                LevelTiming::new(2, "0.75s"),
                LevelTiming::new(3, "0.5s"),
                LevelTiming::new(4, "0.25s"),
            ]),
        );
        table.insert(
            "gold",
            GeneratorLevels::new(vec![
                LevelTiming::new(1, "5s"),
                LevelTiming::new(2, "3.5s"),
                LevelTiming::new(3, "2s"),
                LevelTiming::new(4, "1s"),
            ]),
        );
        // Diamond stops at level 3.
        table.insert(
            "diamond",
            GeneratorLevels::new(vec![
                LevelTiming::new(1, "10s"),
                LevelTiming::new(2, "5s"),
                LevelTiming::new(3, "2.5s"),
            ]),
        );
        table
    }

    pub fn insert(&mut self, material: impl Into<String>, levels: GeneratorLevels) {
        self.generators.insert(material.into(), levels);
    }

    pub fn get(&self, material: &str) -> Option<&GeneratorLevels> {
        self.generators.get(material)
    }

    pub fn contains(&self, material: &str) -> bool {
        self.generators.contains_key(material)
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Materials in name order.
    pub fn materials(&self) -> impl Iterator<Item = (&str, &GeneratorLevels)> {
        self.generators.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Highest level count across all materials.
    pub fn max_level(&self) -> u32 {
        self.generators
            .values()
            .map(|g| g.levels.len() as u32)
            .max()
            .unwrap_or(0)
    }

    /// Item material name placed in spawners for `material`.
    pub fn item_material(&self, material: &str) -> String {
        if let Some(item) = self.get(material).and_then(|g| g.item.as_ref()) {
            return item.clone();
        }
        default_item_material(material).to_string()
    }

    /// Check every material and level entry. Returns one message per problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (material, generator) in &self.generators {
            if material.is_empty() || material.chars().any(char::is_whitespace) {
                errors.push(format!(
                    "Material '{}': name must be non-empty without whitespace",
                    material
                ));
            }
            if generator.levels.is_empty() {
                errors.push(format!("Material '{}': no levels defined", material));
            }
            for (i, timing) in generator.levels.iter().enumerate() {
                let expected = i as u32 + 1;
                if timing.level != expected {
                    errors.push(format!(
                        "Material '{}': expected level {} at position {}, found {}",
                        material,
                        expected,
                        i + 1,
                        timing.level
                    ));
                }
                if !delay_pattern().is_match(&timing.delay) {
                    errors.push(format!(
                        "Material '{}' level {}: invalid delay '{}' (expected a number with a unit suffix, e.g. 1s)",
                        material, timing.level, timing.delay
                    ));
                }
            }
            if let Some(item) = &generator.item {
                if item.trim().is_empty() {
                    errors.push(format!("Material '{}': item cannot be empty", material));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Display name used in spawner items when no override is configured.
pub fn default_item_material(material: &str) -> &str {
    match material {
        "iron" => "iron ingot",
        "gold" => "gold ingot",
        other => other,
    }
}

fn delay_pattern() -> &'static Regex {
    static DELAY: OnceLock<Regex> = OnceLock::new();
    DELAY.get_or_init(|| Regex::new(r"^\d+(\.\d+)?[a-z]+$").expect("delay pattern is valid"))
}
