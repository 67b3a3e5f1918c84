//! Generator config synthesizer: region extraction, level lookup and fragment
//! emission as one pure transform over a map document.

use crate::error::ProcessingError;
use crate::fragment::{synthesize, Fragments};
use crate::levels::GeneratorTable;
use crate::region::{extract_regions, extract_regions_from_file, Region};
use std::path::Path;
use tracing::info;

/// Regions found in a map and the fragments generated for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub regions: Vec<Region>,
    pub fragments: Fragments,
}

impl Synthesis {
    /// No generator region matched.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Runs the three phases against a fixed generator table.
#[derive(Debug, Clone)]
pub struct GeneratorConfigSynthesizer {
    table: GeneratorTable,
}

impl GeneratorConfigSynthesizer {
    pub fn new(table: GeneratorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &GeneratorTable {
        &self.table
    }

    /// Extract and sort the generator regions of a map document.
    pub fn regions(&self, xml: &str) -> Result<Vec<Region>, ProcessingError> {
        extract_regions(xml, &self.table)
    }

    /// Extract regions from the map file at `path`.
    pub fn regions_from_file(&self, path: &Path) -> Result<Vec<Region>, ProcessingError> {
        extract_regions_from_file(path, &self.table)
    }

    /// Full transform of a map document.
    pub fn synthesize_str(&self, xml: &str) -> Result<Synthesis, ProcessingError> {
        let regions = self.regions(xml)?;
        Ok(self.finish(regions))
    }

    /// Full transform of the map file at `path`.
    pub fn synthesize_file(&self, path: &Path) -> Result<Synthesis, ProcessingError> {
        let regions = self.regions_from_file(path)?;
        info!(path = %path.display(), "Synthesizing generator fragments");
        Ok(self.finish(regions))
    }

    fn finish(&self, regions: Vec<Region>) -> Synthesis {
        let fragments = if regions.is_empty() {
            Fragments::default()
        } else {
            synthesize(&regions, &self.table)
        };
        Synthesis { regions, fragments }
    }
}
