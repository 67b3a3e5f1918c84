//! Generator region extraction
//!
//! Walks every element of a PGM map document and collects the regions whose `id`
//! follows `team-{team}-generator-{material}-{number}`. Only materials present in the
//! generator table are kept. The result is sorted by team, material and number so
//! the emitted fragments are stable between runs.

use crate::error::ProcessingError;
use crate::levels::GeneratorTable;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// A generator region found in the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Full region identifier, e.g. `team-red-generator-iron-1`
    pub id: String,
    /// Team label (`red`, `one`, ...)
    pub team: String,
    /// Material key into the generator table
    pub material: String,
    /// Generator number, kept as written
    pub index: String,
}

impl Region {
    /// Match `id` against the generator naming grammar.
    ///
    /// Team and material are greedy, so the last `-generator-` separates them.
    pub fn parse(id: &str) -> Option<Self> {
        let caps = id_pattern().captures(id)?;
        Some(Self {
            id: id.to_string(),
            team: caps[1].to_string(),
            material: caps[2].to_string(),
            index: caps[3].to_string(),
        })
    }

    /// Team identifier that owns the level variable.
    pub fn team_id(&self) -> String {
        format!("team-{}", self.team)
    }

    /// Team-scoped variable name shared by every level filter of this generator.
    pub fn variable_name(&self) -> String {
        format!("team_generator_{}_{}", self.material, self.index)
    }

    /// Filter identifier for `level`.
    pub fn filter_id(&self, level: u32) -> String {
        format!("{}-lv{}", self.id, level)
    }
}

fn id_pattern() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| {
        Regex::new(r"^team-(.+)-generator-(.+)-(\d+)$").expect("region id pattern is valid")
    })
}

/// Sort regions by (team, material, number). The number compares as text.
pub fn sort_regions(regions: &mut [Region]) {
    regions.sort_by(|a, b| {
        (&a.team, &a.material, &a.index).cmp(&(&b.team, &b.material, &b.index))
    });
}

/// Read the map at `path` and extract its generator regions.
pub fn extract_regions_from_file(
    path: &Path,
    table: &GeneratorTable,
) -> Result<Vec<Region>, ProcessingError> {
    let xml = std::fs::read_to_string(path)
        .map_err(|e| ProcessingError::from_io(path.to_path_buf(), e))?;
    debug!(path = %path.display(), bytes = xml.len(), "Read map document");
    extract_regions(&xml, table)
}

/// Extract generator regions from a map document.
///
/// The whole document is checked for well-formedness; any structural error aborts
/// the extraction.
pub fn extract_regions(xml: &str, table: &GeneratorTable) -> Result<Vec<Region>, ProcessingError> {
    let ids = collect_ids(xml)?;

    let mut seen = HashSet::new();
    let mut regions = Vec::new();
    for id in ids {
        let Some(region) = Region::parse(&id) else {
            continue;
        };
        if !table.contains(&region.material) {
            debug!(id = %region.id, material = %region.material, "Skipping generator with unconfigured material");
            continue;
        }
        if !seen.insert(region.id.clone()) {
            debug!(id = %region.id, "Skipping repeated region id");
            continue;
        }
        regions.push(region);
    }

    sort_regions(&mut regions);
    info!(regions = regions.len(), "Extracted generator regions");
    Ok(regions)
}

/// Collect every `id` attribute in document order.
fn collect_ids(xml: &str) -> Result<Vec<String>, ProcessingError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut ids = Vec::new();
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                open_element(&e, &mut saw_root, depth, position)?;
                push_id(&e, position, &mut ids)?;
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                open_element(&e, &mut saw_root, depth, position)?;
                push_id(&e, position, &mut ids)?;
            }
            Ok(Event::End(_)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ProcessingError::malformed(position, "unexpected end tag"))?;
            }
            Ok(Event::Text(_)) | Ok(Event::CData(_)) if depth == 0 => {
                return Err(ProcessingError::malformed(
                    position,
                    "text outside the root element",
                ));
            }
            Ok(Event::Text(e)) => {
                e.unescape()
                    .map_err(|e| ProcessingError::malformed(position, e.to_string()))?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ProcessingError::malformed(
                    reader.error_position() as u64,
                    e.to_string(),
                ));
            }
        }
    }

    let end = reader.buffer_position() as u64;
    if !saw_root {
        return Err(ProcessingError::malformed(end, "no root element found"));
    }
    if depth != 0 {
        return Err(ProcessingError::malformed(
            end,
            format!("{} unclosed element(s) at end of document", depth),
        ));
    }

    Ok(ids)
}

fn open_element(
    element: &BytesStart<'_>,
    saw_root: &mut bool,
    depth: usize,
    position: u64,
) -> Result<(), ProcessingError> {
    if !is_name_start(element.name().as_ref().first().copied()) {
        return Err(ProcessingError::malformed(
            position,
            format!(
                "invalid element name '{}'",
                String::from_utf8_lossy(element.name().as_ref())
            ),
        ));
    }
    if depth == 0 {
        if *saw_root {
            return Err(ProcessingError::malformed(
                position,
                "junk after document element",
            ));
        }
        *saw_root = true;
    }
    Ok(())
}

fn push_id(
    element: &BytesStart<'_>,
    position: u64,
    ids: &mut Vec<String>,
) -> Result<(), ProcessingError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| ProcessingError::malformed(position, e.to_string()))?;
        if attr.value.contains(&b'<') {
            return Err(ProcessingError::malformed(
                position,
                format!(
                    "'<' in value of attribute '{}'",
                    String::from_utf8_lossy(attr.key.as_ref())
                ),
            ));
        }
        let value = attr
            .unescape_value()
            .map_err(|e| ProcessingError::malformed(position, e.to_string()))?;
        if attr.key.as_ref() == b"id" {
            ids.push(value.into_owned());
        }
    }
    Ok(())
}

/// XML names start with a letter, `_`, `:` or a non-ASCII character.
fn is_name_start(first: Option<u8>) -> bool {
    matches!(first, Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b':' || b >= 0x80)
}
