//! Integration tests for extraction and emission over a full map file

use super::test_utils::{fixture, write_map};
use eggwars_spawners::fragment::render_xml;
use eggwars_spawners::{GeneratorConfigSynthesizer, GeneratorTable, ProcessingError};
use std::collections::HashSet;
use tempfile::TempDir;

fn synthesizer() -> GeneratorConfigSynthesizer {
    GeneratorConfigSynthesizer::new(GeneratorTable::builtin())
}

#[test]
fn test_fixture_regions_sorted_by_team_material_number() {
    let regions = synthesizer()
        .regions_from_file(&fixture("tiki_map.xml"))
        .unwrap();

    let ids: Vec<_> = regions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "team-blue-generator-diamond-1",
            "team-blue-generator-gold-1",
            "team-blue-generator-iron-1",
            "team-red-generator-diamond-1",
            "team-red-generator-gold-1",
            "team-red-generator-iron-1",
        ]
    );
}

#[test]
fn test_fixture_emission_counts() {
    let synthesis = synthesizer()
        .synthesize_file(&fixture("tiki_map.xml"))
        .unwrap();

    let levels: Vec<_> = synthesis
        .fragments
        .levels
        .iter()
        .map(|g| (g.level, g.variables.len()))
        .collect();
    assert_eq!(levels, vec![(0, 6), (1, 6), (2, 6), (3, 6), (4, 4)]);
    assert_eq!(synthesis.fragments.spawners.len(), 4 * 2 + 4 * 2 + 3 * 2);
}

#[test]
fn test_every_region_gets_levels_plus_one_variables() {
    let table = GeneratorTable::builtin();
    let synthesis = synthesizer()
        .synthesize_file(&fixture("tiki_map.xml"))
        .unwrap();

    for region in &synthesis.regions {
        let configured = table.get(&region.material).unwrap().levels.len();
        let values: Vec<u32> = synthesis
            .fragments
            .variables()
            .filter(|v| v.id.starts_with(&format!("{}-lv", region.id)))
            .map(|v| v.value)
            .collect();
        let expected: Vec<u32> = (0..=configured as u32).collect();
        assert_eq!(values, expected, "variables for {}", region.id);

        let spawners = synthesis
            .fragments
            .spawners
            .iter()
            .filter(|s| s.spawn_region == region.id)
            .count();
        assert_eq!(spawners, configured, "spawners for {}", region.id);
    }
}

#[test]
fn test_spawner_filters_match_variable_ids() {
    let synthesis = synthesizer()
        .synthesize_file(&fixture("tiki_map.xml"))
        .unwrap();
    let variable_ids: HashSet<_> = synthesis.fragments.variables().map(|v| v.id.clone()).collect();
    for spawner in &synthesis.fragments.spawners {
        assert!(variable_ids.contains(&spawner.filter), "{}", spawner.filter);
        assert!(!spawner.filter.ends_with("-lv0"));
    }
}

#[test]
fn test_rendered_xml_is_stable_across_runs() {
    let first = render_xml(
        &synthesizer()
            .synthesize_file(&fixture("tiki_map.xml"))
            .unwrap()
            .fragments,
    );
    let second = render_xml(
        &synthesizer()
            .synthesize_file(&fixture("tiki_map.xml"))
            .unwrap()
            .fragments,
    );
    assert_eq!(first, second);

    let variables_at = first.find("<variable ").unwrap();
    let spawners_at = first.find("<spawner ").unwrap();
    assert!(variables_at < spawners_at);
    assert!(!first.contains("emerald"));
}

#[test]
fn test_document_order_does_not_change_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_map(
        &temp_dir,
        "a.xml",
        r#"<map>
            <cuboid id="team-red-generator-iron-1"/>
            <cuboid id="team-blue-generator-gold-1"/>
        </map>"#,
    );
    let b = write_map(
        &temp_dir,
        "b.xml",
        r#"<map>
            <cuboid id="team-blue-generator-gold-1"/>
            <cuboid id="team-red-generator-iron-1"/>
        </map>"#,
    );

    let s = synthesizer();
    assert_eq!(
        s.synthesize_file(&a).unwrap().fragments,
        s.synthesize_file(&b).unwrap().fragments
    );
}

#[test]
fn test_malformed_map_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_map(
        &temp_dir,
        "broken.xml",
        r#"<map><regions><cuboid id="team-red-generator-iron-1"/></map>"#,
    );
    let err = synthesizer().synthesize_file(&path).unwrap_err();
    assert!(matches!(err, ProcessingError::MalformedDocument { .. }));
}
