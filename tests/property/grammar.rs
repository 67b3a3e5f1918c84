//! Property-based tests for the region identifier grammar

use eggwars_spawners::{GeneratorTable, Region};
use eggwars_spawners::region::extract_regions;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}"
}

proptest! {
    /// Hyphen-free team and material tokens always come back unchanged.
    #[test]
    fn prop_parse_recovers_components(team in token(), material in token(), number in 0u32..10_000) {
        let id = format!("team-{}-generator-{}-{}", team, material, number);
        let region = Region::parse(&id).unwrap();
        prop_assert_eq!(region.id, id);
        prop_assert_eq!(region.team, team);
        prop_assert_eq!(region.material, material);
        prop_assert_eq!(region.index, number.to_string());
    }

    /// Hyphenated team labels stay with the team; the material is the last token.
    #[test]
    fn prop_hyphenated_team(parts in prop::collection::vec(token(), 1..4), number in 0u32..100) {
        let team = parts.join("-");
        let id = format!("team-{}-generator-iron-{}", team, number);
        let region = Region::parse(&id).unwrap();
        prop_assert_eq!(region.team, team);
        prop_assert_eq!(region.material, "iron");
    }

    /// Identifiers without the trailing number never match.
    #[test]
    fn prop_missing_number_rejected(team in token(), material in "[a-z]{1,10}") {
        let id = format!("team-{}-generator-{}", team, material);
        prop_assert!(Region::parse(&id).is_none());
    }

    /// Only configured materials survive extraction.
    #[test]
    fn prop_unconfigured_materials_skipped(team in "[a-z]{1,8}", material in "[a-z]{1,8}", number in 1u32..20) {
        let table = GeneratorTable::builtin();
        let xml = format!(r#"<map><cuboid id="team-{}-generator-{}-{}"/></map>"#, team, material, number);
        let regions = extract_regions(&xml, &table).unwrap();
        prop_assert_eq!(regions.len(), usize::from(table.contains(&material)));
    }
}
