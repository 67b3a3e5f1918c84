//! Integration tests for the layered configuration

use super::test_utils::{fixture, with_xdg_env, write_global_config};
use eggwars_spawners::config::ConfigLoader;
use eggwars_spawners::GeneratorConfigSynthesizer;
use tempfile::TempDir;

#[test]
fn test_load_without_any_file_uses_builtin_table() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.generators.len(), 3);
        assert_eq!(config.generators.max_level(), 4);
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_global_config_path_follows_xdg_config_home() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let path = ConfigLoader::global_config_path().unwrap();
        assert_eq!(
            path,
            temp_dir
                .path()
                .join("config")
                .join("eggwars-spawners")
                .join("config.toml")
        );
    });
}

#[test]
fn test_global_config_adds_emerald() {
    let temp_dir = TempDir::new().unwrap();
    write_global_config(
        &temp_dir,
        r#"
[generators.emerald]
levels = [
    { level = 1, delay = "40s" },
    { level = 2, delay = "30s" },
]
"#,
    );

    with_xdg_env(&temp_dir, || {
        let config = ConfigLoader::load(None).unwrap();
        assert!(config.generators.contains("emerald"));

        let synthesis = GeneratorConfigSynthesizer::new(config.generators)
            .synthesize_file(&fixture("tiki_map.xml"))
            .unwrap();
        assert_eq!(synthesis.regions.len(), 7);

        let emerald: Vec<_> = synthesis
            .fragments
            .spawners
            .iter()
            .filter(|s| s.spawn_region == "team-blue-generator-emerald-1")
            .collect();
        assert_eq!(emerald.len(), 2);
        assert_eq!(emerald[0].item_material, "emerald");
        assert_eq!(emerald[1].delay, "30s");
    });
}

#[test]
fn test_explicit_config_overrides_global_config() {
    let temp_dir = TempDir::new().unwrap();
    write_global_config(
        &temp_dir,
        r#"
[logging]
level = "info"

[generators.iron]
levels = [{ level = 1, delay = "3s" }]
"#,
    );
    let explicit = temp_dir.path().join("tiki.toml");
    std::fs::write(
        &explicit,
        r#"
[generators.iron]
item = "iron nugget"
levels = [{ level = 1, delay = "4s" }, { level = 2, delay = "2s" }]
"#,
    )
    .unwrap();

    with_xdg_env(&temp_dir, || {
        let config = ConfigLoader::load(Some(&explicit)).unwrap();
        assert_eq!(config.logging.level, "info");

        let iron = config.generators.get("iron").unwrap();
        assert_eq!(iron.levels.len(), 2);
        assert_eq!(iron.levels[0].delay, "4s");
        assert_eq!(config.generators.item_material("iron"), "iron nugget");
        assert_eq!(config.generators.get("gold").unwrap().levels.len(), 4);
    });
}

#[test]
fn test_invalid_global_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    write_global_config(
        &temp_dir,
        r#"
[generators.gold]
levels = [{ level = 1, delay = "5s" }, { level = 3, delay = "2s" }]
"#,
    );

    with_xdg_env(&temp_dir, || {
        let err = ConfigLoader::load(None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Configuration validation failed"), "{}", msg);
        assert!(msg.contains("expected level 2"), "{}", msg);
    });
}

#[test]
fn test_explicit_material_entry_replaces_global_entry() {
    let temp_dir = TempDir::new().unwrap();
    write_global_config(
        &temp_dir,
        r#"
[generators.iron]
item = "iron block"
levels = [{ level = 1, delay = "9s" }]
"#,
    );
    let explicit = temp_dir.path().join("tiki.toml");
    std::fs::write(
        &explicit,
        r#"
[generators.iron]
levels = [{ level = 1, delay = "2s" }]
"#,
    )
    .unwrap();

    with_xdg_env(&temp_dir, || {
        let config = ConfigLoader::load(Some(&explicit)).unwrap();
        let iron = config.generators.get("iron").unwrap();
        assert_eq!(iron.item, None);
        assert_eq!(iron.levels.len(), 1);
        assert_eq!(iron.levels[0].delay, "2s");
        assert_eq!(config.generators.item_material("iron"), "iron ingot");
    });
}

#[test]
fn test_global_entry_survives_when_explicit_file_skips_material() {
    let temp_dir = TempDir::new().unwrap();
    write_global_config(
        &temp_dir,
        r#"
[generators.iron]
item = "iron block"
levels = [{ level = 1, delay = "9s" }]
"#,
    );
    let explicit = temp_dir.path().join("tiki.toml");
    std::fs::write(
        &explicit,
        r#"
[generators.gold]
levels = [{ level = 1, delay = "4s" }]
"#,
    )
    .unwrap();

    with_xdg_env(&temp_dir, || {
        let config = ConfigLoader::load(Some(&explicit)).unwrap();
        assert_eq!(config.generators.item_material("iron"), "iron block");
        assert_eq!(config.generators.get("gold").unwrap().levels.len(), 1);
    });
}
