use bakery_core::{
    config::ForgeConfig,
    domain::DomainTables,
    engine::ForgeEngine,
};
use std::path::PathBuf;

fn shipped_domain_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/bakery_domains.json")
}

#[test]
fn shipped_domain_file_matches_builtin_tables() {
    let loaded = DomainTables::load(shipped_domain_file()).unwrap();
    assert_eq!(loaded, DomainTables::builtin());
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forge.json");
    std::fs::write(
        &path,
        r#"{ "seed": 7, "rows": 250, "corruption": { "null_columns": 2 } }"#,
    )
    .unwrap();

    let config = ForgeConfig::load(&path).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.rows, 250);
    assert_eq!(config.corruption.null_columns, 2);
    assert_eq!(config.corruption.null_rows_min, 15);
    assert_eq!(config.corruption.duplicate_count, 5);
    assert_eq!(config.delimiter, b';');
}

#[test]
fn invalid_domain_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("domains.json");
    let mut tables = DomainTables::builtin();
    tables.segments[0].share = 0.9;
    std::fs::write(&path, serde_json::to_string(&tables).unwrap()).unwrap();

    assert!(DomainTables::load(&path).is_err());
}

#[test]
fn engine_builds_from_domain_file() {
    let config = ForgeConfig {
        domain_file: Some(shipped_domain_file()),
        ..ForgeConfig::default_test(42, 200)
    };
    let from_file = ForgeEngine::build(config).unwrap().generate().unwrap();
    let builtin = ForgeEngine::build_test(42, 200).generate().unwrap();
    assert_eq!(from_file.table, builtin.table);
}
