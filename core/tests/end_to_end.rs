//! Whole runs: generate, corrupt, write every artifact.

use bakery_core::{
    config::ForgeConfig,
    engine::ForgeEngine,
    event::CorruptionEvent,
    export::read_delimited,
    types::{Cell, Column},
};
use regex::Regex;

#[test]
fn seed_42_hundred_rows_grows_to_105() {
    let output = ForgeEngine::build_test(42, 100).generate().unwrap();
    assert_eq!(output.rows_before(), 100);
    assert_eq!(output.rows_after(), 105);
}

#[test]
fn every_price_is_well_formed_or_injected() {
    let config = ForgeConfig::default_test(42, 100);
    let injected = config.corruption.invalid_prices.clone();
    let output = ForgeEngine::new(config, Default::default()).generate().unwrap();
    let pattern = Regex::new(r"^\d+\.\d{2} €$").unwrap();

    for row in 0..output.table.len() {
        let cell = output.table.get(row, Column::WillingnessToPay);
        let well_formed = matches!(cell, Cell::Text(s) if pattern.is_match(s));
        assert!(
            well_formed || injected.contains(cell),
            "row {row}: unexpected price {cell:?}"
        );
    }
}

#[test]
fn run_writes_all_artifacts() {
    env_logger::builder().is_test(true).try_init().ok();
    let dir = tempfile::tempdir().unwrap();
    let config = ForgeConfig {
        output_dir: dir.path().join("out"),
        write_report: true,
        open_report: false,
        ..ForgeConfig::default_test(42, 300)
    };
    let engine = ForgeEngine::build(config).unwrap();
    let (output, artifacts) = engine.run().unwrap();

    assert!(artifacts.exports.spreadsheet.exists());
    assert!(artifacts.exports.delimited.exists());
    assert!(artifacts.report.as_ref().is_some_and(|p| p.exists()));

    let reread = read_delimited(
        &artifacts.exports.delimited,
        engine.config.delimiter,
        &engine.config.na_rep,
    )
    .unwrap();
    assert_eq!(reread.len(), output.rows_after());

    let log = std::fs::read_to_string(&artifacts.corruption_log).unwrap();
    let events: Vec<CorruptionEvent> = serde_json::from_str(&log).unwrap();
    assert_eq!(events, output.events);
}
