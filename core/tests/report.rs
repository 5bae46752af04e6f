use bakery_core::{
    engine::ForgeEngine,
    report::{profile_table, write_report},
    types::{Column, MISSING_TEXT},
};

#[test]
fn report_is_written_as_html() {
    let output = ForgeEngine::build_test(42, 400).generate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("bakery.html");

    let written = write_report(&output.table, &path, MISSING_TEXT).unwrap();
    assert_eq!(written, path);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    for column in Column::ALL {
        assert!(html.contains(column.name()), "report is missing {column}");
    }
}

#[test]
fn profile_counts_missing_markers_per_column() {
    let output = ForgeEngine::build_test(5, 800).generate().unwrap();
    let coerced = output.table.coerce_to_text(MISSING_TEXT);
    let profile = profile_table(&coerced, MISSING_TEXT);

    assert_eq!(profile.rows, output.table.len());
    for column in Column::ALL {
        assert_eq!(
            profile.column(column).missing,
            output.table.missing_count(column),
            "{column} missing count"
        );
    }
    assert!(profile.missing_cells > 0);
}

#[test]
fn clean_age_profile_is_numeric_and_bounded() {
    let clean = ForgeEngine::build_test(6, 600).synthesize().unwrap();
    let profile = profile_table(&clean.coerce_to_text(MISSING_TEXT), MISSING_TEXT);

    let age = profile.column(Column::Age).numeric.as_ref().expect("age is numeric");
    assert!(age.min >= 4.0);
    assert!(age.max <= 65.0);
    assert!(profile.column(Column::WillingnessToPay).numeric.is_none());
}

#[test]
fn profile_detects_duplicated_rows() {
    let mut table = ForgeEngine::build_test(6, 50).synthesize().unwrap();
    let copy = table.row(3).to_vec();
    table.push_row(copy);

    let profile = profile_table(&table, MISSING_TEXT);
    assert!(profile.duplicate_rows >= 1);
}
