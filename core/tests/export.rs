use bakery_core::{
    engine::ForgeEngine,
    error::ForgeError,
    export::{read_delimited, write_delimited, write_spreadsheet},
    types::{Cell, Column, MISSING_TEXT},
};

#[test]
fn delimited_round_trip_preserves_every_cell() {
    let output = ForgeEngine::build_test(42, 1500).generate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bakery.csv");

    write_delimited(&output.table, &path, b';', MISSING_TEXT).unwrap();
    let reread = read_delimited(&path, b';', MISSING_TEXT).unwrap();

    assert_eq!(reread.len(), output.table.len());
    for (i, (written, parsed)) in output.table.rows().iter().zip(reread.rows()).enumerate() {
        for (column, (a, b)) in Column::ALL.iter().zip(written.iter().zip(parsed)) {
            assert_eq!(
                a.render(MISSING_TEXT),
                b.render(MISSING_TEXT),
                "row {i} {column} changed in round trip"
            );
            assert_eq!(a.is_missing(), b.is_missing(), "row {i} {column} missing flag changed");
        }
    }
}

#[test]
fn delimited_file_uses_semicolons_and_header() {
    let output = ForgeEngine::build_test(1, 50).generate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bakery.csv");
    write_delimited(&output.table, &path, b';', MISSING_TEXT).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    let expected: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(header, expected.join(";"));
    assert!(content.contains(" €"), "prices should be written as UTF-8");
}

#[test]
fn mixed_type_cells_are_stringified() {
    let mut table = ForgeEngine::build_test(2, 10).synthesize().unwrap();
    table.set(0, Column::FavoriteFilling, Cell::Int(123));
    table.set(1, Column::FavoriteFilling, Cell::Bool(true));
    table.set(2, Column::FavoriteFilling, Cell::Missing);
    table.set(3, Column::WillingnessToPay, Cell::text(""));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.csv");
    write_delimited(&table, &path, b';', MISSING_TEXT).unwrap();
    let reread = read_delimited(&path, b';', MISSING_TEXT).unwrap();

    assert_eq!(reread.get(0, Column::FavoriteFilling), &Cell::text("123"));
    assert_eq!(reread.get(1, Column::FavoriteFilling), &Cell::text("True"));
    assert_eq!(reread.get(2, Column::FavoriteFilling), &Cell::Missing);
    assert_eq!(reread.get(3, Column::WillingnessToPay), &Cell::text(""));
}

#[test]
fn reading_a_foreign_header_is_a_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.csv");
    std::fs::write(&path, "Name;Age\nAda;36\n").unwrap();

    match read_delimited(&path, b';', MISSING_TEXT) {
        Err(ForgeError::SchemaMismatch { position, expected, actual }) => {
            assert_eq!(position, 0);
            assert_eq!(expected, "Type_of_client");
            assert_eq!(actual, "Name");
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn spreadsheet_is_written_even_for_inconsistent_tables() {
    let output = ForgeEngine::build_test(42, 300).generate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bakery.xlsx");

    write_spreadsheet(&output.table, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK", "xlsx files are zip archives");
}
