//! Dataset exporters: spreadsheet and delimited text.
//!
//! RULE: exporters write the table exactly as it is in memory. No
//! validation, no repair, no index column.

use crate::{
    config::ForgeConfig,
    error::{ForgeError, ForgeResult},
    table::Table,
    types::{Cell, Column},
};
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const SHEET_NAME: &str = "bakery";

#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub spreadsheet: PathBuf,
    pub delimited: PathBuf,
}

/// Write both exports into the configured output directory.
pub fn export_all(table: &Table, config: &ForgeConfig) -> ForgeResult<ExportPaths> {
    std::fs::create_dir_all(&config.output_dir)?;
    let paths = ExportPaths {
        spreadsheet: config.spreadsheet_path(),
        delimited: config.delimited_path(),
    };
    write_spreadsheet(table, &paths.spreadsheet)?;
    write_delimited(table, &paths.delimited, config.delimiter, &config.na_rep)?;
    log::info!(
        "export: wrote {} rows to {} and {}",
        table.len(),
        paths.spreadsheet.display(),
        paths.delimited.display()
    );
    Ok(paths)
}

/// Spreadsheet export. Integers become numbers, booleans stay booleans,
/// missing markers are left as empty cells.
pub fn write_spreadsheet(table: &Table, path: &Path) -> ForgeResult<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, column) in Column::ALL.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.name(), &header)?;
    }
    for (r, row) in table.rows().iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Int(v) => {
                    worksheet.write_number(r, c, *v as f64)?;
                }
                Cell::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                Cell::Text(s) => {
                    worksheet.write_string(r, c, s.as_str())?;
                }
                Cell::Missing => {}
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Delimited UTF-8 text export with a header row. Missing markers are
/// written as `na_rep`; every other cell as its text rendering.
pub fn write_delimited(table: &Table, path: &Path, delimiter: u8, na_rep: &str) -> ForgeResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    writer.write_record(Column::ALL.iter().map(|c| c.name()))?;
    for row in table.to_text_rows(na_rep) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a delimited export back into a table. Fields equal to `na_rep`
/// become `Cell::Missing`; everything else is read back as text.
pub fn read_delimited(path: &Path, delimiter: u8, na_rep: &str) -> ForgeResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    for (position, column) in Column::ALL.iter().enumerate() {
        let actual = headers.get(position).unwrap_or_default();
        if actual != column.name() {
            return Err(ForgeError::SchemaMismatch {
                position,
                expected: column.name().to_string(),
                actual: actual.to_string(),
            });
        }
    }
    if headers.len() != Column::ALL.len() {
        return Err(ForgeError::SchemaMismatch {
            position: Column::ALL.len(),
            expected: String::new(),
            actual: headers.get(Column::ALL.len()).unwrap_or_default().to_string(),
        });
    }

    let mut table = Table::default();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field == na_rep {
                    Cell::Missing
                } else {
                    Cell::text(field)
                }
            })
            .collect();
        table.push_row(row);
    }
    Ok(table)
}
