//! Exploratory HTML report over the string-coerced dataset.
//!
//! The report never sees typed cells: the table is coerced to text first,
//! so a missing marker is just the `na_rep` string and a mixed-type cell is
//! its text rendering.

use crate::{error::ForgeResult, table::Table, types::Column};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.tera");
const TOP_VALUES: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub missing_pct: f64,
    pub distinct: usize,
    pub top: Vec<ValueCount>,
    pub numeric: Option<NumericSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub missing_cells: usize,
    pub duplicate_rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn column(&self, column: Column) -> &ColumnProfile {
        &self.columns[column.index()]
    }
}

/// Profile every column of `table`, counting `na_rep` cells as missing.
pub fn profile_table(table: &Table, na_rep: &str) -> DatasetProfile {
    let text_rows = table.to_text_rows(na_rep);
    let rows = text_rows.len();

    let columns: Vec<ColumnProfile> = Column::ALL
        .iter()
        .map(|column| {
            let values: Vec<&str> = text_rows
                .iter()
                .map(|r| r[column.index()].as_str())
                .collect();
            profile_column(column.name(), &values, na_rep)
        })
        .collect();

    let mut seen = HashSet::with_capacity(rows);
    let duplicate_rows = text_rows.iter().filter(|r| !seen.insert(*r)).count();

    DatasetProfile {
        rows,
        missing_cells: columns.iter().map(|c| c.missing).sum(),
        duplicate_rows,
        columns,
    }
}

fn profile_column(name: &str, values: &[&str], na_rep: &str) -> ColumnProfile {
    let count = values.len();
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    let mut missing = 0;
    for &value in values {
        if value == na_rep {
            missing += 1;
        }
        *frequencies.entry(value).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = frequencies.iter().map(|(v, n)| (*v, *n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top = ranked
        .iter()
        .take(TOP_VALUES)
        .map(|(value, n)| ValueCount {
            value: value.to_string(),
            count: *n,
            pct: percent(*n, count),
        })
        .collect();

    ColumnProfile {
        name: name.to_string(),
        count,
        missing,
        missing_pct: percent(missing, count),
        distinct: frequencies.len(),
        top,
        numeric: numeric_summary(values, na_rep),
    }
}

/// Summary when every non-missing value parses as a finite number.
fn numeric_summary(values: &[&str], na_rep: &str) -> Option<NumericSummary> {
    let mut numbers = Vec::with_capacity(values.len());
    for value in values.iter().filter(|v| **v != na_rep) {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() => numbers.push(n),
            _ => return None,
        }
    }
    if numbers.is_empty() {
        return None;
    }
    numbers.sort_by(f64::total_cmp);
    let mid = numbers.len() / 2;
    let median = if numbers.len() % 2 == 0 {
        (numbers[mid - 1] + numbers[mid]) / 2.0
    } else {
        numbers[mid]
    };
    Some(NumericSummary {
        min: numbers[0],
        max: numbers[numbers.len() - 1],
        mean: numbers.iter().sum::<f64>() / numbers.len() as f64,
        median,
    })
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

pub fn render_report(profile: &DatasetProfile, title: &str) -> ForgeResult<String> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert(
        "generated_at",
        &chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    context.insert("profile", profile);
    Ok(Tera::one_off(REPORT_TEMPLATE, &context, true)?)
}

/// Coerce `table` to text, profile it and write the HTML report to `path`.
pub fn write_report(table: &Table, path: &Path, na_rep: &str) -> ForgeResult<PathBuf> {
    let coerced = table.coerce_to_text(na_rep);
    let profile = profile_table(&coerced, na_rep);
    let html = render_report(&profile, "Synthetic bakery dataset")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    log::info!(
        "report: {} rows, {} missing cells, written to {}",
        profile.rows,
        profile.missing_cells,
        path.display()
    );
    Ok(path.to_path_buf())
}

/// Open a written report in the default browser.
pub fn open_in_browser(path: &Path) -> ForgeResult<()> {
    open::that(path)?;
    Ok(())
}
