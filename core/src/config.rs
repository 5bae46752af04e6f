use crate::{
    error::ForgeResult,
    types::{Cell, Column},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Misspelled variants injected into one column by the typo pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypoSpec {
    pub column: Column,
    pub variants: Vec<String>,
}

impl TypoSpec {
    fn new(column: Column, variants: &[&str]) -> Self {
        Self {
            column,
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Every count, range and replacement pool used by the corruption passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionConfig {
    // Random nulls
    pub null_columns: usize,
    pub null_rows_min: usize,
    pub null_rows_max: usize,

    // Invalid ages
    pub invalid_age_rows: usize,
    pub invalid_ages: Vec<Cell>,

    // Typos
    pub typo_draws_per_column: usize,
    pub typos: Vec<TypoSpec>,

    // Invalid prices
    pub invalid_price_rows: usize,
    pub invalid_prices: Vec<Cell>,

    // Kids buying adult products
    pub mismatch_rows: usize,
    pub mismatch_occasions: Vec<String>,
    pub mismatch_product: String,

    // Duplicate rows: sources from [window_start, window_end), copied to source + offset
    pub duplicate_count: usize,
    pub duplicate_window_start: usize,
    pub duplicate_window_end: usize,
    pub duplicate_offset: usize,

    // Mixed types
    pub mixed_type_rows: usize,
    pub mixed_type_values: Vec<Cell>,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            null_columns: 6,
            null_rows_min: 15,
            null_rows_max: 40,

            invalid_age_rows: 20,
            invalid_ages: vec![Cell::Int(-3), Cell::Int(150), Cell::Int(999), Cell::Missing],

            typo_draws_per_column: 8,
            typos: vec![
                TypoSpec::new(
                    Column::FavoriteBatter,
                    &["Choclate", "Vannila", "Red Velvt", "Lemonn"],
                ),
                TypoSpec::new(
                    Column::FrequencyOfBuying,
                    &["Daly", "Weeekly", "Montly", "Spordic"],
                ),
                TypoSpec::new(Column::Gender, &["Fem", "Masc", "Femanine"]),
            ],

            invalid_price_rows: 15,
            invalid_prices: ["Free", "?", "NaN", "", "€", "10"]
                .iter()
                .map(|v| Cell::text(*v))
                .chain(std::iter::once(Cell::Missing))
                .collect(),

            mismatch_rows: 10,
            mismatch_occasions: vec!["Work event".into(), "Wedding".into()],
            mismatch_product: "Wedding cake".into(),

            duplicate_count: 5,
            duplicate_window_start: 100,
            duplicate_window_end: 200,
            duplicate_offset: 5,

            mixed_type_rows: 10,
            mixed_type_values: vec![
                Cell::Int(123),
                Cell::Missing,
                Cell::Bool(true),
                Cell::text("ok"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub seed: u64,
    pub rows: usize,
    pub output_dir: PathBuf,
    /// File stem shared by the spreadsheet and the delimited export.
    pub dataset_stem: String,
    pub report_file: String,
    pub corruption_log_file: String,
    pub delimiter: u8,
    /// Text written for missing markers in the delimited export and report.
    pub na_rep: String,
    pub write_report: bool,
    pub open_report: bool,
    /// Optional domain tables JSON; the built-in tables are used when absent.
    pub domain_file: Option<PathBuf>,
    pub corruption: CorruptionConfig,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rows: 1500,
            output_dir: PathBuf::from("."),
            dataset_stem: "synthetic_dataset_raw_bakery".into(),
            report_file: "synthetic_data_bakery_report.html".into(),
            corruption_log_file: "corruption_log.json".into(),
            delimiter: b';',
            na_rep: crate::types::MISSING_TEXT.into(),
            write_report: true,
            open_report: true,
            domain_file: None,
            corruption: CorruptionConfig::default(),
        }
    }
}

impl ForgeConfig {
    /// Load overrides from a JSON file. Absent keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> ForgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Small, quiet configuration for tests: no report, no browser.
    pub fn default_test(seed: u64, rows: usize) -> Self {
        Self {
            seed,
            rows,
            write_report: false,
            open_report: false,
            ..Self::default()
        }
    }

    pub fn spreadsheet_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.xlsx", self.dataset_stem))
    }

    pub fn delimited_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.dataset_stem))
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }

    pub fn corruption_log_path(&self) -> PathBuf {
        self.output_dir.join(&self.corruption_log_file)
    }
}
