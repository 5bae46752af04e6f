//! Random nulls: missing markers scattered over a random subset of columns.
//!
//! Draws: the column sample first, then for each column (in sample order)
//! a row count and a distinct-row sample.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{clamp_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
    types::{Cell, Column},
};

pub struct RandomNullsPass {
    pub columns: usize,
    pub min_rows: usize,
    pub max_rows: usize,
}

impl RandomNullsPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            columns: config.null_columns,
            min_rows: config.null_rows_min,
            max_rows: config.null_rows_max,
        }
    }
}

impl CorruptionPass for RandomNullsPass {
    fn name(&self) -> &'static str {
        "random_nulls"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let schema = table.columns();
        let column_count = clamp_rows(self.name(), self.columns, schema.len());
        let picked: Vec<Column> = rng
            .sample_indices(schema.len(), column_count)
            .into_iter()
            .map(|i| schema[i])
            .collect();

        let max_rows = self.max_rows.max(self.min_rows);
        let mut columns = Vec::with_capacity(picked.len());
        for column in picked {
            let requested = rng.int_inclusive(self.min_rows as i64, max_rows as i64) as usize;
            let amount = clamp_rows(self.name(), requested, table.len());
            let rows = rng.sample_indices(table.len(), amount);
            for &row in &rows {
                table.set(row, column, Cell::Missing);
            }
            columns.push((column, rows));
        }
        Ok((table, CorruptionEvent::NullsInjected { columns }))
    }
}
