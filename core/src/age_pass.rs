//! Invalid ages: out-of-range or missing values in the Age column.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{overwrite_sampled_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
    types::{Cell, Column},
};

pub struct InvalidAgesPass {
    pub rows: usize,
    pub values: Vec<Cell>,
}

impl InvalidAgesPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            rows: config.invalid_age_rows,
            values: config.invalid_ages.clone(),
        }
    }
}

impl CorruptionPass for InvalidAgesPass {
    fn name(&self) -> &'static str {
        "invalid_ages"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let rows = overwrite_sampled_rows(
            self.name(),
            &mut table,
            Column::Age,
            self.rows,
            &self.values,
            rng,
        );
        Ok((table, CorruptionEvent::AgesInvalidated { rows }))
    }
}
