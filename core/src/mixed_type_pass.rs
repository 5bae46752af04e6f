//! Mixed-type cells: integers, booleans and blanks in a text column.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{overwrite_sampled_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
    types::{Cell, Column},
};

pub struct MixedTypesPass {
    pub column: Column,
    pub rows: usize,
    pub values: Vec<Cell>,
}

impl MixedTypesPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            column: Column::FavoriteFilling,
            rows: config.mixed_type_rows,
            values: config.mixed_type_values.clone(),
        }
    }
}

impl CorruptionPass for MixedTypesPass {
    fn name(&self) -> &'static str {
        "mixed_types"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let rows = overwrite_sampled_rows(
            self.name(),
            &mut table,
            self.column,
            self.rows,
            &self.values,
            rng,
        );
        Ok((table, CorruptionEvent::MixedTypesInjected { rows }))
    }
}
