//! Kids buying adult products: implausible occasion and product for
//! selected Kid rows.
//!
//! Rows are selected without replacement, but only rows whose segment cell
//! is exactly "Kid" are rewritten, so `rows` is an upper bound on the number
//! of mutations. Draws: the row sample, then one occasion per Kid row.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{clamp_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
    types::{Cell, Column, Segment},
};

pub struct SegmentMismatchPass {
    pub rows: usize,
    pub occasions: Vec<String>,
    pub product: String,
}

impl SegmentMismatchPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            rows: config.mismatch_rows,
            occasions: config.mismatch_occasions.clone(),
            product: config.mismatch_product.clone(),
        }
    }
}

impl CorruptionPass for SegmentMismatchPass {
    fn name(&self) -> &'static str {
        "segment_mismatch"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let amount = clamp_rows(self.name(), self.rows, table.len());
        let selected = rng.sample_indices(table.len(), amount);
        let mut mutated = Vec::new();
        if !self.occasions.is_empty() {
            for &row in &selected {
                if table.get(row, Column::TypeOfClient).as_str() != Some(Segment::Kid.label()) {
                    continue;
                }
                let occasion = rng.pick(&self.occasions).clone();
                table.set(row, Column::Occasion, Cell::Text(occasion.clone()));
                table.set(row, Column::ProductType, Cell::Text(self.product.clone()));
                mutated.push((row, occasion));
            }
        }
        Ok((table, CorruptionEvent::SegmentMismatchInjected { selected, mutated }))
    }
}
