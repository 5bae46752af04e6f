//! Typos: misspelled variants written over random rows, with replacement.
//!
//! Draws, per configured column in order: `draws` rounds of (row, variant).

use crate::{
    config::{CorruptionConfig, TypoSpec},
    error::ForgeResult,
    event::CorruptionEvent,
    pass::CorruptionPass,
    rng::StageRng,
    table::Table,
    types::Cell,
};

pub struct TyposPass {
    pub draws: usize,
    pub typos: Vec<TypoSpec>,
}

impl TyposPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            draws: config.typo_draws_per_column,
            typos: config.typos.clone(),
        }
    }
}

impl CorruptionPass for TyposPass {
    fn name(&self) -> &'static str {
        "typos"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let mut edits = Vec::new();
        if table.is_empty() {
            return Ok((table, CorruptionEvent::TyposInjected { edits }));
        }
        for typo_set in self.typos.iter().filter(|s| !s.variants.is_empty()) {
            for _ in 0..self.draws {
                let row = rng.below(table.len());
                let typo = rng.pick(&typo_set.variants).clone();
                table.set(row, typo_set.column, Cell::Text(typo.clone()));
                edits.push((typo_set.column, row, typo));
            }
        }
        Ok((table, CorruptionEvent::TyposInjected { edits }))
    }
}
