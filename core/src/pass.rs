//! Corruption pass trait and the ordered pass pipeline.
//!
//! RULE: every pass is a pure `Table -> Table` step.
//! The pipeline runs passes in registration order. The order is fixed
//! because later passes may hit rows touched by earlier ones, and the
//! duplicate pass rewrites whole rows.
//!
//! STANDARD ORDER (fixed, documented, never reordered):
//!   1. Random nulls
//!   2. Invalid ages
//!   3. Typos
//!   4. Invalid prices
//!   5. Kid/adult product mismatch
//!   6. Duplicate rows
//!   7. Mixed-type cells

use crate::{
    age_pass::InvalidAgesPass,
    config::CorruptionConfig,
    duplicate_pass::DuplicateRowsPass,
    error::ForgeResult,
    event::CorruptionEvent,
    mismatch_pass::SegmentMismatchPass,
    mixed_type_pass::MixedTypesPass,
    null_pass::RandomNullsPass,
    price_pass::InvalidPricesPass,
    rng::{RngBank, StageRng, StageSlot},
    table::Table,
    typo_pass::TyposPass,
    types::{Cell, Column},
};

/// The contract every corruption pass must fulfill.
pub trait CorruptionPass {
    /// Unique stable name for this pass.
    fn name(&self) -> &'static str;

    /// Consume a table and return the corrupted table plus an event
    /// recording every mutation.
    fn apply(&self, table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)>;
}

/// Clamp a requested row count to what the table can supply.
pub(crate) fn clamp_rows(pass: &str, requested: usize, available: usize) -> usize {
    if requested > available {
        log::warn!("{pass}: requested {requested} rows but table has {available}; clamping");
        available
    } else {
        requested
    }
}

/// Pick `requested` distinct rows and overwrite `column` in each with a
/// value drawn uniformly from `pool`. Draws: row sample, then one pick
/// per row in sample order.
pub(crate) fn overwrite_sampled_rows(
    pass: &str,
    table: &mut Table,
    column: Column,
    requested: usize,
    pool: &[Cell],
    rng: &mut StageRng,
) -> Vec<(usize, Cell)> {
    if pool.is_empty() {
        log::warn!("{pass}: empty replacement pool; skipping");
        return Vec::new();
    }
    let amount = clamp_rows(pass, requested, table.len());
    let rows = rng.sample_indices(table.len(), amount);
    let mut written = Vec::with_capacity(rows.len());
    for row in rows {
        let value = rng.pick(pool).clone();
        table.set(row, column, value.clone());
        written.push((row, value));
    }
    written
}

#[derive(Default)]
pub struct CorruptionPipeline {
    passes: Vec<(StageSlot, Box<dyn CorruptionPass>)>,
}

impl CorruptionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// All seven passes in the standard order.
    pub fn standard(config: &CorruptionConfig) -> Self {
        let mut pipeline = Self::new();
        pipeline.register(
            StageSlot::RandomNulls,
            Box::new(RandomNullsPass::from_config(config)),
        );
        pipeline.register(
            StageSlot::InvalidAges,
            Box::new(InvalidAgesPass::from_config(config)),
        );
        pipeline.register(StageSlot::Typos, Box::new(TyposPass::from_config(config)));
        pipeline.register(
            StageSlot::InvalidPrices,
            Box::new(InvalidPricesPass::from_config(config)),
        );
        pipeline.register(
            StageSlot::SegmentMismatch,
            Box::new(SegmentMismatchPass::from_config(config)),
        );
        pipeline.register(
            StageSlot::DuplicateRows,
            Box::new(DuplicateRowsPass::from_config(config)),
        );
        pipeline.register(
            StageSlot::MixedTypes,
            Box::new(MixedTypesPass::from_config(config)),
        );
        pipeline
    }

    /// Register a pass. Call in the documented execution order.
    pub fn register(&mut self, slot: StageSlot, pass: Box<dyn CorruptionPass>) {
        self.passes.push((slot, pass));
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|(_, p)| p.name()).collect()
    }

    /// Thread the table through every pass in order.
    pub fn run(&self, mut table: Table, bank: &RngBank) -> ForgeResult<(Table, Vec<CorruptionEvent>)> {
        let mut events = Vec::with_capacity(self.passes.len());
        for (slot, pass) in &self.passes {
            let mut rng = bank.for_stage(*slot);
            let (next, event) = pass.apply(table, &mut rng)?;
            log::debug!(
                "{}: {} mutations, {} rows after pass",
                pass.name(),
                event.mutation_count(),
                next.len()
            );
            table = next;
            events.push(event);
        }
        log::info!("corruption: {} passes applied", events.len());
        Ok((table, events))
    }
}
