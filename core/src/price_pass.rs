//! Invalid prices: free-text, symbols and blanks in Willingness_to_pay.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{overwrite_sampled_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
    types::{Cell, Column},
};

pub struct InvalidPricesPass {
    pub rows: usize,
    pub values: Vec<Cell>,
}

impl InvalidPricesPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            rows: config.invalid_price_rows,
            values: config.invalid_prices.clone(),
        }
    }
}

impl CorruptionPass for InvalidPricesPass {
    fn name(&self) -> &'static str {
        "invalid_prices"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let rows = overwrite_sampled_rows(
            self.name(),
            &mut table,
            Column::WillingnessToPay,
            self.rows,
            &self.values,
            rng,
        );
        Ok((table, CorruptionEvent::PricesInvalidated { rows }))
    }
}
