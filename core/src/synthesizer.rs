//! Row synthesis: one clean customer record per iteration.
//!
//! DRAW ORDER per row (fixed, part of the seed contract):
//!   segment, age, gender, batter, filling, frosting,
//!   more-toppings flag, configuration, occasion,
//!   topping (only if flag is "Yes"), frequency,
//!   seasonal flag, seasonal option (only if flag is "Yes"), price.

use crate::{
    domain::{Category, DomainTables},
    error::ForgeResult,
    price::generate_price,
    rng::StageRng,
    types::{Cell, Segment},
};
use serde::{Deserialize, Serialize};

/// Placeholder for a topping or seasonal option the customer declined.
pub const NONE_CHOICE: &str = "None";
const YES: &str = "Yes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub segment: Segment,
    pub age: i64,
    pub gender: String,
    pub favorite_batter: String,
    pub favorite_filling: String,
    pub favorite_frosting: String,
    pub more_toppings: String,
    pub topping: String,
    pub configuration: String,
    pub frequency: String,
    pub occasion: String,
    pub seasonal_interest: String,
    pub seasonal_option: String,
    pub product_type: String,
    pub willingness_to_pay: String,
}

impl CustomerRecord {
    /// Cells in `Column::ALL` order.
    pub fn into_row(self) -> Vec<Cell> {
        vec![
            Cell::text(self.segment.label()),
            Cell::Int(self.age),
            Cell::Text(self.gender),
            Cell::Text(self.favorite_batter),
            Cell::Text(self.favorite_filling),
            Cell::Text(self.favorite_frosting),
            Cell::Text(self.more_toppings),
            Cell::Text(self.topping),
            Cell::Text(self.configuration),
            Cell::Text(self.frequency),
            Cell::Text(self.occasion),
            Cell::Text(self.seasonal_interest),
            Cell::Text(self.seasonal_option),
            Cell::Text(self.product_type),
            Cell::Text(self.willingness_to_pay),
        ]
    }
}

pub struct RowSynthesizer<'a> {
    tables: &'a DomainTables,
}

impl<'a> RowSynthesizer<'a> {
    pub fn new(tables: &'a DomainTables) -> Self {
        Self { tables }
    }

    /// Generate `n` records in generation order.
    pub fn synthesize(&self, n: usize, rng: &mut StageRng) -> ForgeResult<Vec<CustomerRecord>> {
        let mut records = Vec::with_capacity(n);
        for _ in 0..n {
            records.push(self.synthesize_row(rng)?);
        }
        let kids = records.iter().filter(|r| r.segment == Segment::Kid).count();
        log::info!(
            "synthesis: generated {n} rows ({} adult, {kids} kid)",
            n - kids
        );
        Ok(records)
    }

    pub fn synthesize_row(&self, rng: &mut StageRng) -> ForgeResult<CustomerRecord> {
        let segment = self.tables.pick_segment(rng);
        let profile = self.tables.profile(segment)?;
        let age = rng.int_inclusive(profile.age_min, profile.age_max);

        let gender = self.draw(segment, Category::Gender, rng)?;
        let favorite_batter = self.draw(segment, Category::Batter, rng)?;
        let favorite_filling = self.draw(segment, Category::Filling, rng)?;
        let favorite_frosting = self.draw(segment, Category::Frosting, rng)?;

        let more_toppings = self.draw(segment, Category::MoreToppings, rng)?;
        let configuration = self.draw(segment, Category::Configuration, rng)?;
        let occasion = self.draw(segment, Category::Occasion, rng)?;
        let topping = self.draw_if_yes(&more_toppings, segment, Category::Topping, rng)?;

        let frequency = self.draw(segment, Category::Frequency, rng)?;

        let seasonal_interest = self.draw(segment, Category::SeasonalInterest, rng)?;
        let seasonal_option =
            self.draw_if_yes(&seasonal_interest, segment, Category::SeasonalOption, rng)?;

        let product_type = configuration.clone();
        let willingness_to_pay = generate_price(&product_type, rng)?;

        Ok(CustomerRecord {
            segment,
            age,
            gender,
            favorite_batter,
            favorite_filling,
            favorite_frosting,
            more_toppings,
            topping,
            configuration,
            frequency,
            occasion,
            seasonal_interest,
            seasonal_option,
            product_type,
            willingness_to_pay,
        })
    }

    fn draw(&self, segment: Segment, category: Category, rng: &mut StageRng) -> ForgeResult<String> {
        Ok(self.tables.domain(segment, category)?.sample(rng).to_string())
    }

    fn draw_if_yes(
        &self,
        flag: &str,
        segment: Segment,
        category: Category,
        rng: &mut StageRng,
    ) -> ForgeResult<String> {
        if flag == YES {
            self.draw(segment, category, rng)
        } else {
            Ok(NONE_CHOICE.to_string())
        }
    }
}
