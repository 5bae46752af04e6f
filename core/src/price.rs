//! Willingness-to-pay generation per product configuration.

use crate::{
    error::{ForgeError, ForgeResult},
    rng::StageRng,
};

pub const CURRENCY_SUFFIX: &str = " €";

/// Price band for a configuration label, in currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    pub fn for_label(label: &str) -> ForgeResult<Self> {
        let (min, max) = match label {
            "Cupcake" | "Slice" => (1.0, 6.0),
            "Whole cake" => (10.0, 40.0),
            "Wedding cake" => (40.0, 100.0),
            other => {
                return Err(ForgeError::InvalidConfiguration {
                    label: other.to_string(),
                })
            }
        };
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Draw a price for `label` and format it as `"3.70 €"`.
///
/// The draw is rounded to cents and then to the nearest ten cents; the
/// second rounding wins but both are applied. Ties round to even.
pub fn generate_price(label: &str, rng: &mut StageRng) -> ForgeResult<String> {
    let band = PriceBand::for_label(label)?;
    let price = round_to(rng.uniform(band.min, band.max), 2);
    let price = round_to(price, 1);
    Ok(format_price(price))
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}{CURRENCY_SUFFIX}")
}

/// Inverse of `format_price`. `None` for anything that is not a
/// generator-formatted price.
pub fn parse_price(text: &str) -> Option<f64> {
    let number = text.strip_suffix(CURRENCY_SUFFIX)?;
    let (whole, cents) = number.split_once('.')?;
    if whole.is_empty()
        || cents.len() != 2
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !cents.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    number.parse().ok()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
