//! Shared primitive types used across the entire pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text written for a `Cell::Missing` when a table is rendered as text.
pub const MISSING_TEXT: &str = "NA";

/// The Adult/Kid customer classification driving which domains apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    Adult,
    Kid,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Kid => "Kid",
        }
    }
}

/// A single table cell. Corruption passes may put any variant in any column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Bool(bool),
    Text(String),
    Missing,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text rendering, with `na_rep` standing in for a missing marker.
    pub fn render(&self, na_rep: &str) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Bool(true) => "True".into(),
            Self::Bool(false) => "False".into(),
            Self::Text(s) => s.clone(),
            Self::Missing => na_rep.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(MISSING_TEXT))
    }
}

/// The fixed 15-column schema. Order is significant for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Type_of_client")]
    TypeOfClient,
    Age,
    Gender,
    #[serde(rename = "Favorite_batter")]
    FavoriteBatter,
    #[serde(rename = "Favorite_filling")]
    FavoriteFilling,
    #[serde(rename = "Favorite_frosting")]
    FavoriteFrosting,
    #[serde(rename = "More_toppings")]
    MoreToppings,
    #[serde(rename = "Topping_examples")]
    ToppingExamples,
    Configuration,
    #[serde(rename = "Frequency_of_buying")]
    FrequencyOfBuying,
    Occasion,
    #[serde(rename = "Interest_in_seasonality")]
    InterestInSeasonality,
    #[serde(rename = "Seasonal_option")]
    SeasonalOption,
    #[serde(rename = "Product_type")]
    ProductType,
    #[serde(rename = "Willingness_to_pay")]
    WillingnessToPay,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::TypeOfClient,
        Column::Age,
        Column::Gender,
        Column::FavoriteBatter,
        Column::FavoriteFilling,
        Column::FavoriteFrosting,
        Column::MoreToppings,
        Column::ToppingExamples,
        Column::Configuration,
        Column::FrequencyOfBuying,
        Column::Occasion,
        Column::InterestInSeasonality,
        Column::SeasonalOption,
        Column::ProductType,
        Column::WillingnessToPay,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeOfClient => "Type_of_client",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::FavoriteBatter => "Favorite_batter",
            Self::FavoriteFilling => "Favorite_filling",
            Self::FavoriteFrosting => "Favorite_frosting",
            Self::MoreToppings => "More_toppings",
            Self::ToppingExamples => "Topping_examples",
            Self::Configuration => "Configuration",
            Self::FrequencyOfBuying => "Frequency_of_buying",
            Self::Occasion => "Occasion",
            Self::InterestInSeasonality => "Interest_in_seasonality",
            Self::SeasonalOption => "Seasonal_option",
            Self::ProductType => "Product_type",
            Self::WillingnessToPay => "Willingness_to_pay",
        }
    }

    /// Position of this column in a row.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
