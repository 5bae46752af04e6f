//! Weighted categorical domains for every customer attribute.
//!
//! Segment-specific domains live on each `SegmentProfile`; domains that do
//! not depend on the segment live in `shared`. Lookup consults the segment
//! first, then the shared set.

use crate::{
    error::{ForgeError, ForgeResult},
    rng::StageRng,
    types::Segment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Batter,
    Filling,
    Frosting,
    MoreToppings,
    Topping,
    Configuration,
    Occasion,
    Gender,
    Frequency,
    SeasonalInterest,
    SeasonalOption,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Batter => "batter",
            Self::Filling => "filling",
            Self::Frosting => "frosting",
            Self::MoreToppings => "more_toppings",
            Self::Topping => "topping",
            Self::Configuration => "configuration",
            Self::Occasion => "occasion",
            Self::Gender => "gender",
            Self::Frequency => "frequency",
            Self::SeasonalInterest => "seasonal_interest",
            Self::SeasonalOption => "seasonal_option",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite value set with an optional probability distribution over it.
/// `weights: None` means uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedDomain {
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
}

impl WeightedDomain {
    pub fn weighted(values: &[&str], weights: &[f64]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
            weights: Some(weights.to_vec()),
        }
    }

    pub fn uniform(values: &[&str]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
            weights: None,
        }
    }

    pub fn sample<'a>(&'a self, rng: &mut StageRng) -> &'a str {
        match &self.weights {
            Some(w) => rng.pick_weighted(&self.values, w).as_str(),
            None => rng.pick(&self.values).as_str(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    fn validate(&self, name: &str) -> ForgeResult<()> {
        let invalid = |reason: String| ForgeError::InvalidDomain {
            name: name.to_string(),
            reason,
        };
        if self.values.is_empty() {
            return Err(invalid("no values".into()));
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.values.len() {
                return Err(invalid(format!(
                    "{} weights for {} values",
                    weights.len(),
                    self.values.len()
                )));
            }
            if weights.iter().any(|w| *w < 0.0) {
                return Err(invalid("negative weight".into()));
            }
            let total: f64 = weights.iter().sum();
            if (total - 1.0).abs() > WEIGHT_TOLERANCE {
                return Err(invalid(format!("weights sum to {total}")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentProfile {
    pub segment: Segment,
    /// Probability of a generated customer falling in this segment.
    pub share: f64,
    pub age_min: i64,
    pub age_max: i64,
    pub domains: BTreeMap<Category, WeightedDomain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTables {
    pub segments: Vec<SegmentProfile>,
    pub shared: BTreeMap<Category, WeightedDomain>,
}

impl DomainTables {
    /// The bakery survey domains.
    pub fn builtin() -> Self {
        let adult = SegmentProfile {
            segment: Segment::Adult,
            share: 0.7,
            age_min: 18,
            age_max: 65,
            domains: BTreeMap::from([
                (
                    Category::Batter,
                    WeightedDomain::weighted(&["Lemon", "Carrot", "Red Velvet"], &[0.4, 0.35, 0.25]),
                ),
                (
                    Category::Filling,
                    WeightedDomain::weighted(
                        &["Cream cheese", "Dulce de leche", "Lemon curd"],
                        &[0.5, 0.3, 0.2],
                    ),
                ),
                (
                    Category::Frosting,
                    WeightedDomain::weighted(
                        &["Cream cheese frosting", "Ganache", "Chocolate glaze"],
                        &[0.5, 0.3, 0.2],
                    ),
                ),
                (
                    Category::MoreToppings,
                    WeightedDomain::weighted(&["Yes", "No"], &[0.3, 0.7]),
                ),
                (
                    Category::Configuration,
                    WeightedDomain::uniform(&["Slice", "Whole cake", "Wedding cake"]),
                ),
                (
                    Category::Occasion,
                    WeightedDomain::uniform(&["Celebration", "Gathering", "Wedding", "Work event"]),
                ),
            ]),
        };

        let kid = SegmentProfile {
            segment: Segment::Kid,
            share: 0.3,
            age_min: 4,
            age_max: 17,
            domains: BTreeMap::from([
                (
                    Category::Batter,
                    WeightedDomain::weighted(&["Chocolate", "Red Velvet"], &[0.6, 0.4]),
                ),
                (
                    Category::Filling,
                    WeightedDomain::weighted(&["Chocolate ganache", "Strawberry jam"], &[0.7, 0.3]),
                ),
                (
                    Category::Frosting,
                    WeightedDomain::weighted(
                        &["Chocolate glaze", "Buttercream", "Whipped cream"],
                        &[0.6, 0.25, 0.15],
                    ),
                ),
                (
                    Category::MoreToppings,
                    WeightedDomain::weighted(&["Yes", "No"], &[0.7, 0.3]),
                ),
                (
                    Category::Configuration,
                    WeightedDomain::uniform(&["Cupcake", "Slice"]),
                ),
                (
                    Category::Occasion,
                    WeightedDomain::uniform(&["Snack", "Birthday", "Celebration"]),
                ),
            ]),
        };

        let shared = BTreeMap::from([
            (
                Category::Gender,
                WeightedDomain::weighted(&["Feminine", "Masculine"], &[0.65, 0.35]),
            ),
            (
                Category::Frequency,
                WeightedDomain::weighted(
                    &["Daily", "Weekly", "Monthly", "Sporadic"],
                    &[0.3, 0.4, 0.2, 0.1],
                ),
            ),
            (
                Category::SeasonalInterest,
                WeightedDomain::weighted(&["Yes", "No"], &[0.3, 0.7]),
            ),
            (
                Category::Topping,
                WeightedDomain::uniform(&[
                    "Fruits",
                    "Sprinkles",
                    "Nuts",
                    "Chocolate chips",
                    "Edible flowers",
                ]),
            ),
            (
                Category::SeasonalOption,
                WeightedDomain::uniform(&[
                    "Christmas",
                    "Halloween",
                    "Valentine's Day",
                    "Easter",
                    "Fall",
                ]),
            ),
        ]);

        Self {
            segments: vec![adult, kid],
            shared,
        }
    }

    /// Load and validate tables from a JSON data file.
    pub fn load(path: impl AsRef<Path>) -> ForgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let tables: DomainTables = serde_json::from_str(&content)?;
        tables.validate()?;
        log::info!(
            "domain: loaded {} segments and {} shared domains from {}",
            tables.segments.len(),
            tables.shared.len(),
            path.display()
        );
        Ok(tables)
    }

    pub fn validate(&self) -> ForgeResult<()> {
        if self.segments.is_empty() {
            return Err(ForgeError::InvalidDomain {
                name: "segments".into(),
                reason: "no segments".into(),
            });
        }
        let total_share: f64 = self.segments.iter().map(|s| s.share).sum();
        if (total_share - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ForgeError::InvalidDomain {
                name: "segments".into(),
                reason: format!("segment shares sum to {total_share}"),
            });
        }
        for profile in &self.segments {
            let label = profile.segment.label();
            if profile.age_min > profile.age_max {
                return Err(ForgeError::InvalidDomain {
                    name: label.to_string(),
                    reason: format!("age bound {}..={} is empty", profile.age_min, profile.age_max),
                });
            }
            for (category, domain) in &profile.domains {
                domain.validate(&format!("{label}.{category}"))?;
            }
        }
        for (category, domain) in &self.shared {
            domain.validate(&format!("shared.{category}"))?;
        }
        Ok(())
    }

    pub fn profile(&self, segment: Segment) -> ForgeResult<&SegmentProfile> {
        self.segments
            .iter()
            .find(|p| p.segment == segment)
            .ok_or_else(|| ForgeError::UnknownDomain {
                segment: segment.label().to_string(),
                category: "profile".into(),
            })
    }

    pub fn domain(&self, segment: Segment, category: Category) -> ForgeResult<&WeightedDomain> {
        let profile = self.profile(segment)?;
        profile
            .domains
            .get(&category)
            .or_else(|| self.shared.get(&category))
            .ok_or_else(|| ForgeError::UnknownDomain {
                segment: segment.label().to_string(),
                category: category.to_string(),
            })
    }

    /// `(values, weights)`; `None` weights means uniform sampling.
    pub fn lookup(
        &self,
        segment: Segment,
        category: Category,
    ) -> ForgeResult<(&[String], Option<&[f64]>)> {
        let domain = self.domain(segment, category)?;
        Ok((domain.values.as_slice(), domain.weights.as_deref()))
    }

    pub fn pick_segment(&self, rng: &mut StageRng) -> Segment {
        let shares: Vec<f64> = self.segments.iter().map(|s| s.share).collect();
        rng.pick_weighted(&self.segments, &shares).segment
    }
}

impl Default for DomainTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_validate() {
        DomainTables::builtin().validate().unwrap();
    }

    #[test]
    fn segment_domain_shadows_shared() {
        let tables = DomainTables::builtin();
        let (values, weights) = tables.lookup(Segment::Kid, Category::Batter).unwrap();
        assert_eq!(values, ["Chocolate", "Red Velvet"]);
        assert_eq!(weights, Some(&[0.6, 0.4][..]));
    }

    #[test]
    fn uniform_domains_have_no_weights() {
        let tables = DomainTables::builtin();
        let (values, weights) = tables.lookup(Segment::Adult, Category::Topping).unwrap();
        assert_eq!(values.len(), 5);
        assert!(weights.is_none());
    }

    #[test]
    fn mismatched_weights_rejected() {
        let mut tables = DomainTables::builtin();
        tables.shared.insert(
            Category::Gender,
            WeightedDomain::weighted(&["Feminine", "Masculine"], &[0.5]),
        );
        assert!(matches!(
            tables.validate(),
            Err(ForgeError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut tables = DomainTables::builtin();
        tables.shared.insert(
            Category::Frequency,
            WeightedDomain::weighted(&["Daily", "Weekly"], &[0.5, 0.4]),
        );
        assert!(tables.validate().is_err());
    }
}
