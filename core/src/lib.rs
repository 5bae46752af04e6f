//! bakery-core: synthetic bakery-preference dataset with injected
//! data-quality defects.

pub mod age_pass;
pub mod config;
pub mod domain;
pub mod duplicate_pass;
pub mod engine;
pub mod error;
pub mod event;
pub mod export;
pub mod mismatch_pass;
pub mod mixed_type_pass;
pub mod null_pass;
pub mod pass;
pub mod price;
pub mod price_pass;
pub mod report;
pub mod rng;
pub mod synthesizer;
pub mod table;
pub mod typo_pass;
pub mod types;
