use bakery_core::{
    error::ForgeError,
    price::{generate_price, parse_price},
    rng::{RngBank, StageSlot},
};
use regex::Regex;

fn price_pattern() -> Regex {
    Regex::new(r"^\d+\.\d{2} €$").unwrap()
}

fn draw_many(label: &str, n: usize) -> Vec<String> {
    let mut rng = RngBank::new(2024).for_stage(StageSlot::Synthesis);
    (0..n).map(|_| generate_price(label, &mut rng).unwrap()).collect()
}

#[test]
fn cupcake_prices_are_formatted_and_in_band() {
    let pattern = price_pattern();
    for price in draw_many("Cupcake", 500) {
        assert!(pattern.is_match(&price), "bad format: {price}");
        let value = parse_price(&price).unwrap();
        assert!((1.0..=6.0).contains(&value), "cupcake price {value} out of band");
    }
}

#[test]
fn wedding_cake_prices_are_in_band() {
    for price in draw_many("Wedding cake", 500) {
        let value = parse_price(&price).unwrap();
        assert!((40.0..=100.0).contains(&value), "wedding cake price {value} out of band");
    }
}

#[test]
fn whole_cake_and_slice_bands() {
    for price in draw_many("Whole cake", 200) {
        let value = parse_price(&price).unwrap();
        assert!((10.0..=40.0).contains(&value));
    }
    for price in draw_many("Slice", 200) {
        let value = parse_price(&price).unwrap();
        assert!((1.0..=6.0).contains(&value));
    }
}

#[test]
fn prices_land_on_ten_cent_steps() {
    for price in draw_many("Whole cake", 300) {
        assert!(price.ends_with("0 €"), "{price} is not a multiple of 0.10");
    }
}

#[test]
fn unknown_configuration_fails_loudly() {
    let mut rng = RngBank::new(1).for_stage(StageSlot::Synthesis);
    let err = generate_price("Croissant", &mut rng).unwrap_err();
    assert!(
        matches!(&err, ForgeError::InvalidConfiguration { label } if label == "Croissant"),
        "unexpected error: {err}"
    );
}
