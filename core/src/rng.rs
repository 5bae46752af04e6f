//! Deterministic random number generation.
//!
//! RULE: Nothing in the pipeline may call any platform RNG.
//! All randomness flows through StageRng instances derived
//! from the single master seed in ForgeConfig.
//!
//! Each pipeline stage gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stage_index). This means:
//!   - Adding a corruption pass never changes earlier stages' streams.
//!   - Each pass's draws are reproducible in isolation.
//!
//! CONSUMPTION ORDER: a stage draws only from its own stream. The
//! synthesizer consumes draws per row in column order (see synthesizer.rs);
//! each corruption pass documents its own draw order.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single pipeline stage.
pub struct StageRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl StageRng {
    /// Create a stage RNG from the master seed and a stable
    /// stage index. The index must never change once assigned.
    pub fn new(master_seed: u64, stage_index: u64) -> Self {
        let derived_seed = master_seed ^ (stage_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a usize in [0, n).
    pub fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Uniform integer in [lo, hi], both ends included.
    pub fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.inner.gen_range(lo..=hi)
    }

    /// Uniform float in [lo, hi].
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.inner.gen_range(lo..=hi)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// Pick one element using a parallel weight slice (cumulative roll).
    /// Falls back to the last element when weights sum to slightly under 1.
    pub fn pick_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> &'a T {
        assert_eq!(items.len(), weights.len(), "items and weights differ in length");
        let roll = self.next_f64();
        let mut cumulative = 0.0;
        for (item, weight) in items.iter().zip(weights) {
            cumulative += weight;
            if roll < cumulative {
                return item;
            }
        }
        &items[items.len() - 1]
    }

    /// `amount` distinct indices from [0, length), in draw order.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.inner, length, amount).into_vec()
    }
}

/// All stage RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_stage(&self, slot: StageSlot) -> StageRng {
        StageRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Synthesis = 0,
    RandomNulls = 1,
    InvalidAges = 2,
    Typos = 3,
    InvalidPrices = 4,
    SegmentMismatch = 5,
    DuplicateRows = 6,
    MixedTypes = 7,
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Synthesis => "synthesis",
            Self::RandomNulls => "random_nulls",
            Self::InvalidAges => "invalid_ages",
            Self::Typos => "typos",
            Self::InvalidPrices => "invalid_prices",
            Self::SegmentMismatch => "segment_mismatch",
            Self::DuplicateRows => "duplicate_rows",
            Self::MixedTypes => "mixed_types",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_slot_same_stream() {
        let bank = RngBank::new(42);
        let mut a = bank.for_stage(StageSlot::Typos);
        let mut b = bank.for_stage(StageSlot::Typos);
        for _ in 0..16 {
            assert_eq!(a.below(1000), b.below(1000));
        }
    }

    #[test]
    fn slots_are_independent_streams() {
        let bank = RngBank::new(42);
        let a: Vec<usize> = {
            let mut r = bank.for_stage(StageSlot::RandomNulls);
            (0..16).map(|_| r.below(1_000_000)).collect()
        };
        let b: Vec<usize> = {
            let mut r = bank.for_stage(StageSlot::InvalidAges);
            (0..16).map(|_| r.below(1_000_000)).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn sample_indices_are_distinct_and_in_range() {
        let mut rng = RngBank::new(7).for_stage(StageSlot::InvalidPrices);
        let mut picked = rng.sample_indices(50, 20);
        assert_eq!(picked.len(), 20);
        assert!(picked.iter().all(|&i| i < 50));
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 20);
    }

    #[test]
    fn weighted_pick_respects_zero_weight() {
        let mut rng = RngBank::new(1).for_stage(StageSlot::Synthesis);
        let items = ["never", "always"];
        for _ in 0..200 {
            assert_eq!(*rng.pick_weighted(&items, &[0.0, 1.0]), "always");
        }
    }
}
