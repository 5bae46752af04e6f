//! The corruption log: what each pass actually touched.
//!
//! RULE: every corruption pass returns exactly one event describing its
//! mutations. The pipeline keeps them in pass order.

use crate::types::{Cell, Column};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CorruptionEvent {
    NullsInjected {
        /// Column and the rows set to missing, in column draw order.
        columns: Vec<(Column, Vec<usize>)>,
    },
    AgesInvalidated {
        rows: Vec<(usize, Cell)>,
    },
    TyposInjected {
        /// (column, row, typo). Rows may repeat.
        edits: Vec<(Column, usize, String)>,
    },
    PricesInvalidated {
        rows: Vec<(usize, Cell)>,
    },
    SegmentMismatchInjected {
        /// Every selected row, including the ones left untouched.
        selected: Vec<usize>,
        /// Kid rows rewritten, with the occasion they received.
        mutated: Vec<(usize, String)>,
    },
    RowsDuplicated {
        /// (source, target), in copy order.
        copies: Vec<(usize, usize)>,
        /// How many copies were pushed past the end instead of overwriting.
        appended: usize,
    },
    MixedTypesInjected {
        rows: Vec<(usize, Cell)>,
    },
}

impl CorruptionEvent {
    /// Stable name used in logs and the run summary.
    pub fn pass_name(&self) -> &'static str {
        match self {
            Self::NullsInjected { .. } => "random_nulls",
            Self::AgesInvalidated { .. } => "invalid_ages",
            Self::TyposInjected { .. } => "typos",
            Self::PricesInvalidated { .. } => "invalid_prices",
            Self::SegmentMismatchInjected { .. } => "segment_mismatch",
            Self::RowsDuplicated { .. } => "duplicate_rows",
            Self::MixedTypesInjected { .. } => "mixed_types",
        }
    }

    /// Number of cell or row writes the pass performed.
    pub fn mutation_count(&self) -> usize {
        match self {
            Self::NullsInjected { columns } => columns.iter().map(|(_, rows)| rows.len()).sum(),
            Self::AgesInvalidated { rows }
            | Self::PricesInvalidated { rows }
            | Self::MixedTypesInjected { rows } => rows.len(),
            Self::TyposInjected { edits } => edits.len(),
            Self::SegmentMismatchInjected { mutated, .. } => mutated.len(),
            Self::RowsDuplicated { copies, .. } => copies.len(),
        }
    }
}
