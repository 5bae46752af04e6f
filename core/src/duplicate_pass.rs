//! Duplicate rows: copies of rows from a fixed index window written
//! `offset` rows further down.
//!
//! When the window lies inside the table, each copy OVERWRITES row
//! `source + offset`. A target at or past the end of the table as it stood
//! before the pass is appended instead. On a table shorter than the window
//! the window is clamped to the table (the whole table if the clamped
//! window cannot supply `count` rows) and every copy is appended.
//!
//! Draws: one distinct-index sample from the window.

use crate::{
    config::CorruptionConfig,
    error::ForgeResult,
    event::CorruptionEvent,
    pass::{clamp_rows, CorruptionPass},
    rng::StageRng,
    table::Table,
};

pub struct DuplicateRowsPass {
    pub count: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub offset: usize,
}

impl DuplicateRowsPass {
    pub fn from_config(config: &CorruptionConfig) -> Self {
        Self {
            count: config.duplicate_count,
            window_start: config.duplicate_window_start,
            window_end: config.duplicate_window_end,
            offset: config.duplicate_offset,
        }
    }

    /// Whether the configured window lies inside a table of `len` rows.
    pub fn window_fits(&self, len: usize) -> bool {
        self.window_start < self.window_end && self.window_end <= len
    }

    /// The `[start, end)` range sources are drawn from for a table of `len` rows.
    pub fn source_window(&self, len: usize) -> (usize, usize) {
        if self.window_fits(len) {
            return (self.window_start, self.window_end);
        }
        let start = self.window_start.min(len);
        let end = self.window_end.min(len).max(start);
        if end - start >= self.count {
            (start, end)
        } else {
            (0, len)
        }
    }
}

impl CorruptionPass for DuplicateRowsPass {
    fn name(&self) -> &'static str {
        "duplicate_rows"
    }

    fn apply(&self, mut table: Table, rng: &mut StageRng) -> ForgeResult<(Table, CorruptionEvent)> {
        let len = table.len();
        let fits = self.window_fits(len);
        let (start, end) = self.source_window(len);
        let amount = clamp_rows(self.name(), self.count, end - start);
        let sources: Vec<usize> = rng
            .sample_indices(end - start, amount)
            .into_iter()
            .map(|i| start + i)
            .collect();

        let mut copies = Vec::with_capacity(sources.len());
        for source in sources {
            let target = source + self.offset;
            let target = if fits && target < len {
                table.copy_row(source, target);
                target
            } else {
                let copy = table.row(source).to_vec();
                table.push_row(copy);
                table.len() - 1
            };
            copies.push((source, target));
        }

        let appended = copies.iter().filter(|(_, target)| *target >= len).count();
        if appended > 0 {
            log::warn!(
                "{}: table has {} rows, short of window {}..{} + {}; appended {} copies",
                self.name(),
                len,
                self.window_start,
                self.window_end,
                self.offset,
                appended
            );
        }
        Ok((table, CorruptionEvent::RowsDuplicated { copies, appended }))
    }
}
