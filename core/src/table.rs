//! The in-memory dataset: ordered rows over the fixed column schema.

use crate::{
    synthesizer::CustomerRecord,
    types::{Cell, Column},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Assemble records into a table, keeping generation order.
    pub fn from_records(records: Vec<CustomerRecord>) -> Self {
        Self {
            rows: records.into_iter().map(CustomerRecord::into_row).collect(),
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        &Column::ALL
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[Cell] {
        &self.rows[index]
    }

    pub fn get(&self, row: usize, column: Column) -> &Cell {
        &self.rows[row][column.index()]
    }

    pub fn set(&mut self, row: usize, column: Column, cell: Cell) {
        self.rows[row][column.index()] = cell;
    }

    /// Overwrite row `target` with a copy of row `source`.
    pub fn copy_row(&mut self, source: usize, target: usize) {
        let copy = self.rows[source].clone();
        self.rows[target] = copy;
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(row.len(), Column::ALL.len(), "row width mismatch");
        self.rows.push(row);
    }

    pub fn column_cells(&self, column: Column) -> impl Iterator<Item = &Cell> + '_ {
        let idx = column.index();
        self.rows.iter().map(move |r| &r[idx])
    }

    pub fn missing_count(&self, column: Column) -> usize {
        self.column_cells(column).filter(|c| c.is_missing()).count()
    }

    /// Every cell rendered as text, with `na_rep` for missing markers.
    pub fn to_text_rows(&self, na_rep: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|c| c.render(na_rep)).collect())
            .collect()
    }

    /// String-coerced copy: every cell becomes `Cell::Text`, missing
    /// markers as `na_rep`.
    pub fn coerce_to_text(&self, na_rep: &str) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|r| r.iter().map(|c| Cell::Text(c.render(na_rep))).collect())
            .collect();
        Table { rows }
    }
}
