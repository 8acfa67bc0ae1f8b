use serde::{Deserialize, Serialize};

use crate::models::colors::RgbColor;
use crate::models::common::Emu;
use crate::models::text::TextFrame;

/// Properties and contents of each cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// The text content of the cell.
    pub text: TextFrame,
    /// Solid background fill of the cell, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<RgbColor>,
}

/// Contents of one table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub table_cells: Vec<TableCell>,
}

/// A page element kind representing a table.
/// Row and column counts are fixed when the table is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of rows in the table.
    pub rows: usize,
    /// Number of columns in the table.
    pub columns: usize,
    /// Width of each column, in EMU.
    pub column_widths: Vec<Emu>,
    /// Properties and contents of each row.
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Creates an empty `rows` x `columns` grid with equal column widths.
    pub fn new(rows: usize, columns: usize, width: Emu) -> Self {
        let column_width = if columns == 0 { 0 } else { width / columns as Emu };
        Self {
            rows,
            columns,
            column_widths: vec![column_width; columns],
            table_rows: (0..rows)
                .map(|_| TableRow {
                    table_cells: vec![TableCell::default(); columns],
                })
                .collect(),
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.table_rows.get(row)?.table_cells.get(column)
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.table_rows.get_mut(row)?.table_cells.get_mut(column)
    }

    /// Sets the width of one column; out of range indices are ignored.
    pub fn set_column_width(&mut self, column: usize, width: Emu) {
        if let Some(slot) = self.column_widths.get_mut(column) {
            *slot = width;
        }
    }
}
