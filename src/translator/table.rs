//! Table builder: geometry pre-scan of a table group and the row/column cursor.

use super::error::{ConversionWarning, Result, TranslateError};
use super::walker::{Translator, VisitAction};
use crate::doctree::{Node, NodeKind};
use crate::models::common::{Emu, Frame};

/// What a table group declares about itself, gathered before any row is visited.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableGeometry {
    pub rows: usize,
    pub columns: usize,
    /// One weight per column, in percent of the table width.
    pub weights: Vec<f64>,
    /// Columns whose weight had to be assumed.
    pub assumed_weights: usize,
}

impl TableGeometry {
    /// Column count comes from the `cols` attribute, then the colspecs, then the
    /// widest row. Rows are counted across header and body groups.
    pub(crate) fn scan(group: &Node) -> Self {
        let colspecs: Vec<&Node> = group.children_of(&NodeKind::ColSpec).collect();
        let rows: Vec<&Node> = group
            .children
            .iter()
            .flat_map(|child| match child.kind {
                NodeKind::THead | NodeKind::TBody => child.children_of(&NodeKind::Row).collect(),
                NodeKind::Row => vec![child],
                _ => Vec::new(),
            })
            .collect();

        let widest_row = rows
            .iter()
            .map(|row| row.children_of(&NodeKind::Entry).count())
            .max()
            .unwrap_or(0);
        let columns = group
            .attr_usize("cols")
            .filter(|&cols| cols > 0)
            .unwrap_or(if colspecs.is_empty() { widest_row } else { colspecs.len() });

        let fallback = if columns == 0 { 0.0 } else { 100.0 / columns as f64 };
        let mut assumed_weights = 0;
        let weights = (0..columns)
            .map(|i| {
                colspecs
                    .get(i)
                    .and_then(|spec| spec.attr_f64("colwidth"))
                    .unwrap_or_else(|| {
                        assumed_weights += 1;
                        fallback
                    })
            })
            .collect();

        Self {
            rows: rows.len(),
            columns,
            weights,
            assumed_weights,
        }
    }

    /// Width of column `i` for a table `total` EMU wide.
    pub(crate) fn column_width(&self, i: usize, total: Emu) -> Emu {
        let weight = self.weights.get(i).copied().unwrap_or(0.0);
        (weight / 100.0 * total as f64).round() as Emu
    }
}

/// Position of the builder inside the table being filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableCursor {
    /// Page element index of the table on the current slide.
    pub element: usize,
    rows: usize,
    columns: usize,
    next_row: usize,
    row: Option<usize>,
    column: usize,
    /// Set while an entry that fits the grid is being written.
    entry_open: bool,
}

impl TableCursor {
    pub(crate) fn new(element: usize, rows: usize, columns: usize) -> Self {
        Self {
            element,
            rows,
            columns,
            next_row: 0,
            row: None,
            column: 0,
            entry_open: false,
        }
    }

    pub(crate) fn enter_row(&mut self) {
        self.row = Some(self.next_row);
        self.next_row += 1;
        self.column = 0;
    }

    pub(crate) fn exit_row(&mut self) -> Result<()> {
        self.row.take().ok_or_else(|| TranslateError::OutsideRow {
            tag: NodeKind::Row.tag().to_string(),
        })?;
        Ok(())
    }

    /// Opens the entry at the cursor. Returns false when it falls outside the grid.
    pub(crate) fn open_entry(&mut self) -> Result<bool> {
        let row = self.row.ok_or_else(|| TranslateError::OutsideRow {
            tag: NodeKind::Entry.tag().to_string(),
        })?;
        self.entry_open = row < self.rows && self.column < self.columns;
        Ok(self.entry_open)
    }

    /// Closes the entry and moves past the columns it spans.
    pub(crate) fn close_entry(&mut self, morecols: usize) {
        self.entry_open = false;
        self.column += 1 + morecols;
    }

    /// The cell text is being written to, if any.
    pub(crate) fn active_cell(&self) -> Option<(usize, usize)> {
        match (self.entry_open, self.row) {
            (true, Some(row)) => Some((row, self.column)),
            _ => None,
        }
    }

    pub(crate) fn position(&self) -> (Option<usize>, usize) {
        (self.row, self.column)
    }
}

impl Translator<'_> {
    pub(super) fn enter_table_group(&mut self, group: &Node) -> Result<VisitAction> {
        if self.state.table.is_some() {
            return Ok(self.skip_table("nested tables are not supported".into()));
        }
        if self.deck.current_slide().is_none() {
            self.warn(ConversionWarning::NoSlide {
                tag: group.kind.tag().to_string(),
            });
            self.state.skipped_tables += 1;
            return Ok(VisitAction::SkipChildren);
        }

        let geometry = TableGeometry::scan(group);
        if geometry.rows == 0 || geometry.columns == 0 {
            return Ok(self.skip_table(format!(
                "{} rows x {} columns",
                geometry.rows, geometry.columns
            )));
        }
        if geometry.assumed_weights > 0 {
            self.warn(ConversionWarning::MalformedTable {
                reason: format!(
                    "{} of {} columns have no width; assuming equal shares",
                    geometry.assumed_weights, geometry.columns
                ),
            });
        }

        let body = self.body_index();
        let row_height = self.config.table_row_height;
        let slide = self
            .deck
            .current_slide_mut()
            .ok_or_else(|| TranslateError::MissingRegion("slide".into()))?;
        let region = slide
            .body_mut(body)
            .ok_or_else(|| TranslateError::MissingRegion(format!("body {body}")))?;

        let height = (geometry.rows as Emu * row_height).min(region.frame.height);
        let frame = Frame::new(region.frame.left, region.frame.top, region.frame.width, height);
        region.frame.top += height;
        region.frame.height -= height;

        let element = slide.add_table(geometry.rows, geometry.columns, frame);
        if let Some(table) = slide.element_mut(element).and_then(|e| e.as_table_mut()) {
            for column in 0..geometry.columns {
                table.set_column_width(column, geometry.column_width(column, frame.width));
            }
        }
        log::debug!(
            "Table {}x{} at element {} on {}",
            geometry.rows,
            geometry.columns,
            element,
            slide.object_id
        );

        self.state.table = Some(TableCursor::new(element, geometry.rows, geometry.columns));
        Ok(VisitAction::Continue)
    }

    pub(super) fn exit_table_group(&mut self) -> Result<()> {
        if self.state.skipped_tables > 0 {
            self.state.skipped_tables -= 1;
            return Ok(());
        }
        self.state.table.take().ok_or_else(|| TranslateError::OutsideTable {
            tag: NodeKind::TGroup.tag().to_string(),
        })?;
        Ok(())
    }

    pub(super) fn enter_row(&mut self) -> Result<()> {
        self.cursor_mut(&NodeKind::Row)?.enter_row();
        Ok(())
    }

    pub(super) fn exit_row(&mut self) -> Result<()> {
        self.cursor_mut(&NodeKind::Row)?.exit_row()
    }

    /// Writes the flattened text of the entry into its cell.
    pub(super) fn enter_entry(&mut self, entry: &Node) -> Result<VisitAction> {
        let cursor = self.cursor_mut(&entry.kind)?;
        if !cursor.open_entry()? {
            let (row, column) = cursor.position();
            self.warn(ConversionWarning::MalformedTable {
                reason: format!("entry at row {row:?}, column {column} is outside the table"),
            });
            return Ok(VisitAction::SkipChildren);
        }
        self.emit_text(&entry.flattened_text())?;
        Ok(VisitAction::SkipChildren)
    }

    pub(super) fn exit_entry(&mut self, entry: &Node) -> Result<()> {
        let morecols = entry.attr_usize("morecols").unwrap_or(0);
        self.cursor_mut(&entry.kind)?.close_entry(morecols);
        Ok(())
    }

    fn cursor_mut(&mut self, kind: &NodeKind) -> Result<&mut TableCursor> {
        self.state
            .table
            .as_mut()
            .ok_or_else(|| TranslateError::OutsideTable {
                tag: kind.tag().to_string(),
            })
    }

    fn skip_table(&mut self, reason: String) -> VisitAction {
        self.warn(ConversionWarning::MalformedTable { reason });
        self.state.skipped_tables += 1;
        VisitAction::SkipChildren
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Node {
        Node::new(NodeKind::Entry)
            .with_child(Node::new(NodeKind::Paragraph).with_child(Node::text(text)))
    }

    fn row(cells: &[&str]) -> Node {
        Node::new(NodeKind::Row).with_children(cells.iter().map(|c| entry(c)))
    }

    #[test]
    fn scan_counts_header_and_body_rows() {
        let group = Node::new(NodeKind::TGroup)
            .with_attr("cols", "2")
            .with_child(Node::new(NodeKind::ColSpec).with_attr("colwidth", "30"))
            .with_child(Node::new(NodeKind::ColSpec).with_attr("colwidth", "70"))
            .with_child(Node::new(NodeKind::THead).with_child(row(&["a", "b"])))
            .with_child(Node::new(NodeKind::TBody).with_children([row(&["1", "2"]), row(&["3", "4"])]));

        let geometry = TableGeometry::scan(&group);
        assert_eq!((geometry.rows, geometry.columns), (3, 2));
        assert_eq!(geometry.weights, vec![30.0, 70.0]);
        assert_eq!(geometry.assumed_weights, 0);
        assert_eq!(geometry.column_width(1, 1000), 700);
    }

    #[test]
    fn missing_weights_fall_back_to_equal_shares() {
        let group = Node::new(NodeKind::TGroup)
            .with_child(Node::new(NodeKind::TBody).with_child(row(&["a", "b", "c", "d"])));

        let geometry = TableGeometry::scan(&group);
        assert_eq!(geometry.columns, 4);
        assert_eq!(geometry.weights, vec![25.0; 4]);
        assert_eq!(geometry.assumed_weights, 4);
    }

    #[test]
    fn cursor_advances_by_span() {
        let mut cursor = TableCursor::new(0, 2, 3);
        assert!(cursor.open_entry().is_err());

        cursor.enter_row();
        assert!(cursor.open_entry().unwrap());
        assert_eq!(cursor.active_cell(), Some((0, 0)));
        cursor.close_entry(1);
        assert!(cursor.open_entry().unwrap());
        assert_eq!(cursor.active_cell(), Some((0, 2)));
        cursor.close_entry(0);
        assert!(!cursor.open_entry().unwrap());
        assert_eq!(cursor.active_cell(), None);
        cursor.close_entry(0);
        cursor.exit_row().unwrap();

        assert_eq!(
            cursor.exit_row(),
            Err(TranslateError::OutsideRow { tag: "row".into() })
        );
    }
}
