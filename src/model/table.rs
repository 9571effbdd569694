//! Table model structures and their dense string views.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One visual row of a dense table.
///
/// Every repetition of a repeated row shares the same allocation.
pub type DenseRow = Arc<[String]>;

/// Effective repeat count: an absent or zero count means no repetition.
pub(crate) fn effective_repeat(declared: u32) -> u32 {
    declared.max(1)
}

/// Whether a cell holds content or stands in for a merged-away position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Normal,
    /// Position consumed by a preceding spanning cell.
    Covered,
}

/// A cell as it appears in the source, before repeat expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Normal or covered placeholder
    #[serde(default, skip_serializing_if = "is_normal")]
    pub kind: CellKind,

    /// Horizontal repeat count (normalized to at least 1)
    #[serde(default = "default_count", skip_serializing_if = "is_default_count")]
    pub repeat: u32,

    /// Number of columns spanned (informational)
    #[serde(default = "default_count", skip_serializing_if = "is_default_count")]
    pub span: u32,

    /// Paragraph texts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,

    /// Raw `value-type` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Raw `value` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Raw `formula` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

fn default_count() -> u32 {
    1
}

fn is_default_count(n: &u32) -> bool {
    *n == 1
}

fn is_normal(kind: &CellKind) -> bool {
    *kind == CellKind::Normal
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::Normal,
            repeat: 1,
            span: 1,
            paragraphs: Vec::new(),
            value_type: None,
            value: None,
            formula: None,
        }
    }
}

impl Cell {
    /// Create a new empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell with a single paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![text.into()],
            ..Default::default()
        }
    }

    /// Create a covered placeholder cell.
    pub fn covered() -> Self {
        Self {
            kind: CellKind::Covered,
            ..Default::default()
        }
    }

    /// Set the horizontal repeat count.
    pub fn repeated(mut self, count: u32) -> Self {
        self.repeat = effective_repeat(count);
        self
    }

    /// Set the column span.
    pub fn spanning(mut self, columns: u32) -> Self {
        self.span = effective_repeat(columns);
        self
    }

    /// Check if this is a covered placeholder.
    pub fn is_covered(&self) -> bool {
        self.kind == CellKind::Covered
    }

    /// Number of visual columns this cell fills.
    pub fn repeat_count(&self) -> usize {
        effective_repeat(self.repeat) as usize
    }

    /// Paragraphs joined by newlines, whatever the cell kind.
    pub fn paragraph_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// The rendered value: empty for covered cells, otherwise the paragraph text.
    pub fn text(&self) -> String {
        match self.kind {
            CellKind::Covered => String::new(),
            CellKind::Normal => self.paragraph_text(),
        }
    }
}

/// A row as it appears in the source, before repeat expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Vertical repeat count (normalized to at least 1)
    #[serde(default = "default_count", skip_serializing_if = "is_default_count")]
    pub repeat: u32,

    /// Cells in source order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            repeat: 1,
            cells: Vec::new(),
        }
    }
}

/// A spanning cell not followed by enough covered placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanMismatch {
    /// Visual column of the spanning cell
    pub column: usize,
    /// Declared span
    pub spanned: u32,
    /// Covered placeholders actually following it
    pub covered: u32,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cells.
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    /// Set the vertical repeat count.
    pub fn repeated(mut self, count: u32) -> Self {
        self.repeat = effective_repeat(count);
        self
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Number of visual rows this row fills.
    pub fn repeat_count(&self) -> usize {
        effective_repeat(self.repeat) as usize
    }

    /// Visual width of this row after cell repeats are expanded.
    ///
    /// This is local to the row and may differ from [`Table::width`].
    pub fn width(&self) -> usize {
        self.cells.iter().map(Cell::repeat_count).sum()
    }

    /// Expand the row into one string per visual column.
    ///
    /// Covered cells render as empty strings. Column spans are not expanded:
    /// the covered placeholders that follow a spanning cell in the source
    /// already occupy the spanned columns.
    pub fn strings(&self) -> Vec<String> {
        if self.cells.is_empty() {
            return Vec::new();
        }

        let mut row = Vec::with_capacity(self.width());
        for cell in &self.cells {
            row.extend(std::iter::repeat_n(cell.text(), cell.repeat_count()));
        }
        row
    }

    /// Check if every visual cell of this row is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.text().is_empty())
    }

    /// Find the first spanning cell not followed by `span - 1` covered cells.
    pub fn span_mismatch(&self) -> Option<SpanMismatch> {
        let mut column = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            if !cell.is_covered() && cell.span > 1 {
                let covered: u32 = self.cells[idx + 1..]
                    .iter()
                    .take_while(|c| c.is_covered())
                    .map(|c| effective_repeat(c.repeat))
                    .sum();
                if covered < cell.span - 1 {
                    return Some(SpanMismatch {
                        column,
                        spanned: cell.span,
                        covered,
                    });
                }
            }
            column += cell.repeat_count();
        }
        None
    }
}

/// A column definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Number of columns this definition stands for (normalized to at least 1)
    #[serde(default = "default_count")]
    pub repeat: u32,
}

impl Default for Column {
    fn default() -> Self {
        Self { repeat: 1 }
    }
}

/// A named table (one sheet of a spreadsheet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Column definitions in source order
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Rows in source order
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a column definition.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Add a row to this table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Declared width: the number of column definitions.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Declared width with column repeats expanded.
    pub fn declared_columns(&self) -> usize {
        self.columns
            .iter()
            .map(|c| effective_repeat(c.repeat) as usize)
            .sum()
    }

    /// Number of visual rows after row repeats are expanded.
    pub fn height(&self) -> usize {
        self.rows.iter().map(Row::repeat_count).sum()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Expand the table into its dense grid.
    ///
    /// Each source row is expanded once; its repetitions share that value.
    /// Row widths are left as each row defines them.
    pub fn strings(&self) -> Vec<DenseRow> {
        let mut grid = Vec::with_capacity(self.height());
        for row in &self.rows {
            let dense: DenseRow = row.strings().into();
            grid.extend(std::iter::repeat_n(dense, row.repeat_count()));
        }
        grid
    }

    /// Check if any cell in the table spans more than one column.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .any(|r| r.cells.iter().any(|c| !c.is_covered() && c.span > 1))
    }
}
