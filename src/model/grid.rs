//! Option-driven shaping of dense table grids.

use super::table::{DenseRow, Table};
use crate::error::{Error, Result};
use tracing::warn;

/// How to treat a spanning cell that is not followed by enough covered cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanPolicy {
    /// Accept the row as written; the row ends up narrower than the span implies
    #[default]
    Permissive,
    /// Fail with [`Error::InconsistentSpan`]
    Strict,
}

/// How to reconcile rows whose widths differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Keep each row at its own width
    #[default]
    AsIs,
    /// Pad short rows with empty strings up to the widest row
    PadToWidest,
    /// Pad short rows up to the declared column count (column repeats expanded)
    PadToDeclared,
}

/// Options for [`Table::grid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Span consistency handling
    pub span_policy: SpanPolicy,

    /// Row width reconciliation
    pub width: WidthPolicy,

    /// Drop trailing blank rows and trailing blank columns
    pub trim_trailing_empty: bool,
}

impl GridOptions {
    /// Create default options: permissive, unpadded, untrimmed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span policy.
    pub fn with_span_policy(mut self, policy: SpanPolicy) -> Self {
        self.span_policy = policy;
        self
    }

    /// Set the width policy.
    pub fn with_width(mut self, policy: WidthPolicy) -> Self {
        self.width = policy;
        self
    }

    /// Enable or disable trimming of the blank tail.
    pub fn with_trim_trailing_empty(mut self, trim: bool) -> Self {
        self.trim_trailing_empty = trim;
        self
    }
}

impl Table {
    /// Expand the table into a dense grid shaped by `options`.
    ///
    /// With default options this equals [`Table::strings`].
    ///
    /// # Example
    ///
    /// ```
    /// use unods::{Cell, GridOptions, Row, Table, WidthPolicy};
    ///
    /// let mut table = Table::new("Sheet1");
    /// table.add_row(Row::with_cells(vec![Cell::with_text("a"), Cell::with_text("b")]));
    /// table.add_row(Row::with_cells(vec![Cell::with_text("c")]));
    ///
    /// let grid = table.grid(&GridOptions::new().with_width(WidthPolicy::PadToWidest))?;
    /// assert_eq!(grid[1].to_vec(), vec!["c", ""]);
    /// # Ok::<(), unods::Error>(())
    /// ```
    pub fn grid(&self, options: &GridOptions) -> Result<Vec<DenseRow>> {
        self.check_spans(options.span_policy)?;

        let mut rows: Vec<(Vec<String>, usize)> = self
            .rows
            .iter()
            .map(|row| (row.strings(), row.repeat_count()))
            .collect();

        if options.trim_trailing_empty {
            while rows
                .last()
                .is_some_and(|(cells, _)| cells.iter().all(String::is_empty))
            {
                rows.pop();
            }
            let content_width = rows
                .iter()
                .filter_map(|(cells, _)| cells.iter().rposition(|c| !c.is_empty()))
                .map(|last| last + 1)
                .max()
                .unwrap_or(0);
            for (cells, _) in &mut rows {
                cells.truncate(content_width);
            }
        }

        let target = match options.width {
            WidthPolicy::AsIs => None,
            WidthPolicy::PadToWidest => rows.iter().map(|(cells, _)| cells.len()).max(),
            WidthPolicy::PadToDeclared => {
                let declared = self.declared_columns();
                if options.trim_trailing_empty {
                    let widest = rows.iter().map(|(cells, _)| cells.len()).max().unwrap_or(0);
                    Some(declared.min(widest))
                } else {
                    Some(declared)
                }
            }
        };

        let height = rows.iter().map(|(_, repeat)| repeat).sum();
        let mut grid = Vec::with_capacity(height);
        for (mut cells, repeat) in rows {
            if let Some(width) = target {
                if cells.len() < width {
                    cells.resize(width, String::new());
                }
            }
            let dense: DenseRow = cells.into();
            grid.extend(std::iter::repeat_n(dense, repeat));
        }
        Ok(grid)
    }

    fn check_spans(&self, policy: SpanPolicy) -> Result<()> {
        let mut visual_row = 0;
        for row in &self.rows {
            if let Some(mismatch) = row.span_mismatch() {
                match policy {
                    SpanPolicy::Strict => {
                        return Err(Error::InconsistentSpan {
                            table: self.name.clone(),
                            row: visual_row,
                            column: mismatch.column,
                            spanned: mismatch.spanned,
                            covered: mismatch.covered,
                        });
                    }
                    SpanPolicy::Permissive => {
                        warn!(
                            table = %self.name,
                            row = visual_row,
                            column = mismatch.column,
                            spanned = mismatch.spanned,
                            covered = mismatch.covered,
                            "spanning cell lacks covered cells"
                        );
                    }
                }
            }
            visual_row += row.repeat_count();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Column, Row};

    fn as_vecs(grid: &[DenseRow]) -> Vec<Vec<&str>> {
        grid.iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    fn ragged_table() -> Table {
        let mut table = Table::new("Data");
        table.add_column(Column { repeat: 4 });
        table.add_row(Row::with_cells(vec![Cell::with_text("a"), Cell::with_text("b")]));
        table.add_row(Row::with_cells(vec![Cell::with_text("c")]).repeated(2));
        table
    }

    #[test]
    fn test_default_matches_strings() {
        let table = ragged_table();
        assert_eq!(table.grid(&GridOptions::default()).unwrap(), table.strings());
    }

    #[test]
    fn test_pad_to_widest() {
        let table = ragged_table();
        let grid = table
            .grid(&GridOptions::new().with_width(WidthPolicy::PadToWidest))
            .unwrap();
        assert_eq!(
            as_vecs(&grid),
            vec![vec!["a", "b"], vec!["c", ""], vec!["c", ""]]
        );
        assert!(std::sync::Arc::ptr_eq(&grid[1], &grid[2]));
    }

    #[test]
    fn test_pad_to_declared() {
        let table = ragged_table();
        let grid = table
            .grid(&GridOptions::new().with_width(WidthPolicy::PadToDeclared))
            .unwrap();
        assert!(grid.iter().all(|r| r.len() == 4));
        assert_eq!(as_vecs(&grid)[0], vec!["a", "b", "", ""]);
    }

    #[test]
    fn test_trim_trailing_empty() {
        let mut table = Table::new("Sheet1");
        table.add_column(Column { repeat: 1024 });
        table.add_row(Row::with_cells(vec![
            Cell::with_text("x"),
            Cell::new(),
            Cell::with_text("y"),
            Cell::new().repeated(1021),
        ]));
        table.add_row(Row::with_cells(vec![Cell::new().repeated(1024)]).repeated(1_048_575));

        let options = GridOptions::new()
            .with_trim_trailing_empty(true)
            .with_width(WidthPolicy::PadToDeclared);
        let grid = table.grid(&options).unwrap();
        assert_eq!(as_vecs(&grid), vec![vec!["x", "", "y"]]);
    }

    #[test]
    fn test_trim_keeps_inner_blank_rows() {
        let mut table = Table::new("Sheet1");
        table.add_row(Row::with_cells(vec![Cell::with_text("top")]));
        table.add_row(Row::new().repeated(2));
        table.add_row(Row::with_cells(vec![Cell::new(), Cell::with_text("bottom")]));
        table.add_row(Row::with_cells(vec![Cell::new().repeated(5)]));

        let options = GridOptions::new()
            .with_trim_trailing_empty(true)
            .with_width(WidthPolicy::PadToWidest);
        let grid = table.grid(&options).unwrap();
        assert_eq!(
            as_vecs(&grid),
            vec![
                vec!["top", ""],
                vec!["", ""],
                vec!["", ""],
                vec!["", "bottom"]
            ]
        );
    }

    #[test]
    fn test_strict_span() {
        let mut table = Table::new("Merged");
        table.add_row(Row::with_cells(vec![Cell::with_text("ok")]).repeated(3));
        table.add_row(Row::with_cells(vec![
            Cell::with_text("a"),
            Cell::with_text("wide").spanning(3),
            Cell::covered(),
        ]));

        let err = table
            .grid(&GridOptions::new().with_span_policy(SpanPolicy::Strict))
            .unwrap_err();
        match err {
            Error::InconsistentSpan {
                table,
                row,
                column,
                spanned,
                covered,
            } => {
                assert_eq!(table, "Merged");
                assert_eq!(row, 3);
                assert_eq!(column, 1);
                assert_eq!(spanned, 3);
                assert_eq!(covered, 1);
            }
            other => panic!("expected InconsistentSpan, got {other:?}"),
        }

        // Permissive keeps the row as written.
        let grid = table.grid(&GridOptions::default()).unwrap();
        assert_eq!(as_vecs(&grid)[3], vec!["a", "wide", ""]);
    }

    #[test]
    fn test_strict_span_accepts_consistent_rows() {
        let mut table = Table::new("Merged");
        table.add_row(Row::with_cells(vec![
            Cell::with_text("Merged").spanning(2),
            Cell::covered(),
        ]));
        let grid = table
            .grid(&GridOptions::new().with_span_policy(SpanPolicy::Strict))
            .unwrap();
        assert_eq!(as_vecs(&grid), vec![vec!["Merged", ""]]);
    }
}
