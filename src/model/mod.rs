//! Spreadsheet document model.
//!
//! The decoder fills these structures once from `content.xml`; nothing
//! mutates them afterwards. Dense string views are derived on request:
//! [`Row::strings`] expands cell repeats, [`Table::strings`] expands row
//! repeats, and [`Table::grid`] additionally applies [`GridOptions`].

mod document;
mod grid;
mod table;

pub use document::*;
pub use grid::*;
pub use table::*;
