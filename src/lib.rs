//! # unods
//!
//! Open Document spreadsheet (.ods) table extraction.
//!
//! An ODS file stores its sheets run-length compressed: one row element may
//! stand for many identical rows, one cell element for many identical cells,
//! and merged cells leave covered placeholders behind. This library opens the
//! container, decodes `content.xml` and expands every table into a dense grid
//! of strings.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Dense grids for every sheet
//! for (name, rows) in unods::read_tables("budget.ods")? {
//!     println!("{name}: {} rows", rows.len());
//! }
//!
//! // Full access to the decoded tree
//! let doc = unods::read_document("budget.ods")?;
//! if let Some(table) = doc.table("Sheet1") {
//!     println!("{} x {}", table.height(), table.width());
//!     for row in table.strings() {
//!         println!("{}", row.join("\t"));
//!     }
//! }
//! # Ok::<(), unods::Error>(())
//! ```
//!
//! ## Step by Step
//!
//! ```no_run
//! use unods::container::OdfContainer;
//! use unods::ods::Spreadsheet;
//!
//! // Any Open Document file
//! let container = OdfContainer::open("report.odt")?;
//! println!("{}", container.mime_type());
//! container.close();
//!
//! // Spreadsheets only
//! let mut sheet = Spreadsheet::open("budget.ods")?;
//! let doc = sheet.parse_content()?;
//! sheet.close();
//! # Ok::<(), unods::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod error;
pub mod model;
pub mod ods;
pub mod render;

#[cfg(test)]
mod testutil;

// Re-exports
pub use container::OdfContainer;
pub use detect::OdfKind;
pub use error::{Error, Result};
pub use model::{
    Cell, CellKind, Column, DenseRow, Document, GridOptions, Row, SpanPolicy, Table, WidthPolicy,
};
pub use ods::Spreadsheet;

use std::path::Path;

/// Open an ODS file, failing unless it is exactly a spreadsheet.
pub fn open_spreadsheet(path: impl AsRef<Path>) -> Result<Spreadsheet> {
    Spreadsheet::open(path)
}

/// Open an ODS file and decode its tables.
///
/// # Example
///
/// ```no_run
/// let doc = unods::read_document("budget.ods")?;
/// println!("Tables: {:?}", doc.table_names());
/// # Ok::<(), unods::Error>(())
/// ```
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let mut sheet = Spreadsheet::open(path)?;
    let doc = sheet.parse_content()?;
    sheet.close();
    Ok(doc)
}

/// Decode the tables of an ODS file held in memory.
pub fn read_document_bytes(data: &[u8]) -> Result<Document> {
    let mut sheet = Spreadsheet::from_bytes(data.to_vec())?;
    let doc = sheet.parse_content()?;
    sheet.close();
    Ok(doc)
}

/// Open an ODS file and expand every table into its dense grid.
///
/// Tables come back in document order as `(name, rows)` pairs.
pub fn read_tables(path: impl AsRef<Path>) -> Result<Vec<(String, Vec<DenseRow>)>> {
    let doc = read_document(path)?;
    Ok(doc
        .tables
        .into_iter()
        .map(|table| {
            let rows = table.strings();
            (table.name, rows)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{build_ods, content_xml};

    #[test]
    fn test_read_document_bytes() {
        let xml = content_xml(
            r#"<table:table table:name="Sheet1">
                 <table:table-row><table:table-cell><text:p>a</text:p></table:table-cell></table:table-row>
               </table:table>
               <table:table table:name="Sheet2"/>"#,
        );
        let doc = read_document_bytes(&build_ods(&xml)).unwrap();
        assert_eq!(doc.table_names(), vec!["Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_read_document_bytes_rejects_garbage() {
        assert!(matches!(
            read_document_bytes(b"not an ods"),
            Err(Error::NotAnArchive(_))
        ));
    }
}
