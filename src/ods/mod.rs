//! ODS (Open Document spreadsheet) support.
//!
//! # Example
//!
//! ```no_run
//! use unods::ods::Spreadsheet;
//!
//! let mut sheet = Spreadsheet::open("budget.ods")?;
//! let doc = sheet.parse_content()?;
//!
//! for table in doc.tables() {
//!     println!("{}: {} x {}", table.name, table.height(), table.width());
//! }
//! # Ok::<(), unods::Error>(())
//! ```

mod content;
mod parser;

pub use content::{decode_content, decode_content_str, parse_content};
pub use parser::Spreadsheet;
