//! Output rendering for decoded spreadsheets.
//!
//! # Example
//!
//! ```no_run
//! use unods::{read_document, render::*};
//!
//! let doc = read_document("budget.ods")?;
//!
//! // Tab-separated text
//! let text = to_text(&doc, &RenderOptions::default())?;
//!
//! // Dense grids as JSON
//! let json = tables_to_json(&doc, &RenderOptions::default(), JsonFormat::Pretty)?;
//! # Ok::<(), unods::Error>(())
//! ```

mod json;
mod options;
mod text;

pub use json::{tables_to_json, to_json, JsonFormat};
pub use options::{RenderOptions, TextLayout};
pub use text::to_text;
