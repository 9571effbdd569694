//! Error types for the unods library.

use std::io;
use thiserror::Error;

/// Result type alias for unods operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or decoding an Open Document file.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be read as a ZIP archive.
    #[error("Not a ZIP archive: {0}")]
    NotAnArchive(String),

    /// The archive has no `mimetype` member.
    #[error("Missing mimetype member")]
    MissingMimeType,

    /// The `mimetype` member does not name an Open Document type.
    #[error("Not an Open Document mime type: {0:?}")]
    WrongMimeType(String),

    /// The container is an Open Document file but not a spreadsheet.
    #[error("Not a spreadsheet: {0}")]
    NotASpreadsheet(String),

    /// A named archive member does not exist.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// A named archive member exists but could not be opened.
    #[error("Cannot open member {name}: {reason}")]
    MemberOpenFailed { name: String, reason: String },

    /// The content payload is not a well-formed document.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A spanning cell is not followed by enough covered cells.
    #[error(
        "Inconsistent span in table {table:?}, row {row}, column {column}: \
         spans {spanned} columns but {covered} covered cells follow"
    )]
    InconsistentSpan {
        table: String,
        row: usize,
        column: usize,
        spanned: u32,
        covered: u32,
    },

    /// Error during JSON rendering.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
