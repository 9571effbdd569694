//! Open Document kind detection from the `mimetype` member.

use crate::container::{OdfContainer, MIME_TYPE_PREFIX};
use crate::error::Result;
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Detected Open Document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdfKind {
    /// Spreadsheet (.ods)
    Spreadsheet,
    /// Text document (.odt)
    Text,
    /// Presentation (.odp)
    Presentation,
    /// Drawing (.odg)
    Graphics,
    /// Any other Open Document type (templates, formulas, charts, ...)
    Other,
}

impl OdfKind {
    /// Classify a mime type that already carries the Open Document prefix.
    ///
    /// Only exact matches are classified; templates such as
    /// `spreadsheet-template` are [`OdfKind::Other`].
    pub fn from_mime_type(mime_type: &str) -> Self {
        match mime_type.strip_prefix(MIME_TYPE_PREFIX) {
            Some("spreadsheet") => OdfKind::Spreadsheet,
            Some("text") => OdfKind::Text,
            Some("presentation") => OdfKind::Presentation,
            Some("graphics") => OdfKind::Graphics,
            _ => OdfKind::Other,
        }
    }

    /// Returns the file extension for this kind.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OdfKind::Spreadsheet => Some("ods"),
            OdfKind::Text => Some("odt"),
            OdfKind::Presentation => Some("odp"),
            OdfKind::Graphics => Some("odg"),
            OdfKind::Other => None,
        }
    }

    /// Returns a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            OdfKind::Spreadsheet => "Open Document Spreadsheet",
            OdfKind::Text => "Open Document Text",
            OdfKind::Presentation => "Open Document Presentation",
            OdfKind::Graphics => "Open Document Drawing",
            OdfKind::Other => "Open Document",
        }
    }
}

impl std::fmt::Display for OdfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl OdfContainer {
    /// The kind of document this container holds.
    pub fn kind(&self) -> OdfKind {
        OdfKind::from_mime_type(self.mime_type())
    }
}

/// Detect the Open Document kind of a file.
///
/// # Example
///
/// ```no_run
/// use unods::detect::{detect_kind_from_path, OdfKind};
///
/// if detect_kind_from_path("budget.ods")? == OdfKind::Spreadsheet {
///     println!("spreadsheet");
/// }
/// # Ok::<(), unods::Error>(())
/// ```
pub fn detect_kind_from_path(path: impl AsRef<Path>) -> Result<OdfKind> {
    let container = OdfContainer::open(path)?;
    let kind = container.kind();
    container.close();
    Ok(kind)
}

/// Detect the Open Document kind of an in-memory file.
pub fn detect_kind_from_bytes(data: &[u8]) -> Result<OdfKind> {
    let container = OdfContainer::from_bytes(data.to_vec())?;
    let kind = container.kind();
    container.close();
    Ok(kind)
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testutil::build_zip;

    #[test]
    fn test_kind_from_mime_type() {
        assert_eq!(
            OdfKind::from_mime_type("application/vnd.oasis.opendocument.spreadsheet"),
            OdfKind::Spreadsheet
        );
        assert_eq!(
            OdfKind::from_mime_type("application/vnd.oasis.opendocument.text"),
            OdfKind::Text
        );
        assert_eq!(
            OdfKind::from_mime_type("application/vnd.oasis.opendocument.spreadsheet-template"),
            OdfKind::Other
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OdfKind::Spreadsheet.to_string(), "Open Document Spreadsheet");
        assert_eq!(OdfKind::Spreadsheet.extension(), Some("ods"));
        assert_eq!(OdfKind::Other.extension(), None);
    }

    #[test]
    fn test_is_zip_file() {
        assert!(is_zip_file(&[0x50, 0x4B, 0x03, 0x04, 0x00]));
        assert!(!is_zip_file(&[0x00, 0x00, 0x00, 0x00]));
        assert!(!is_zip_file(&[0x50, 0x4B])); // Too short
    }

    #[test]
    fn test_detect_from_bytes() {
        let data = build_zip(&[("mimetype", "application/vnd.oasis.opendocument.presentation")]);
        assert_eq!(detect_kind_from_bytes(&data).unwrap(), OdfKind::Presentation);

        let result = detect_kind_from_bytes(&[0x00, 0x00, 0x00, 0x00]);
        assert!(matches!(result, Err(Error::NotAnArchive(_))));
    }
}
