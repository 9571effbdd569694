//! ZIP container abstraction for Open Document files.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::result::ZipError;

/// Prefix shared by every Open Document mime type.
pub const MIME_TYPE_PREFIX: &str = "application/vnd.oasis.opendocument.";

/// Mime type of an Open Document spreadsheet.
pub const SPREADSHEET_MIME_TYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Name of the member holding the mime type.
pub const MIME_TYPE_MEMBER: &str = "mimetype";

/// Name of the member holding the document body.
pub const CONTENT_MEMBER: &str = "content.xml";

/// Open Document container over a ZIP archive.
///
/// A container only exists once its `mimetype` member has been read and
/// carries the Open Document prefix.
pub struct OdfContainer {
    archive: zip::ZipArchive<Cursor<Vec<u8>>>,
    mime_type: String,
}

impl OdfContainer {
    /// Open an Open Document container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use unods::container::OdfContainer;
    ///
    /// let container = OdfContainer::open("budget.ods")?;
    /// println!("{}", container.mime_type());
    /// # Ok::<(), unods::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let mut archive =
            zip::ZipArchive::new(cursor).map_err(|e| Error::NotAnArchive(e.to_string()))?;

        // The archive is dropped with the error on every early return below.
        let mime_type = read_mime_type(&mut archive)?;
        if !mime_type.starts_with(MIME_TYPE_PREFIX) {
            return Err(Error::WrongMimeType(mime_type));
        }

        debug!(
            members = archive.len(),
            mime_type = %mime_type,
            "opened Open Document container"
        );

        Ok(Self { archive, mime_type })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// The validated mime type, exactly as stored in the archive.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Open a member by its exact name and stream its decompressed content.
    pub fn open_member(&mut self, name: &str) -> Result<impl Read + '_> {
        self.archive
            .by_name(name)
            .map_err(|e| member_error(name, e))
    }

    /// Read a whole member into memory.
    pub fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut member = self.open_member(name)?;
        let mut data = Vec::new();
        member.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a member exists in the archive.
    pub fn has_member(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// List all member names in the archive.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    /// Release the archive.
    ///
    /// Streams obtained from [`open_member`](Self::open_member) borrow the
    /// container, so none can outlive this call.
    pub fn close(self) {
        debug!(mime_type = %self.mime_type, "closed Open Document container");
    }
}

impl std::fmt::Debug for OdfContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdfContainer")
            .field("mime_type", &self.mime_type)
            .field("members", &self.archive.len())
            .finish()
    }
}

/// Read the `mimetype` member as a string.
fn read_mime_type<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> Result<String> {
    let mut member = match archive.by_name(MIME_TYPE_MEMBER) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => return Err(Error::MissingMimeType),
        Err(e) => return Err(member_error(MIME_TYPE_MEMBER, e)),
    };

    let mut bytes = Vec::new();
    member.read_to_end(&mut bytes)?;

    String::from_utf8(bytes)
        .map_err(|e| Error::WrongMimeType(String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

fn member_error(name: &str, err: ZipError) -> Error {
    match err {
        ZipError::FileNotFound => Error::MemberNotFound(name.to_string()),
        other => Error::MemberOpenFailed {
            name: name.to_string(),
            reason: other.to_string(),
        },
    }
}
