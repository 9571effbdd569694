//! ODS file handle.

use super::content::parse_content;
use crate::container::{OdfContainer, SPREADSHEET_MIME_TYPE};
use crate::error::{Error, Result};
use crate::model::Document;
use std::io::{Read, Seek};
use std::path::Path;

/// An open Open Document spreadsheet.
///
/// Unlike a bare [`OdfContainer`], which accepts any Open Document type,
/// this requires the mime type to be exactly the spreadsheet type.
#[derive(Debug)]
pub struct Spreadsheet {
    container: OdfContainer,
}

impl Spreadsheet {
    /// Open an ODS file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OdfContainer::open(path)?;
        Self::from_container(container)
    }

    /// Open an ODS file held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OdfContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Open an ODS file from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let container = OdfContainer::from_reader(reader)?;
        Self::from_container(container)
    }

    /// Wrap a container that holds a spreadsheet.
    ///
    /// The container is closed if its mime type is not the spreadsheet type.
    pub fn from_container(container: OdfContainer) -> Result<Self> {
        if container.mime_type() != SPREADSHEET_MIME_TYPE {
            let mime_type = container.mime_type().to_string();
            container.close();
            return Err(Error::NotASpreadsheet(mime_type));
        }
        Ok(Self { container })
    }

    /// Decode `content.xml` into the table tree.
    pub fn parse_content(&mut self) -> Result<Document> {
        parse_content(&mut self.container)
    }

    /// The spreadsheet mime type.
    pub fn mime_type(&self) -> &str {
        self.container.mime_type()
    }

    /// Get a reference to the container.
    pub fn container(&self) -> &OdfContainer {
        &self.container
    }

    /// Get a mutable reference to the container, to open other members.
    pub fn container_mut(&mut self) -> &mut OdfContainer {
        &mut self.container
    }

    /// Release the underlying archive.
    pub fn close(self) {
        self.container.close();
    }
}
