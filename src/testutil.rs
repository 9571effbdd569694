//! Helpers for building Open Document archives in tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build an uncompressed ZIP archive from `(name, data)` pairs, in order.
pub(crate) fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    buffer
}

/// Build a spreadsheet archive around a `content.xml` body.
pub(crate) fn build_ods(content: &str) -> Vec<u8> {
    build_zip(&[
        ("mimetype", crate::container::SPREADSHEET_MIME_TYPE),
        ("content.xml", content),
    ])
}

/// Wrap table markup in a complete `content.xml` document.
pub(crate) fn content_xml(tables: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.2">
  <office:body>
    <office:spreadsheet>{tables}</office:spreadsheet>
  </office:body>
</office:document-content>"#
    )
}
