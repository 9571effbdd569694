//! Shared helpers for building ODS archives.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const SPREADSHEET: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Build an archive the way office suites do: `mimetype` stored first,
/// everything else deflated.
pub fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    for (name, data) in entries {
        let method = if *name == "mimetype" {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        };
        let options = SimpleFileOptions::default().compression_method(method);
        zip.start_file(*name, options).unwrap();
        zip.write_all(data.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer
}

/// Build a spreadsheet archive with the given `content.xml`.
pub fn build_ods(content: &str) -> Vec<u8> {
    build_archive(&[
        ("mimetype", SPREADSHEET),
        ("content.xml", content),
        ("styles.xml", "<office:document-styles/>"),
    ])
}

/// Wrap `<table:table>` markup in a complete `content.xml`.
pub fn content_xml(tables: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.3">
  <office:scripts/>
  <office:automatic-styles/>
  <office:body>
    <office:spreadsheet>
      <table:calculation-settings table:automatic-find-labels="false"/>
      {tables}
      <table:named-expressions/>
    </office:spreadsheet>
  </office:body>
</office:document-content>"#
    )
}

/// Write `data` into `dir` under `name` and return the path.
pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

/// Set the "encrypted" flag on the member named `name`, in both its local
/// header and its central directory record.
pub fn mark_encrypted(archive: &mut [u8], name: &str) {
    const LOCAL: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];
    const CENTRAL: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];

    let mut i = 0;
    while i + 46 <= archive.len() {
        let sig = &archive[i..i + 4];
        let (flags_at, name_len_at, name_at) = if sig == LOCAL {
            (i + 6, i + 26, i + 30)
        } else if sig == CENTRAL {
            (i + 8, i + 28, i + 46)
        } else {
            i += 1;
            continue;
        };
        let name_len = u16::from_le_bytes([archive[name_len_at], archive[name_len_at + 1]]) as usize;
        if archive.get(name_at..name_at + name_len) == Some(name.as_bytes()) {
            archive[flags_at] |= 0x01;
        }
        i += 4;
    }
}
