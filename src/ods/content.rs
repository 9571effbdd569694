//! Decoder for the `content.xml` member of a spreadsheet.
//!
//! Elements are matched by local name, so the namespace prefixes a producer
//! picked do not matter. Repeat counts are normalized here, once, so an
//! absent or zero `number-*-repeated` attribute always yields a count of 1.

use crate::container::{OdfContainer, CONTENT_MEMBER};
use crate::error::{Error, Result};
use crate::model::{effective_repeat, Cell, CellKind, Column, Document, Row, Table};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufRead, BufReader};
use tracing::{debug, trace};

/// Open `content.xml` in `container` and decode it.
///
/// The member stream is released before this returns, on success and failure.
pub fn parse_content(container: &mut OdfContainer) -> Result<Document> {
    let member = container.open_member(CONTENT_MEMBER)?;
    let document = decode_content(BufReader::new(member))?;
    debug!(tables = document.table_count(), "decoded content.xml");
    Ok(document)
}

/// Decode a `content.xml` document from a buffered reader.
pub fn decode_content<R: BufRead>(reader: R) -> Result<Document> {
    let mut reader = Reader::from_reader(reader);
    let mut decoder = ContentDecoder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => decoder.start(e)?,
            Event::Empty(ref e) => {
                decoder.start(e)?;
                decoder.end()?;
            }
            Event::End(_) => decoder.end()?,
            Event::Text(ref e) => {
                if decoder.collecting_text() {
                    let text = e.unescape()?;
                    decoder.paragraph.push_str(&text);
                }
            }
            Event::CData(ref e) => {
                if decoder.collecting_text() {
                    decoder.paragraph.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    decoder.finish()
}

/// Decode a `content.xml` document held in memory.
pub fn decode_content_str(xml: &str) -> Result<Document> {
    decode_content(xml.as_bytes())
}

/// Where the decoder is in the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Root,
    Body,
    Spreadsheet,
    Table,
    /// Column or row grouping inside a table
    Group,
    Row,
    Cell,
    Paragraph,
    /// Inline markup inside a paragraph (span, link, ...)
    Inline,
    /// Anything that contributes nothing
    Ignored,
}

#[derive(Default)]
struct ContentDecoder {
    stack: Vec<Scope>,
    seen_root: bool,
    document: Document,
    table: Option<Table>,
    row: Option<Row>,
    cell: Option<Cell>,
    paragraph: String,
}

impl ContentDecoder {
    fn collecting_text(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Scope::Paragraph) | Some(Scope::Inline)
        )
    }

    fn start(&mut self, e: &BytesStart) -> Result<()> {
        let local = e.local_name();
        let name = local.as_ref();

        let scope = match (self.stack.last().copied(), name) {
            (None, b"document-content") if !self.seen_root => {
                self.seen_root = true;
                Scope::Root
            }
            (None, _) => {
                return Err(Error::MalformedXml(format!(
                    "unexpected root element <{}>",
                    String::from_utf8_lossy(e.name().as_ref())
                )))
            }
            (Some(Scope::Root), b"body") => Scope::Body,
            (Some(Scope::Body), b"spreadsheet") => Scope::Spreadsheet,
            (Some(Scope::Spreadsheet), b"table") => {
                self.table = Some(Table::new(table_name(e)?));
                Scope::Table
            }
            (
                Some(Scope::Table | Scope::Group),
                b"table-columns"
                | b"table-column-group"
                | b"table-header-columns"
                | b"table-rows"
                | b"table-row-group"
                | b"table-header-rows",
            ) => Scope::Group,
            (Some(Scope::Table | Scope::Group), b"table-column") => {
                let column = Column {
                    repeat: repeat_attr(e, b"number-columns-repeated")?,
                };
                if let Some(table) = self.table.as_mut() {
                    table.add_column(column);
                }
                Scope::Ignored
            }
            (Some(Scope::Table | Scope::Group), b"table-row") => {
                self.row = Some(Row::new().repeated(repeat_attr(e, b"number-rows-repeated")?));
                Scope::Row
            }
            (Some(Scope::Row), b"table-cell") => {
                self.cell = Some(cell_from_attrs(e, CellKind::Normal)?);
                Scope::Cell
            }
            (Some(Scope::Row), b"covered-table-cell") => {
                self.cell = Some(cell_from_attrs(e, CellKind::Covered)?);
                Scope::Cell
            }
            (Some(Scope::Cell), b"p") => {
                self.paragraph.clear();
                Scope::Paragraph
            }
            (Some(Scope::Paragraph | Scope::Inline), b"s") => {
                let count = count_attr(e, b"c")?.unwrap_or(1).max(1);
                self.paragraph
                    .extend(std::iter::repeat_n(' ', count as usize));
                Scope::Ignored
            }
            (Some(Scope::Paragraph | Scope::Inline), b"tab") => {
                self.paragraph.push('\t');
                Scope::Ignored
            }
            (Some(Scope::Paragraph | Scope::Inline), b"line-break") => {
                self.paragraph.push('\n');
                Scope::Ignored
            }
            (Some(Scope::Paragraph | Scope::Inline), b"note" | b"annotation") => Scope::Ignored,
            (Some(Scope::Paragraph | Scope::Inline), _) => Scope::Inline,
            _ => Scope::Ignored,
        };

        self.stack.push(scope);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        let scope = self
            .stack
            .pop()
            .ok_or_else(|| Error::MalformedXml("unbalanced end tag".to_string()))?;

        match scope {
            Scope::Paragraph => {
                let text = std::mem::take(&mut self.paragraph);
                if let Some(cell) = self.cell.as_mut() {
                    cell.paragraphs.push(text);
                }
            }
            Scope::Cell => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.add_cell(cell);
                }
            }
            Scope::Row => {
                if let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) {
                    table.add_row(row);
                }
            }
            Scope::Table => {
                if let Some(table) = self.table.take() {
                    trace!(
                        table = %table.name,
                        columns = table.width(),
                        rows = table.rows.len(),
                        "decoded table"
                    );
                    self.document.add_table(table);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<Document> {
        if !self.seen_root {
            return Err(Error::MalformedXml(
                "missing <document-content> root element".to_string(),
            ));
        }
        if !self.stack.is_empty() {
            return Err(Error::MalformedXml("unexpected end of document".to_string()));
        }
        Ok(self.document)
    }
}

fn table_name(e: &BytesStart) -> Result<String> {
    Ok(attr_value(e, b"name")?.unwrap_or_default())
}

fn cell_from_attrs(e: &BytesStart, kind: CellKind) -> Result<Cell> {
    let mut cell = Cell {
        kind,
        ..Default::default()
    };

    for attr in e.attributes() {
        let attr = attr?;
        let key = attr.key.local_name();
        match key.as_ref() {
            b"number-columns-repeated" => {
                cell.repeat = effective_repeat(parse_count(&attr.unescape_value()?)?);
            }
            b"number-columns-spanned" => {
                cell.span = effective_repeat(parse_count(&attr.unescape_value()?)?);
            }
            // Producers may repeat these under a second namespace; the first wins.
            b"value-type" if cell.value_type.is_none() => {
                cell.value_type = Some(attr.unescape_value()?.into_owned());
            }
            b"value" if cell.value.is_none() => {
                cell.value = Some(attr.unescape_value()?.into_owned());
            }
            b"formula" if cell.formula.is_none() => {
                cell.formula = Some(attr.unescape_value()?.into_owned());
            }
            _ => {}
        }
    }

    Ok(cell)
}

/// Normalized repeat count from an optional attribute.
fn repeat_attr(e: &BytesStart, name: &[u8]) -> Result<u32> {
    Ok(effective_repeat(count_attr(e, name)?.unwrap_or(0)))
}

fn count_attr(e: &BytesStart, name: &[u8]) -> Result<Option<u32>> {
    attr_value(e, name)?.map(|v| parse_count(&v)).transpose()
}

fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn parse_count(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::MalformedXml(format!("invalid count {:?}", value)))
}
