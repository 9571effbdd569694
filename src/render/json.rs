//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Document;
use serde::Serialize;

use super::options::RenderOptions;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

#[derive(Serialize)]
struct DenseTableJson<'a> {
    name: &'a str,
    rows: Vec<&'a [String]>,
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

/// Convert the decoded tree to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert every table to its dense grid and render the grids as JSON.
///
/// The output is an array of `{"name": ..., "rows": [[...], ...]}` objects.
pub fn tables_to_json(doc: &Document, options: &RenderOptions, format: JsonFormat) -> Result<String> {
    let grids = doc
        .tables
        .iter()
        .map(|t| t.grid(&options.grid))
        .collect::<Result<Vec<_>>>()?;

    let tables: Vec<DenseTableJson> = doc
        .tables
        .iter()
        .zip(&grids)
        .map(|(table, grid)| DenseTableJson {
            name: &table.name,
            rows: grid.iter().map(|r| &r[..]).collect(),
        })
        .collect();

    serialize(&tables, format)
}
