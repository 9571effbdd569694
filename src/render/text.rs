//! Plain text renderer implementation.

use crate::error::Result;
use crate::model::{DenseRow, Document, WidthPolicy};
use unicode_width::UnicodeWidthStr;

use super::options::{RenderOptions, TextLayout};

/// Convert a Document's tables to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut grid_options = options.grid;
    if options.text_layout == TextLayout::Ascii && grid_options.width == WidthPolicy::AsIs {
        grid_options.width = WidthPolicy::PadToWidest;
    }

    let mut output = String::new();
    for (i, table) in doc.tables.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if options.include_table_names {
            output.push_str(&table.name);
            output.push_str("\n\n");
        }

        let grid = table.grid(&grid_options)?;
        match options.text_layout {
            TextLayout::Tsv => output.push_str(&render_tsv(&grid)),
            TextLayout::Ascii => output.push_str(&render_ascii(&grid)),
        }
    }

    Ok(output)
}

/// Cell text on a single line.
fn flatten(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn render_tsv(grid: &[DenseRow]) -> String {
    let mut output = String::new();
    for row in grid {
        let cells: Vec<String> = row.iter().map(|c| flatten(c)).collect();
        output.push_str(&cells.join("\t"));
        output.push('\n');
    }
    output
}

/// Render a grid as an ASCII table.
fn render_ascii(grid: &[DenseRow]) -> String {
    let col_count = grid.iter().map(|r| r.len()).max().unwrap_or(0);
    if col_count == 0 {
        return String::new();
    }

    let rows: Vec<Vec<String>> = grid
        .iter()
        .map(|r| r.iter().map(|c| flatten(c)).collect())
        .collect();

    // Minimum width of 3 for readability
    let mut widths = vec![3; col_count];
    for row in &rows {
        for (i, text) in row.iter().enumerate() {
            widths[i] = widths[i].max(text.width());
        }
    }

    let mut border = String::from("+");
    for w in &widths {
        border.push_str(&"-".repeat(*w + 2));
        border.push('+');
    }

    let mut output = border.clone();
    output.push('\n');
    for row in &rows {
        output.push('|');
        for (i, w) in widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            output.push(' ');
            output.push_str(text);
            output.push_str(&" ".repeat(w - text.width()));
            output.push_str(" |");
        }
        output.push('\n');
    }
    output.push_str(&border);
    output.push('\n');

    output
}
