//! Rendering options configuration.

use crate::model::GridOptions;

/// How to lay out tables in plain text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextLayout {
    /// One line per row, cells separated by tabs
    #[default]
    Tsv,
    /// Bordered ASCII table with columns padded to their display width
    Ascii,
}

/// Options for rendering documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Plain text table layout
    pub text_layout: TextLayout,

    /// Grid shaping applied before rendering
    pub grid: GridOptions,

    /// Print each table's name above it
    pub include_table_names: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            text_layout: TextLayout::Tsv,
            grid: GridOptions::default(),
            include_table_names: true,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plain text layout.
    pub fn with_text_layout(mut self, layout: TextLayout) -> Self {
        self.text_layout = layout;
        self
    }

    /// Set the grid options.
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    /// Show or hide table names.
    pub fn with_table_names(mut self, include: bool) -> Self {
        self.include_table_names = include;
        self
    }
}
