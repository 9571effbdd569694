//! Document model structures.

use super::Table;
use serde::{Deserialize, Serialize};

/// A decoded `content.xml`: the tables of a spreadsheet in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Tables in document order (names are not necessarily unique)
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// All tables in document order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The first table with the given name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Table names in document order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        let mut first = Table::new("Data");
        first.add_row(Default::default());
        doc.add_table(first);
        doc.add_table(Table::new("Summary"));
        doc.add_table(Table::new("Data"));

        assert_eq!(doc.table_count(), 3);
        assert_eq!(doc.table_names(), vec!["Data", "Summary", "Data"]);
        // Duplicate names resolve to the first occurrence.
        assert_eq!(doc.table("Data").map(|t| t.rows.len()), Some(1));
        assert!(doc.table("Missing").is_none());
    }
}
