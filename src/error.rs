//! Error types for table parsing and schema generation.

use thiserror::Error;

/// A definitions table that does not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("node is not a <table> element")]
    NotATable,

    #[error("table header did not contain field {0:?}")]
    MissingColumn(&'static str),

    /// Row numbers count body rows from 1.
    #[error("row {row} has {cells} cells, column {needed} is required")]
    ShortRow {
        row: usize,
        cells: usize,
        needed: usize,
    },
}

/// Fatal conditions that abort a generation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("could not find schema tag (no element links to {href:?})")]
    AnchorNotFound { href: String },

    #[error("<table> does not follow fixed fields for {object}")]
    TableNotFound { object: String },

    #[error("table {object} failed: {source}")]
    Table {
        object: String,
        #[source]
        source: TableError,
    },
}
