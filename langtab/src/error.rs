//! All error types for the langtab crate.
//!
//! These are returned from all fallible operations (parsing, merging, writing).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("invalid table: {0}")]
    InvalidTable(String),
}

impl Error {
    /// Creates a new invalid-table error
    pub fn invalid_table(message: impl Into<String>) -> Self {
        Error::InvalidTable(message.into())
    }
}
