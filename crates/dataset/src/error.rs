use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema error in the {table} table: missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("Schema error in the {table} table at data row {row}: {message}")]
    InvalidValue {
        table: &'static str,
        row: u64,
        message: String,
    },

    #[error("CSV error in the {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("Integrity error in the {table} table: {message}")]
    Integrity {
        table: &'static str,
        message: String,
    },

    #[error("Cannot generate data: {0}")]
    Generation(String),
}

impl DatasetError {
    /// True for the errors that mean an input table does not have the expected shape.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            DatasetError::MissingColumn { .. } | DatasetError::InvalidValue { .. }
        )
    }
}
