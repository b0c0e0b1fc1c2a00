use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Top-N must be between {min} and {max}, got {value}")]
    InvalidTopN { value: usize, min: usize, max: usize },

    #[error("Decimal overflow while computing {0}")]
    Overflow(&'static str),
}
