use thiserror::Error;

pub mod csv;

/// Errors raised while writing the diary artifact
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure while creating or writing the artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}
