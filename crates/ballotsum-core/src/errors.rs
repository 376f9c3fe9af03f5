use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a summary run. None of these are retried:
/// the job is single-shot and is meant to be re-run wholesale.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The configured extract path does not resolve to a readable file
    #[error("input file not found: '{path}'")]
    InputNotFound { path: PathBuf },

    /// The file exists but cannot be parsed as a delimited table
    #[error("could not parse '{path}' as a delimited table: {source}")]
    MalformedTable {
        path: PathBuf,
        source: arrow::error::ArrowError,
    },

    /// A required column is missing from the extract
    #[error("column '{0}' not found in table")]
    ColumnNotFound(String),

    /// A column did not load as text; every extract column is read as Utf8
    #[error("column '{0}' could not be read as text")]
    TypeCastError(String),

    /// The aggregate holds fewer distinct counties than the sample asks for
    #[error("aggregate has {available} counties, cannot sample {requested}")]
    InsufficientSampleSize { available: usize, requested: usize },

    /// The summary destination could not be written
    #[error("failed to write summary to '{path}': {source}")]
    OutputWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The Arrow kernel produced an error (e.g., a failed filter)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// IO error outside the persist step
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
