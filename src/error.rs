//! Crate error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column '{column}' has {actual} values, frame has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("frame width mismatch: expected {expected} columns, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("slice step cannot be zero")]
    ZeroStep,

    #[error("cannot concatenate an empty list of frames")]
    NoFrames,

    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("cannot parse '{value}' in column '{column}' at row {row}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
