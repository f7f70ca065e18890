//! Loader errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Invalid image line {line}: {content:?}")]
    InvalidLine { line: usize, content: String },

    #[error("Program too large: {size} bytes")]
    ProgramTooLarge { size: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
