// src/utils/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the region analysis library.
#[derive(Error, Debug)]
pub enum RegionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input image cannot be classified (empty, or built from a raw
    /// buffer with fewer than 3 channels).
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A durable sink could not be opened or written. Analysis results
    /// remain valid in memory when this occurs.
    #[error("Failed to write {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A specialized `Result` type for region analysis operations.
pub type Result<T> = std::result::Result<T, RegionError>;
