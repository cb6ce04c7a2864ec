use std::path::PathBuf;

use thiserror::Error;

/// A store layout that cannot be used. Raised once, at load time.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("grid must have non-zero dimensions, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("grid scale must be at least 1 pixel per cell")]
    ZeroScale,

    #[error("grid declares {expected} rows but {found} were given")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised cell '{ch}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },

    #[error("{which} location must have finite coordinates")]
    NonFiniteLocation { which: &'static str },

    #[error("failed to read layout {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A product catalog that cannot be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("duplicate SKU '{0}' in catalog")]
    DuplicateSku(String),

    #[error("product '{sku}' has a non-finite location")]
    NonFiniteLocation { sku: String },
}
