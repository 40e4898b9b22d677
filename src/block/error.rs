use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Block dimensions must be at least 1, got {0}")]
    InvalidDimensions(usize),

    #[error("Block corners disagree in dimension count: {a} vs {b}")]
    CornerMismatch { a: usize, b: usize },

    #[error("Block has {found} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}
