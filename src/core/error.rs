use thiserror::Error;

/// Errors surfaced by the grid, operator and stepping APIs.
///
/// Every failure is reported to the caller immediately. When an operation fails part-way
/// through an in-place update, the mutated slice or operator must be treated as invalidated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdeError {
    /// Construction or call argument outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Two sequences expected to share a length disagree.
    #[error("size mismatch: expected length {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// Operation that is numerically undefined for the current operator state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// Operation that exists in the API but has no implementation yet.
    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Convenience alias used across the crate.
pub type PdeResult<T> = Result<T, PdeError>;

impl PdeError {
    #[inline]
    pub(crate) fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}
