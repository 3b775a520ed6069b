//! Error types for Lattice Batch.

use std::fmt;

/// Errors raised by the batch coordination primitives.
///
/// Every variant describes a caller contract violation. The panicking entry
/// points (`begin_batch`, `end_batch`, ...) turn these into fatal errors; the
/// `try_*` counterparts hand them back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// A batch is already open for this view. Batches are not re-entrant.
    BatchAlreadyOpen,
    /// The operation requires an open batch but none has been started.
    NoOpenBatch,
    /// The view ID is not registered, or its record has been disposed.
    UnknownView,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BatchAlreadyOpen => {
                write!(f, "End or cancel the open batch before beginning a new one (batches are not re-entrant)")
            }
            Self::NoOpenBatch => write!(f, "No open batch; call begin_batch first"),
            Self::UnknownView => write!(f, "Unknown or disposed view ID"),
        }
    }
}

impl std::error::Error for BatchError {}

/// A specialized Result type for batch operations.
pub type BatchResult<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert!(BatchError::BatchAlreadyOpen.to_string().contains("not re-entrant"));
        assert!(BatchError::NoOpenBatch.to_string().contains("begin_batch"));
        assert_eq!(BatchError::UnknownView.to_string(), "Unknown or disposed view ID");
    }
}
