//! Logging facilities for Lattice Batch.
//!
//! Lattice Batch uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_max_level(tracing::Level::INFO)
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Malformed change notifications (missing positions, invalid section change
//! kinds) are reported at `info` level under [`targets::TRANSLATOR`]. Batch
//! application is wrapped in a [`BatchSpan`].

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Operation queue and batch controller.
    pub const BATCH: &str = "lattice_batch::batch";
    /// Change event translator.
    pub const TRANSLATOR: &str = "lattice_batch::translator";
    /// Per-view side table.
    pub const REGISTRY: &str = "lattice_batch_core::registry";
}

/// A guard that keeps a batch-application span entered until dropped.
#[derive(Debug)]
pub struct BatchSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl BatchSpan {
    /// Enter a span describing a batch of `edits` structural edits.
    pub fn new(edits: usize) -> Self {
        let span = tracing::debug_span!(target: targets::BATCH, "apply_batch", edits);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_span() {
        // Just ensure it doesn't panic without a subscriber
        let _span = BatchSpan::new(3);
    }

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::BATCH.starts_with("lattice_batch"));
        assert!(targets::TRANSLATOR.starts_with("lattice_batch"));
    }
}
