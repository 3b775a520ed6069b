//! Core systems for Lattice Batch.
//!
//! This crate provides the foundational pieces shared by the batch update
//! coordinator:
//!
//! - **Errors**: [`BatchError`] for caller contract violations
//! - **Registry**: [`ViewRegistry`], an identity-keyed side table that
//!   attaches per-view state to externally owned views
//! - **Logging**: `tracing` targets and spans used across the workspace
//!
//! # Registry Example
//!
//! ```
//! use lattice_batch_core::{BatchError, ViewRegistry};
//!
//! let mut registry = ViewRegistry::new();
//! let id = registry.register(String::from("list"));
//!
//! assert_eq!(registry.get(id).map(String::as_str), Some("list"));
//!
//! registry.dispose(id);
//! assert_eq!(registry.try_get_mut(id).err(), Some(BatchError::UnknownView));
//! ```

mod error;
pub mod logging;
pub mod registry;

pub use error::{BatchError, BatchResult};
pub use logging::BatchSpan;
pub use registry::{ViewId, ViewRegistry};
