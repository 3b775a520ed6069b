//! Batched update coordination for sectioned views.
//!
//! This module turns the change notifications of a data-change observer into
//! one atomic, animatable structural update per notification cycle.
//!
//! # Core Types
//!
//! - `IndexPath`: Identifies an item by section and position
//! - `ChangeKind` / `ChangeEvent`: Observer notifications, with an explicit fallback for unknown kinds
//! - `Edit`: One deferred structural mutation
//! - `OperationQueue`: Collects edits between begin and end, then applies them
//! - `PolicyStore`: Per-view move and reload policies
//! - `ViewSink`: The capability interface views implement
//! - `ChangeTranslator`: Maps notifications to edits
//! - `ViewRecord` / `ViewRecords`: Per-view state and the side table holding it
//!
//! # Example
//!
//! ```ignore
//! use lattice_batch::model::{ChangeKind, IndexPath, ViewRecord};
//!
//! let mut record = ViewRecord::new();
//! let mut translator = record.translator(&mut view);
//!
//! translator.will_change_content();
//! translator.did_change_item(&row, None, ChangeKind::Insert, Some(IndexPath::new(0, 2)));
//! translator.did_change_content();
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │  Observer   │────>│ ChangeTranslator │────>│ OperationQueue │
//! │ (events)    │     │                  │     │   (Edits)      │
//! └─────────────┘     └──────────────────┘     └────────────────┘
//!                        │          │                  │ end
//!                        │ reads    │ cell_at          v
//!                 ┌─────────────┐   │          ┌────────────────┐
//!                 │ PolicyStore │   └─────────>│    ViewSink    │
//!                 └─────────────┘              │ (apply_batch)  │
//!                                              └────────────────┘
//! ```

mod batch;
mod change;
mod index;
mod policy;
mod record;
mod sink;
mod translator;

pub use batch::{BatchCompletion, Edit, OperationQueue};
pub use change::{ChangeEvent, ChangeKind};
pub use index::IndexPath;
pub use policy::{MoveMode, MoveReload, PolicyStore, ReloadHandler, ReloadPolicy};
pub use record::{ViewRecord, ViewRecords};
pub use sink::ViewSink;
pub use translator::ChangeTranslator;
