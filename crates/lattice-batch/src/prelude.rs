//! Prelude module for Lattice Batch.
//!
//! ```ignore
//! use lattice_batch::prelude::*;
//! ```

pub use crate::{BatchError, BatchResult, ViewId};

pub use crate::model::{
    ChangeEvent, ChangeKind, ChangeTranslator, Edit, IndexPath, MoveMode, MoveReload,
    OperationQueue, PolicyStore, ReloadPolicy, ViewRecord, ViewRecords, ViewSink,
};

pub use crate::widget::{
    GridViewAdapter, GridViewBackend, ListViewAdapter, ListViewBackend, RowAnimation,
};

#[cfg(feature = "config")]
pub use crate::config::BatchConfig;
