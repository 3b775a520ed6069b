//! Lattice Batch - Batched, animatable structural updates for sectioned views.
//!
//! A data-change observer reports a cycle of notifications: "will change",
//! any number of section and item changes, then "did change". This crate
//! turns each cycle into one atomic structural update on a list or grid
//! view, honoring per-view policies for moved and updated items.
//!
//! # Example
//!
//! ```ignore
//! use lattice_batch::prelude::*;
//!
//! let mut records: ViewRecords<Cell, Row> = ViewRecords::new();
//! let id = records.register(ViewRecord::new());
//!
//! let mut list = ListViewAdapter::new(table);
//! let record = records.try_get_mut(id)?;
//! record.set_move_mode(MoveMode::Move(MoveReload::Standard));
//!
//! record.translator(&mut list).handle_events([
//!     ChangeEvent::WillChangeContent,
//!     ChangeEvent::item(row, Some(IndexPath::new(0, 1)), 3, Some(IndexPath::new(0, 4))),
//!     ChangeEvent::DidChangeContent,
//! ]);
//! ```

pub use lattice_batch_core::*;

#[cfg(feature = "config")]
pub mod config;
pub mod model;
pub mod prelude;
pub mod widget;
