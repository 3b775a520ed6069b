//! View adapters for the batch coordinator.
//!
//! Each adapter wraps a concrete view kind and implements
//! [`ViewSink`](crate::model::ViewSink) for it, so the same translator drives
//! both:
//!
//! - [`ListViewAdapter`]: row-based lists with per-edit animations, item
//!   reloads, and a wholesale fallback for hosts without batch updates
//! - [`GridViewAdapter`]: item-based grids that commit a batch in one call
//!   and report whether it finished animating
//!
//! | Capability            | List view | Grid view |
//! |-----------------------|-----------|-----------|
//! | `ReloadPolicy::Reload` | yes      | ignored   |
//! | Completion `finished` | always `true` | from the view |
//! | Edit animations       | yes       | no        |
//! | Legacy wholesale reload | yes     | no        |

mod grid_view;
mod list_view;

pub use grid_view::{GridViewAdapter, GridViewBackend};
pub use list_view::{ListViewAdapter, ListViewBackend, RowAnimation};
