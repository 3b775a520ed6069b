//! The capability interface a view exposes to the batch coordinator.

use lattice_batch_core::logging::targets;

use super::batch::{BatchCompletion, Edit};
use super::index::IndexPath;

/// A view that accepts structural edits and cell lookups.
///
/// The translator is written once against this trait. Each concrete view kind
/// gets an adapter implementing it (see [`crate::widget`]).
///
/// The pass-through methods apply one structural edit immediately. They are
/// called by [`Edit::apply`] while a batch is being applied, and may also be
/// called directly outside any batch.
///
/// # Implementing
///
/// ```ignore
/// impl ViewSink for MyView {
///     type Cell = CellHandle;
///
///     fn insert_items(&mut self, paths: &[IndexPath]) { /* ... */ }
///     // ...
///
///     fn apply_batch(&mut self, edits: Vec<Edit>, completion: BatchCompletion) {
///         self.begin_transaction();
///         for edit in edits {
///             edit.apply(self);
///         }
///         self.commit_transaction(completion);
///     }
/// }
/// ```
pub trait ViewSink {
    /// Handle to a visible cell, as handed to reload handlers.
    type Cell;

    /// Inserts whole sections.
    fn insert_sections(&mut self, sections: &[usize]);

    /// Deletes whole sections.
    fn delete_sections(&mut self, sections: &[usize]);

    /// Reloads whole sections.
    fn reload_sections(&mut self, sections: &[usize]);

    /// Moves a section.
    fn move_section(&mut self, from: usize, to: usize);

    /// Inserts items.
    fn insert_items(&mut self, paths: &[IndexPath]);

    /// Deletes items.
    fn delete_items(&mut self, paths: &[IndexPath]);

    /// Moves one item.
    fn move_item(&mut self, from: IndexPath, to: IndexPath);

    /// Returns `true` if [`ReloadPolicy::Reload`](super::ReloadPolicy::Reload)
    /// may queue item reloads on this view kind.
    ///
    /// Some views can reload items when asked directly but misbehave when a
    /// reload is mixed with moves in one batch; those return `false`. The
    /// default is `false`.
    fn supports_reload_policy(&self) -> bool {
        false
    }

    /// Reloads items in place. The default drops the request.
    fn reload_items(&mut self, paths: &[IndexPath]) {
        tracing::debug!(target: targets::BATCH, ?paths, "view does not support item reloads, dropping");
    }

    /// Returns the currently visible cell at `path`, if any.
    fn cell_at(&self, path: IndexPath) -> Option<Self::Cell>;

    /// Applies `edits`, in order, as one atomic structural transaction.
    ///
    /// `completion` must be invoked exactly once, with `true` if the
    /// transition fully animated and `false` if it was interrupted. Views
    /// that cannot observe the outcome call it with `true` once the edits
    /// are committed.
    fn apply_batch(&mut self, edits: Vec<Edit>, completion: BatchCompletion);

    /// Returns `true` if the host can apply batched updates.
    ///
    /// When `false`, the translator skips batching entirely and asks the view
    /// to [`reload_data`](Self::reload_data) at the end of each cycle.
    fn supports_batching(&self) -> bool {
        true
    }

    /// Re-renders the whole view from its data source.
    fn reload_data(&mut self) {}
}
