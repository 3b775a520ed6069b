//! Adapter driving an item-based grid view.
//!
//! Grid views apply a batch through a single `perform`-style call that
//! reports, through a completion, whether the transition finished animating.
//! They can reload items when asked directly, but reloads mixed with moves in
//! one batch are not reliable, so [`ReloadPolicy::Reload`] is ignored for
//! them. Use a [`ReloadPolicy::Handler`] to refresh moved cells instead.
//!
//! [`ReloadPolicy::Reload`]: crate::model::ReloadPolicy::Reload
//! [`ReloadPolicy::Handler`]: crate::model::ReloadPolicy::Handler

use crate::model::{BatchCompletion, Edit, IndexPath, ViewSink};

/// The native operations of an item-based grid view.
///
/// Edits are issued between [`begin_batch_updates`](Self::begin_batch_updates)
/// and [`commit_batch_updates`](Self::commit_batch_updates). The view must call
/// the completion handed to `commit_batch_updates` exactly once.
pub trait GridViewBackend {
    /// Handle to a visible item cell.
    type Cell;

    /// Opens a batch of edits.
    fn begin_batch_updates(&mut self);

    /// Applies the edits issued since `begin_batch_updates` as one transition.
    fn commit_batch_updates(&mut self, completion: BatchCompletion);

    /// Inserts sections.
    fn insert_sections(&mut self, sections: &[usize]);

    /// Deletes sections.
    fn delete_sections(&mut self, sections: &[usize]);

    /// Reloads sections.
    fn reload_sections(&mut self, sections: &[usize]);

    /// Moves a section.
    fn move_section(&mut self, from: usize, to: usize);

    /// Inserts items.
    fn insert_items(&mut self, paths: &[IndexPath]);

    /// Deletes items.
    fn delete_items(&mut self, paths: &[IndexPath]);

    /// Reloads items in place.
    fn reload_items(&mut self, paths: &[IndexPath]);

    /// Moves an item.
    fn move_item(&mut self, from: IndexPath, to: IndexPath);

    /// Returns the visible cell for the item at `path`.
    fn cell_for_item(&self, path: IndexPath) -> Option<Self::Cell>;
}

/// [`ViewSink`] over a [`GridViewBackend`].
#[derive(Debug)]
pub struct GridViewAdapter<B> {
    backend: B,
}

impl<B: GridViewBackend> GridViewAdapter<B> {
    /// Wraps `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the wrapped grid view.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the wrapped grid view mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwraps the grid view.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: GridViewBackend> ViewSink for GridViewAdapter<B> {
    type Cell = B::Cell;

    fn insert_sections(&mut self, sections: &[usize]) {
        self.backend.insert_sections(sections);
    }

    fn delete_sections(&mut self, sections: &[usize]) {
        self.backend.delete_sections(sections);
    }

    fn reload_sections(&mut self, sections: &[usize]) {
        self.backend.reload_sections(sections);
    }

    fn move_section(&mut self, from: usize, to: usize) {
        self.backend.move_section(from, to);
    }

    fn insert_items(&mut self, paths: &[IndexPath]) {
        self.backend.insert_items(paths);
    }

    fn delete_items(&mut self, paths: &[IndexPath]) {
        self.backend.delete_items(paths);
    }

    fn move_item(&mut self, from: IndexPath, to: IndexPath) {
        self.backend.move_item(from, to);
    }

    fn reload_items(&mut self, paths: &[IndexPath]) {
        self.backend.reload_items(paths);
    }

    fn cell_at(&self, path: IndexPath) -> Option<B::Cell> {
        self.backend.cell_for_item(path)
    }

    fn apply_batch(&mut self, edits: Vec<Edit>, completion: BatchCompletion) {
        self.backend.begin_batch_updates();
        for edit in edits {
            edit.apply(self);
        }
        self.backend.commit_batch_updates(completion);
    }
}
