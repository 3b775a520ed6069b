//! Translation of change notifications into batched structural edits.
//!
//! The translator consumes one observer notification at a time. Each
//! notification becomes zero, one or two queued edits, except for reload
//! handlers which run immediately against the visible cell.
//!
//! Malformed notifications (a required position is missing, or a section is
//! reported as moved or updated) are logged at `info` level and dropped; the
//! rest of the batch is unaffected. Unrecognized change kinds are dropped
//! silently.

use lattice_batch_core::logging::targets;

use super::batch::{BatchCompletion, OperationQueue};
use super::change::{ChangeEvent, ChangeKind};
use super::index::IndexPath;
use super::policy::{MoveMode, PolicyStore, ReloadPolicy};
use super::sink::ViewSink;

/// Translates an observer's notification cycle for one view.
///
/// Obtain one with [`ViewRecord::translator`](super::ViewRecord::translator)
/// or build it from parts with [`ChangeTranslator::new`].
///
/// On hosts where [`ViewSink::supports_batching`] is `false`, every
/// notification except the final one is ignored and the final one reloads
/// the whole view.
pub struct ChangeTranslator<'a, S: ViewSink, T> {
    sink: &'a mut S,
    queue: &'a mut OperationQueue,
    policy: &'a PolicyStore<S::Cell, T>,
}

impl<'a, S: ViewSink, T> ChangeTranslator<'a, S, T> {
    /// Creates a translator over a view, its queue and its policies.
    pub fn new(
        sink: &'a mut S,
        queue: &'a mut OperationQueue,
        policy: &'a PolicyStore<S::Cell, T>,
    ) -> Self {
        Self {
            sink,
            queue,
            policy,
        }
    }

    /// Returns the view this translator drives.
    pub fn sink(&self) -> &S {
        &*self.sink
    }

    /// Returns the view's operation queue.
    pub fn queue(&self) -> &OperationQueue {
        &*self.queue
    }

    /// The observer is about to report changes: opens a batch.
    ///
    /// # Panics
    ///
    /// Panics if a batch is already open for this view.
    #[track_caller]
    pub fn will_change_content(&mut self) {
        if !self.sink.supports_batching() {
            return;
        }
        self.queue.begin();
    }

    /// A section was inserted, deleted, or (invalidly) moved or updated.
    pub fn did_change_section(&mut self, index: usize, kind: ChangeKind) {
        if !self.sink.supports_batching() {
            return;
        }

        match kind {
            ChangeKind::Insert => self.queue.insert_sections([index]),
            ChangeKind::Delete => self.queue.delete_sections([index]),
            ChangeKind::Move | ChangeKind::Update => {
                tracing::info!(target: targets::TRANSLATOR, %kind, index, "got invalid section change, ignoring");
            }
            // Observers have been seen emitting undeclared kinds
            ChangeKind::Unrecognized(_) => {}
        }
    }

    /// An item changed.
    ///
    /// `old_path` is the item's position before the batch, `new_path` its
    /// position after. Which of them are required depends on `kind`.
    pub fn did_change_item(
        &mut self,
        object: &T,
        old_path: Option<IndexPath>,
        kind: ChangeKind,
        new_path: Option<IndexPath>,
    ) {
        if !self.sink.supports_batching() {
            return;
        }

        match kind {
            ChangeKind::Insert => {
                let Some(new_path) = new_path else {
                    tracing::info!(target: targets::TRANSLATOR, "got an insert object change, but no new index path");
                    return;
                };
                self.queue.insert_items([new_path]);
            }

            ChangeKind::Delete => {
                let Some(old_path) = old_path else {
                    tracing::info!(target: targets::TRANSLATOR, "got a delete object change, but no index path");
                    return;
                };
                self.queue.delete_items([old_path]);
            }

            ChangeKind::Move => {
                let (Some(old_path), Some(new_path)) = (old_path, new_path) else {
                    tracing::info!(
                        target: targets::TRANSLATOR,
                        ?old_path,
                        ?new_path,
                        "got a move object change, but no index path or no new index path"
                    );
                    return;
                };
                match self.policy.move_mode() {
                    MoveMode::DeleteInsert => {
                        self.queue.delete_items([old_path]);
                        self.queue.insert_items([new_path]);
                    }
                    MoveMode::Move(reload) => {
                        let policy = self.policy.resolve_move_reload(&reload);
                        self.queue.move_item(old_path, new_path);
                        self.handle_update(object, old_path, Some(new_path), policy);
                    }
                }
            }

            ChangeKind::Update => {
                let Some(old_path) = old_path else {
                    tracing::info!(target: targets::TRANSLATOR, "got an update object change, but no index path");
                    return;
                };
                let policy = self.policy.reload_mode();
                self.handle_update(object, old_path, new_path, policy);
            }

            ChangeKind::Unrecognized(_) => {}
        }
    }

    /// The observer finished reporting changes: applies the batch.
    ///
    /// # Panics
    ///
    /// Panics if no batch is open for this view.
    #[track_caller]
    pub fn did_change_content(&mut self) {
        self.did_change_content_with(None);
    }

    /// Applies the batch, then calls `on_complete` once the view reports the
    /// transition finished.
    ///
    /// `on_complete` runs exactly once. Grid views report whether the
    /// transition fully animated. List views and empty batches report `true`
    /// right away, as do hosts without batching after their wholesale
    /// reload.
    ///
    /// # Panics
    ///
    /// Panics if no batch is open for this view.
    #[track_caller]
    pub fn did_change_content_with(&mut self, on_complete: Option<BatchCompletion>) {
        if !self.sink.supports_batching() {
            self.sink.reload_data();
            if let Some(on_complete) = on_complete {
                on_complete(true);
            }
            return;
        }
        self.queue.end(&mut *self.sink, on_complete);
    }

    /// Dispatches one event of a notification cycle.
    ///
    /// `DidChangeContent` applies the batch without a completion; use
    /// [`handle_events_with`](Self::handle_events_with) to supply one.
    #[track_caller]
    pub fn handle_event(&mut self, event: ChangeEvent<T>) {
        self.dispatch(event, &mut None);
    }

    /// Dispatches a sequence of events in order.
    #[track_caller]
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = ChangeEvent<T>>) {
        self.handle_events_with(events, None);
    }

    /// Dispatches a sequence of events in order, handing `on_complete` to the
    /// first `DidChangeContent` among them.
    ///
    /// Later `DidChangeContent` events apply their batches without a
    /// completion. If the sequence has none, `on_complete` is dropped uncalled.
    #[track_caller]
    pub fn handle_events_with(
        &mut self,
        events: impl IntoIterator<Item = ChangeEvent<T>>,
        on_complete: Option<BatchCompletion>,
    ) {
        let mut on_complete = on_complete;
        for event in events {
            self.dispatch(event, &mut on_complete);
        }
    }

    #[track_caller]
    fn dispatch(&mut self, event: ChangeEvent<T>, on_complete: &mut Option<BatchCompletion>) {
        match event {
            ChangeEvent::WillChangeContent => self.will_change_content(),
            ChangeEvent::Section { index, kind } => self.did_change_section(index, kind),
            ChangeEvent::Item {
                object,
                old_path,
                kind,
                new_path,
            } => self.did_change_item(&object, old_path, kind, new_path),
            ChangeEvent::DidChangeContent => self.did_change_content_with(on_complete.take()),
        }
    }

    /// Refreshes an updated or moved item according to `policy`.
    ///
    /// Handlers run now, against the cell currently visible at `before`; a
    /// reload is queued into the open batch.
    fn handle_update(
        &mut self,
        object: &T,
        before: IndexPath,
        after: Option<IndexPath>,
        policy: ReloadPolicy<S::Cell, T>,
    ) {
        match policy {
            ReloadPolicy::None => {}
            ReloadPolicy::Reload => {
                if self.sink.supports_reload_policy() {
                    self.queue.reload_items([before]);
                } else {
                    tracing::debug!(target: targets::TRANSLATOR, %before, "view cannot reload items, skipping reload");
                }
            }
            ReloadPolicy::Handler(handler) => {
                // Off-screen items have no cell to refresh
                if let Some(cell) = self.sink.cell_at(before) {
                    handler(&cell, object, before, after);
                }
            }
        }
    }
}
