//! Per-view batch state.

use std::fmt;

use lattice_batch_core::ViewRegistry;

use super::batch::OperationQueue;
use super::policy::{MoveMode, PolicyStore, ReloadPolicy};
use super::sink::ViewSink;
use super::translator::ChangeTranslator;

/// Everything the coordinator keeps for one view: its operation queue and
/// its policy store.
///
/// Records hold non-`Send` closures, so a record and the side table holding
/// it stay on the thread that owns the view.
///
/// # Example
///
/// ```ignore
/// let mut records: ViewRecords<Cell, Row> = ViewRecords::new();
/// let id = records.register(ViewRecord::new());
///
/// // On each observer notification
/// let mut translator = records.try_get_mut(id)?.translator(&mut view);
/// translator.will_change_content();
///
/// // When the view goes away
/// records.dispose(id);
/// ```
pub struct ViewRecord<C, T> {
    queue: OperationQueue,
    policy: PolicyStore<C, T>,
}

/// Side table mapping views to their [`ViewRecord`].
pub type ViewRecords<C, T> = ViewRegistry<ViewRecord<C, T>>;

impl<C, T> Default for ViewRecord<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> fmt::Debug for ViewRecord<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRecord")
            .field("queue", &self.queue)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<C, T> ViewRecord<C, T> {
    /// Creates a record with no open batch and default policies.
    pub fn new() -> Self {
        Self {
            queue: OperationQueue::new(),
            policy: PolicyStore::new(),
        }
    }

    /// The view's operation queue.
    pub fn queue(&self) -> &OperationQueue {
        &self.queue
    }

    /// The view's operation queue, for grouped edits outside the translator.
    pub fn queue_mut(&mut self) -> &mut OperationQueue {
        &mut self.queue
    }

    /// The view's policy store.
    pub fn policy(&self) -> &PolicyStore<C, T> {
        &self.policy
    }

    /// The view's policy store, mutably.
    pub fn policy_mut(&mut self) -> &mut PolicyStore<C, T> {
        &mut self.policy
    }

    /// Current move mode.
    pub fn move_mode(&self) -> MoveMode<C, T> {
        self.policy.move_mode()
    }

    /// Sets the move mode.
    pub fn set_move_mode(&mut self, mode: MoveMode<C, T>) {
        self.policy_mut().set_move_mode(mode);
    }

    /// Current reload policy.
    pub fn reload_mode(&self) -> ReloadPolicy<C, T> {
        self.policy.reload_mode()
    }

    /// Sets the reload policy.
    pub fn set_reload_mode(&mut self, mode: ReloadPolicy<C, T>) {
        self.policy_mut().set_reload_mode(mode);
    }

    /// Binds this record to its view for one stretch of notifications.
    pub fn translator<'a, S>(&'a mut self, sink: &'a mut S) -> ChangeTranslator<'a, S, T>
    where
        S: ViewSink<Cell = C>,
    {
        ChangeTranslator::new(sink, &mut self.queue, &self.policy)
    }
}

static_assertions::assert_not_impl_any!(ViewRecord<(), ()>: Send, Sync);
static_assertions::assert_not_impl_any!(ViewRecords<(), ()>: Send, Sync);
