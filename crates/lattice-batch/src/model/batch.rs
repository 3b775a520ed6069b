//! Operation queue and batch controller.
//!
//! Structural edits issued between [`OperationQueue::begin`] and
//! [`OperationQueue::end`] are held back and then handed to the view as one
//! atomic transaction. Queues are not re-entrant: a view has at most one open
//! batch at any time.
//!
//! # Example
//!
//! ```ignore
//! let mut queue = OperationQueue::new();
//!
//! queue.begin();
//! queue.insert_items([IndexPath::new(0, 2)]);
//! queue.delete_sections([3]);
//! queue.end(&mut view, Some(Box::new(|finished| println!("done: {finished}"))));
//! ```

use std::fmt;

use lattice_batch_core::logging::targets;
use lattice_batch_core::{BatchError, BatchResult, BatchSpan};

use super::index::IndexPath;
use super::sink::ViewSink;

/// Callback invoked once a batch has been applied.
///
/// The argument is `true` if the transition fully animated, `false` if it was
/// interrupted.
pub type BatchCompletion = Box<dyn FnOnce(bool)>;

/// One deferred structural mutation.
pub enum Edit {
    /// Insert sections.
    InsertSections(Vec<usize>),
    /// Delete sections.
    DeleteSections(Vec<usize>),
    /// Reload sections.
    ReloadSections(Vec<usize>),
    /// Move a section.
    MoveSection {
        /// Section before the batch.
        from: usize,
        /// Section after the batch.
        to: usize,
    },
    /// Insert items.
    InsertItems(Vec<IndexPath>),
    /// Delete items.
    DeleteItems(Vec<IndexPath>),
    /// Reload items.
    ReloadItems(Vec<IndexPath>),
    /// Move an item.
    MoveItem {
        /// Position before the batch.
        from: IndexPath,
        /// Position after the batch.
        to: IndexPath,
    },
    /// Arbitrary work to run inside the view's transaction.
    Custom(Box<dyn FnOnce()>),
}

impl Edit {
    /// Applies this edit to `sink` immediately, consuming it.
    pub fn apply<S: ViewSink + ?Sized>(self, sink: &mut S) {
        match self {
            Self::InsertSections(sections) => sink.insert_sections(&sections),
            Self::DeleteSections(sections) => sink.delete_sections(&sections),
            Self::ReloadSections(sections) => sink.reload_sections(&sections),
            Self::MoveSection { from, to } => sink.move_section(from, to),
            Self::InsertItems(paths) => sink.insert_items(&paths),
            Self::DeleteItems(paths) => sink.delete_items(&paths),
            Self::ReloadItems(paths) => sink.reload_items(&paths),
            Self::MoveItem { from, to } => sink.move_item(from, to),
            Self::Custom(action) => action(),
        }
    }
}

impl fmt::Debug for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertSections(s) => f.debug_tuple("InsertSections").field(s).finish(),
            Self::DeleteSections(s) => f.debug_tuple("DeleteSections").field(s).finish(),
            Self::ReloadSections(s) => f.debug_tuple("ReloadSections").field(s).finish(),
            Self::MoveSection { from, to } => f
                .debug_struct("MoveSection")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::InsertItems(p) => f.debug_tuple("InsertItems").field(p).finish(),
            Self::DeleteItems(p) => f.debug_tuple("DeleteItems").field(p).finish(),
            Self::ReloadItems(p) => f.debug_tuple("ReloadItems").field(p).finish(),
            Self::MoveItem { from, to } => f
                .debug_struct("MoveItem")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Structural equality. `Custom` edits never compare equal.
impl PartialEq for Edit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InsertSections(a), Self::InsertSections(b))
            | (Self::DeleteSections(a), Self::DeleteSections(b))
            | (Self::ReloadSections(a), Self::ReloadSections(b)) => a == b,
            (
                Self::MoveSection { from: f1, to: t1 },
                Self::MoveSection { from: f2, to: t2 },
            ) => f1 == f2 && t1 == t2,
            (Self::InsertItems(a), Self::InsertItems(b))
            | (Self::DeleteItems(a), Self::DeleteItems(b))
            | (Self::ReloadItems(a), Self::ReloadItems(b)) => a == b,
            (Self::MoveItem { from: f1, to: t1 }, Self::MoveItem { from: f2, to: t2 }) => {
                f1 == f2 && t1 == t2
            }
            _ => false,
        }
    }
}

/// Pending edits for one view, or nothing when no batch is open.
#[derive(Default)]
pub struct OperationQueue {
    pending: Option<Vec<Edit>>,
}

impl fmt::Debug for OperationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationQueue")
            .field("pending", &self.pending)
            .finish()
    }
}

impl OperationQueue {
    /// Creates a queue with no open batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a batch is open.
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the edits queued so far, or `None` if no batch is open.
    pub fn pending(&self) -> Option<&[Edit]> {
        self.pending.as_deref()
    }

    /// Number of queued edits (zero when no batch is open).
    pub fn len(&self) -> usize {
        self.pending.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` if no edit is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opens a batch.
    ///
    /// # Errors
    ///
    /// [`BatchError::BatchAlreadyOpen`] if a batch is already open.
    pub fn try_begin(&mut self) -> BatchResult<()> {
        if self.pending.is_some() {
            return Err(BatchError::BatchAlreadyOpen);
        }
        self.pending = Some(Vec::new());
        Ok(())
    }

    /// Opens a batch.
    ///
    /// # Panics
    ///
    /// Panics if a batch is already open.
    #[track_caller]
    pub fn begin(&mut self) {
        if let Err(err) = self.try_begin() {
            fatal(err);
        }
    }

    /// Appends `edit` to the open batch.
    ///
    /// # Errors
    ///
    /// [`BatchError::NoOpenBatch`] if no batch is open.
    pub fn try_enqueue(&mut self, edit: Edit) -> BatchResult<()> {
        let pending = self.pending.as_mut().ok_or(BatchError::NoOpenBatch)?;
        tracing::trace!(target: targets::BATCH, ?edit, "queued edit");
        pending.push(edit);
        Ok(())
    }

    /// Appends `edit` to the open batch.
    ///
    /// # Panics
    ///
    /// Panics if no batch is open.
    #[track_caller]
    pub fn enqueue(&mut self, edit: Edit) {
        if let Err(err) = self.try_enqueue(edit) {
            fatal(err);
        }
    }

    /// Closes the batch and applies every queued edit to `sink` as one
    /// transaction.
    ///
    /// An empty batch never reaches the sink: `on_complete(true)` runs
    /// synchronously instead.
    ///
    /// # Errors
    ///
    /// [`BatchError::NoOpenBatch`] if no batch is open. `on_complete` is
    /// dropped without being called in that case.
    pub fn try_end<S: ViewSink + ?Sized>(
        &mut self,
        sink: &mut S,
        on_complete: Option<BatchCompletion>,
    ) -> BatchResult<()> {
        let edits = self.pending.take().ok_or(BatchError::NoOpenBatch)?;

        if edits.is_empty() {
            tracing::trace!(target: targets::BATCH, "empty batch, skipping view transaction");
            if let Some(on_complete) = on_complete {
                on_complete(true);
            }
            return Ok(());
        }

        let _span = BatchSpan::new(edits.len());
        let completion = on_complete.unwrap_or_else(|| Box::new(|_finished| {}));
        sink.apply_batch(edits, completion);
        Ok(())
    }

    /// Closes the batch and applies it. See [`try_end`](Self::try_end).
    ///
    /// # Panics
    ///
    /// Panics if no batch is open.
    #[track_caller]
    pub fn end<S: ViewSink + ?Sized>(&mut self, sink: &mut S, on_complete: Option<BatchCompletion>) {
        if let Err(err) = self.try_end(sink, on_complete) {
            fatal(err);
        }
    }

    /// Discards the open batch without applying it.
    ///
    /// # Errors
    ///
    /// [`BatchError::NoOpenBatch`] if no batch is open.
    pub fn try_cancel(&mut self) -> BatchResult<()> {
        let dropped = self.pending.take().ok_or(BatchError::NoOpenBatch)?;
        tracing::debug!(target: targets::BATCH, discarded = dropped.len(), "cancelled batch");
        Ok(())
    }

    /// Discards the open batch without applying it.
    ///
    /// # Panics
    ///
    /// Panics if no batch is open.
    #[track_caller]
    pub fn cancel(&mut self) {
        if let Err(err) = self.try_cancel() {
            fatal(err);
        }
    }

    // -------------------------------------------------------------------------
    // Grouped operations
    // -------------------------------------------------------------------------

    /// Queues a section insertion.
    #[track_caller]
    pub fn insert_sections(&mut self, sections: impl IntoIterator<Item = usize>) {
        self.enqueue(Edit::InsertSections(sections.into_iter().collect()));
    }

    /// Queues a section deletion.
    #[track_caller]
    pub fn delete_sections(&mut self, sections: impl IntoIterator<Item = usize>) {
        self.enqueue(Edit::DeleteSections(sections.into_iter().collect()));
    }

    /// Queues a section reload.
    #[track_caller]
    pub fn reload_sections(&mut self, sections: impl IntoIterator<Item = usize>) {
        self.enqueue(Edit::ReloadSections(sections.into_iter().collect()));
    }

    /// Queues a section move.
    #[track_caller]
    pub fn move_section(&mut self, from: usize, to: usize) {
        self.enqueue(Edit::MoveSection { from, to });
    }

    /// Queues an item insertion.
    #[track_caller]
    pub fn insert_items(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        self.enqueue(Edit::InsertItems(paths.into_iter().collect()));
    }

    /// Queues an item deletion.
    #[track_caller]
    pub fn delete_items(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        self.enqueue(Edit::DeleteItems(paths.into_iter().collect()));
    }

    /// Queues an item reload.
    #[track_caller]
    pub fn reload_items(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        self.enqueue(Edit::ReloadItems(paths.into_iter().collect()));
    }

    /// Queues an item move.
    #[track_caller]
    pub fn move_item(&mut self, from: IndexPath, to: IndexPath) {
        self.enqueue(Edit::MoveItem { from, to });
    }

    /// Queues arbitrary work to run inside the view's transaction.
    #[track_caller]
    pub fn custom(&mut self, action: impl FnOnce() + 'static) {
        self.enqueue(Edit::Custom(Box::new(action)));
    }
}

/// Reports a caller contract violation. These are never recoverable.
#[cold]
#[track_caller]
fn fatal(err: BatchError) -> ! {
    panic!("{err}")
}

static_assertions::assert_not_impl_any!(OperationQueue: Send, Sync);
static_assertions::assert_not_impl_any!(Edit: Send, Sync);
