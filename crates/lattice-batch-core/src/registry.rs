//! Identity-keyed side table for per-view state.
//!
//! Views are externally owned and cannot carry batch state themselves. The
//! component that composes coordinators with concrete views registers each
//! view here, keeps the returned [`ViewId`] next to the view, and disposes the
//! record when the view goes away.
//!
//! # Example
//!
//! ```
//! use lattice_batch_core::ViewRegistry;
//!
//! let mut registry: ViewRegistry<Vec<&str>> = ViewRegistry::new();
//! let id = registry.register(Vec::new());
//!
//! registry.get_mut(id).unwrap().push("pending");
//! assert_eq!(registry.get(id).map(Vec::len), Some(1));
//!
//! // Cleanup on view disposal
//! assert!(registry.dispose(id).is_some());
//! assert!(!registry.contains(id));
//! ```

use slotmap::{SlotMap, new_key_type};

use crate::error::{BatchError, BatchResult};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a registered view.
    ///
    /// `ViewId`s stay valid until the view is disposed. A disposed ID never
    /// aliases a later registration.
    pub struct ViewId;
}

impl ViewId {
    /// Convert the ViewId to a raw u64 value.
    ///
    /// This is useful for interop with hosts that key views numerically.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a ViewId from a raw u64 value.
    ///
    /// This does not check that the ID is registered.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Arena-backed map from view identity to that view's record.
pub struct ViewRegistry<R> {
    records: SlotMap<ViewId, R>,
}

impl<R> Default for ViewRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ViewRegistry<R> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
        }
    }

    /// Register a view's record and return its ID.
    pub fn register(&mut self, record: R) -> ViewId {
        let id = self.records.insert(record);
        tracing::trace!(target: targets::REGISTRY, ?id, "registered view");
        id
    }

    /// Remove a view's record, returning it if the view was registered.
    pub fn dispose(&mut self, id: ViewId) -> Option<R> {
        let record = self.records.remove(id);
        tracing::trace!(target: targets::REGISTRY, ?id, found = record.is_some(), "disposed view");
        record
    }

    /// Check if a view is registered.
    pub fn contains(&self, id: ViewId) -> bool {
        self.records.contains_key(id)
    }

    /// Get a view's record.
    pub fn get(&self, id: ViewId) -> Option<&R> {
        self.records.get(id)
    }

    /// Get a view's record mutably.
    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut R> {
        self.records.get_mut(id)
    }

    /// Get a view's record mutably, failing with [`BatchError::UnknownView`].
    pub fn try_get_mut(&mut self, id: ViewId) -> BatchResult<&mut R> {
        self.records.get_mut(id).ok_or(BatchError::UnknownView)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no view is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over registered view IDs.
    pub fn ids(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.records.keys()
    }
}

static_assertions::assert_impl_all!(ViewId: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_dispose() {
        let mut registry = ViewRegistry::new();
        let a = registry.register(1u32);
        let b = registry.register(2u32);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(a), Some(&1));
        assert_eq!(registry.get(b), Some(&2));

        assert_eq!(registry.dispose(a), Some(1));
        assert!(!registry.contains(a));
        assert_eq!(registry.dispose(a), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_disposed_id_does_not_alias() {
        let mut registry = ViewRegistry::new();
        let old = registry.register("old");
        registry.dispose(old);
        let new = registry.register("new");

        assert_ne!(old, new);
        assert_eq!(registry.get(old), None);
        assert_eq!(registry.get(new), Some(&"new"));
    }

    #[test]
    fn test_try_get_mut_unknown() {
        let mut registry: ViewRegistry<u8> = ViewRegistry::new();
        let id = registry.register(0);
        registry.dispose(id);
        assert_eq!(registry.try_get_mut(id), Err(BatchError::UnknownView));
    }

    #[test]
    fn test_raw_round_trip() {
        let mut registry = ViewRegistry::new();
        let id = registry.register(());
        assert_eq!(ViewId::from_raw(id.as_raw()), id);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![id]);
    }
}
