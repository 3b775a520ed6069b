//! Move and reload policies.
//!
//! A [`PolicyStore`] holds, per view, how item moves are represented
//! ([`MoveMode`]) and how updated items are refreshed ([`ReloadPolicy`]).
//! Both fields fall back to a safe default while unset.

use std::fmt;
use std::rc::Rc;

use super::index::IndexPath;

/// Refreshes a visible cell in place.
///
/// Args: (cell, changed object, position before the batch, position after the
/// batch if known)
pub type ReloadHandler<C, T> = Rc<dyn Fn(&C, &T, IndexPath, Option<IndexPath>)>;

/// How an updated (or moved) item is refreshed.
pub enum ReloadPolicy<C, T> {
    /// The cell is never reloaded, e.g. because it observes its model object
    /// directly.
    None,
    /// The view reloads the item itself, inside the batch.
    ///
    /// Only list views support this; grid views drop the request.
    Reload,
    /// The cell is refreshed by the given handler.
    Handler(ReloadHandler<C, T>),
}

impl<C, T> ReloadPolicy<C, T> {
    /// Wraps a closure as a handler policy.
    pub fn handler<F>(handler: F) -> Self
    where
        F: Fn(&C, &T, IndexPath, Option<IndexPath>) + 'static,
    {
        Self::Handler(Rc::new(handler))
    }

    /// Returns `true` for [`ReloadPolicy::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<C, T> Default for ReloadPolicy<C, T> {
    fn default() -> Self {
        Self::None
    }
}

// Manual impls: derives would require `C: Clone` and `T: Clone`.
impl<C, T> Clone for ReloadPolicy<C, T> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Reload => Self::Reload,
            Self::Handler(handler) => Self::Handler(Rc::clone(handler)),
        }
    }
}

impl<C, T> fmt::Debug for ReloadPolicy<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Reload => write!(f, "Reload"),
            Self::Handler(_) => write!(f, "Handler(..)"),
        }
    }
}

/// Which reload policy applies to a moved item.
pub enum MoveReload<C, T> {
    /// Use the view's current [`ReloadPolicy`].
    Standard,
    /// Use this policy for moves only.
    Specific(ReloadPolicy<C, T>),
}

impl<C, T> Clone for MoveReload<C, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Standard => Self::Standard,
            Self::Specific(policy) => Self::Specific(policy.clone()),
        }
    }
}

impl<C, T> fmt::Debug for MoveReload<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Specific(policy) => f.debug_tuple("Specific").field(policy).finish(),
        }
    }
}

/// How a move notification is represented.
pub enum MoveMode<C, T> {
    /// The old position is deleted and the new position inserted.
    DeleteInsert,
    /// The view is sent a real move, then the item is refreshed with the
    /// given reload selection.
    Move(MoveReload<C, T>),
}

impl<C, T> Default for MoveMode<C, T> {
    fn default() -> Self {
        Self::DeleteInsert
    }
}

impl<C, T> Clone for MoveMode<C, T> {
    fn clone(&self) -> Self {
        match self {
            Self::DeleteInsert => Self::DeleteInsert,
            Self::Move(reload) => Self::Move(reload.clone()),
        }
    }
}

impl<C, T> fmt::Debug for MoveMode<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteInsert => write!(f, "DeleteInsert"),
            Self::Move(reload) => f.debug_tuple("Move").field(reload).finish(),
        }
    }
}

/// Per-view move and reload configuration.
///
/// # Example
///
/// ```
/// use lattice_batch::model::{MoveMode, MoveReload, PolicyStore, ReloadPolicy};
///
/// let mut policy: PolicyStore<(), ()> = PolicyStore::new();
/// assert!(matches!(policy.move_mode(), MoveMode::DeleteInsert));
/// assert!(policy.reload_mode().is_none());
///
/// policy.set_move_mode(MoveMode::Move(MoveReload::Standard));
/// policy.set_reload_mode(ReloadPolicy::Reload);
/// ```
pub struct PolicyStore<C, T> {
    move_mode: Option<MoveMode<C, T>>,
    reload_mode: Option<ReloadPolicy<C, T>>,
}

impl<C, T> Default for PolicyStore<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> fmt::Debug for PolicyStore<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyStore")
            .field("move_mode", &self.move_mode())
            .field("reload_mode", &self.reload_mode())
            .finish()
    }
}

impl<C, T> PolicyStore<C, T> {
    /// Creates a store with nothing set.
    pub fn new() -> Self {
        Self {
            move_mode: None,
            reload_mode: None,
        }
    }

    /// Current move mode. Defaults to [`MoveMode::DeleteInsert`].
    pub fn move_mode(&self) -> MoveMode<C, T> {
        self.move_mode.clone().unwrap_or_default()
    }

    /// Sets the move mode.
    pub fn set_move_mode(&mut self, mode: MoveMode<C, T>) {
        self.move_mode = Some(mode);
    }

    /// Current reload policy. Defaults to [`ReloadPolicy::None`].
    ///
    /// A handler is the usual recommendation, but none can be synthesized
    /// generically, so the default performs no reload.
    pub fn reload_mode(&self) -> ReloadPolicy<C, T> {
        self.reload_mode.clone().unwrap_or_default()
    }

    /// Sets the reload policy.
    pub fn set_reload_mode(&mut self, mode: ReloadPolicy<C, T>) {
        self.reload_mode = Some(mode);
    }

    /// Restores both defaults.
    pub fn reset(&mut self) {
        self.move_mode = None;
        self.reload_mode = None;
    }

    /// Resolves the reload policy applying to a move.
    pub fn resolve_move_reload(&self, reload: &MoveReload<C, T>) -> ReloadPolicy<C, T> {
        match reload {
            MoveReload::Standard => self.reload_mode(),
            MoveReload::Specific(policy) => policy.clone(),
        }
    }
}
