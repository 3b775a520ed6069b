//! Change notifications delivered by a data-change observer.
//!
//! Observers transmit the kind of a change as a raw ordinal. Some observers
//! are known to deliver ordinals that match no declared kind, so decoding is
//! total: anything unknown becomes [`ChangeKind::Unrecognized`] and is
//! ignored by the translator rather than being mistaken for a real kind.

use std::fmt;

use super::index::IndexPath;

/// The kind of a section or item change.
///
/// # Example
///
/// ```
/// use lattice_batch::model::ChangeKind;
///
/// assert_eq!(ChangeKind::from_raw(1), ChangeKind::Insert);
/// assert_eq!(ChangeKind::from_raw(0), ChangeKind::Unrecognized(0));
/// assert_eq!(ChangeKind::Move.raw(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// An item or section was inserted.
    Insert,
    /// An item or section was deleted.
    Delete,
    /// An item moved to a new position.
    Move,
    /// An item's content changed in place.
    Update,
    /// An ordinal that matches no declared kind.
    Unrecognized(u32),
}

impl ChangeKind {
    /// Raw ordinal of [`ChangeKind::Insert`].
    pub const INSERT_RAW: u32 = 1;
    /// Raw ordinal of [`ChangeKind::Delete`].
    pub const DELETE_RAW: u32 = 2;
    /// Raw ordinal of [`ChangeKind::Move`].
    pub const MOVE_RAW: u32 = 3;
    /// Raw ordinal of [`ChangeKind::Update`].
    pub const UPDATE_RAW: u32 = 4;

    /// Decodes a raw ordinal as transmitted by the observer.
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            Self::INSERT_RAW => Self::Insert,
            Self::DELETE_RAW => Self::Delete,
            Self::MOVE_RAW => Self::Move,
            Self::UPDATE_RAW => Self::Update,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw ordinal for this kind.
    pub const fn raw(self) -> u32 {
        match self {
            Self::Insert => Self::INSERT_RAW,
            Self::Delete => Self::DELETE_RAW,
            Self::Move => Self::MOVE_RAW,
            Self::Update => Self::UPDATE_RAW,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<u32> for ChangeKind {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Delete => write!(f, "delete"),
            Self::Move => write!(f, "move"),
            Self::Update => write!(f, "update"),
            Self::Unrecognized(raw) => write!(f, "unrecognized({raw})"),
        }
    }
}

/// One event of an observer's notification cycle.
///
/// A cycle is `WillChangeContent`, any number of `Section`/`Item` events, then
/// `DidChangeContent`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent<T> {
    /// The observer is about to report changes.
    WillChangeContent,
    /// A section changed.
    Section {
        /// Index of the section.
        index: usize,
        /// Kind of change.
        kind: ChangeKind,
    },
    /// An item changed.
    Item {
        /// The changed object.
        object: T,
        /// Position before the change, when the observer supplies one.
        old_path: Option<IndexPath>,
        /// Kind of change.
        kind: ChangeKind,
        /// Position after the change, when the observer supplies one.
        new_path: Option<IndexPath>,
    },
    /// The observer finished reporting changes.
    ///
    /// Carries no completion; pass one through
    /// [`ChangeTranslator::handle_events_with`](super::ChangeTranslator::handle_events_with).
    DidChangeContent,
}

impl<T> ChangeEvent<T> {
    /// Creates a section event from a raw kind ordinal.
    pub fn section(index: usize, raw_kind: u32) -> Self {
        Self::Section {
            index,
            kind: ChangeKind::from_raw(raw_kind),
        }
    }

    /// Creates an item event from a raw kind ordinal.
    pub fn item(
        object: T,
        old_path: Option<IndexPath>,
        raw_kind: u32,
        new_path: Option<IndexPath>,
    ) -> Self {
        Self::Item {
            object,
            old_path,
            kind: ChangeKind::from_raw(raw_kind),
            new_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_declared_kinds() {
        assert_eq!(ChangeKind::from_raw(1), ChangeKind::Insert);
        assert_eq!(ChangeKind::from_raw(2), ChangeKind::Delete);
        assert_eq!(ChangeKind::from_raw(3), ChangeKind::Move);
        assert_eq!(ChangeKind::from_raw(4), ChangeKind::Update);
    }

    #[test]
    fn test_decode_out_of_range() {
        for raw in [0, 5, 42, u32::MAX] {
            let kind = ChangeKind::from(raw);
            assert_eq!(kind, ChangeKind::Unrecognized(raw));
            assert_eq!(kind.raw(), raw);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ChangeKind::Update.to_string(), "update");
        assert_eq!(ChangeKind::Unrecognized(9).to_string(), "unrecognized(9)");
    }

    #[test]
    fn test_event_constructors_decode_raw_kind() {
        let event: ChangeEvent<()> = ChangeEvent::section(2, 1);
        assert_eq!(
            event,
            ChangeEvent::Section {
                index: 2,
                kind: ChangeKind::Insert
            }
        );

        let event = ChangeEvent::item("a", None, 77, Some(IndexPath::new(0, 1)));
        match event {
            ChangeEvent::Item { kind, object, .. } => {
                assert_eq!(kind, ChangeKind::Unrecognized(77));
                assert_eq!(object, "a");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
