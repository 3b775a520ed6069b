//! Index paths for addressing items in sectioned views.
//!
//! The `IndexPath` type is the way change notifications and view sinks refer
//! to an item: a section number plus the item's position inside that section.

use std::fmt;

/// Represents the position of an item within a sectioned list or grid.
///
/// Index paths describe positions at one point in time. A path taken before
/// a batch is applied ("before" position) generally differs from the path of
/// the same item after the batch ("after" position).
///
/// # Ordering
///
/// Paths order by section first, then by item.
///
/// # Example
///
/// ```
/// use lattice_batch::model::IndexPath;
///
/// let path = IndexPath::new(0, 2);
/// assert_eq!(path.section(), 0);
/// assert_eq!(path.item(), 2);
/// assert_eq!(path.to_string(), "(0, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    section: usize,
    item: usize,
}

impl IndexPath {
    /// Creates an index path for `item` in `section`.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Returns the section of this path.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the item (row) of this path within its section.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let path = IndexPath::new(3, 7);
        assert_eq!(path.section(), 3);
        assert_eq!(path.item(), 7);
        assert_eq!(IndexPath::default(), IndexPath::new(0, 0));
    }

    #[test]
    fn test_ordering() {
        let a = IndexPath::new(0, 5);
        let b = IndexPath::new(1, 0);
        let c = IndexPath::new(1, 2);

        assert!(a < b); // Section 0 < Section 1
        assert!(b < c); // Same section, item 0 < item 2
    }

    #[test]
    fn test_from_tuple_and_display() {
        let path: IndexPath = (2, 9).into();
        assert_eq!(path, IndexPath::new(2, 9));
        assert_eq!(format!("{path}"), "(2, 9)");
    }
}
