//! Facility coordinates.

use std::fmt;

/// A 2D integer coordinate identifying a facility (warehouse, plant,
/// distribution point) on the network.
///
/// Routing code treats locations as opaque identifiers: hashable for
/// adjacency lookups and totally ordered for deterministic tie-breaking.
/// Only heuristics are allowed to read the coordinates as geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let a = Location::new(5, 0);
        let b = Location::new(0, 1);
        assert!(a < b);
        assert!(Location::new(0, 1) < Location::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Location::new(2, -1).to_string(), "(2, -1)");
    }
}
