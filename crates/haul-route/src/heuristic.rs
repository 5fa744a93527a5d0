use haul_net::{Cost, Location};

use crate::distance::manhattan;

/// Remaining-cost estimate used to order A* exploration.
///
/// Implementations must be admissible: `estimate(from, to)` never exceeds
/// the true cost of the cheapest route from `from` to `to`, and is never
/// negative. A consistent estimate (one that also satisfies
/// `estimate(a, to) <= weight(a, b) + estimate(b, to)` along every lane)
/// additionally guarantees no site ever needs re-expansion.
pub trait Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    fn estimate(&self, from: Location, to: Location) -> Cost;
}

/// Manhattan-distance estimate. Admissible whenever every lane weight is at
/// least the Manhattan distance between its endpoints, which holds for
/// networks whose costs scale with travelled distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Location, to: Location) -> Cost {
        manhattan(from, to)
    }
}

/// The all-zeroes estimate. Trivially admissible on any network; reduces
/// the search to Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _from: Location, _to: Location) -> Cost {
        0
    }
}
