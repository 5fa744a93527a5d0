use std::collections::{BinaryHeap, HashMap, HashSet};

use haul_net::{Cost, Location};

/// A selected route: the visited sites from start to goal inclusive, and
/// the sum of the traversed lane weights.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub sites: Vec<Location>,
    pub total_cost: Cost,
}

/// A site with its minimum cost from the query sources, returned from reach
/// map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteCost {
    pub site: Location,
    pub cost: Cost,
}

// ---------------------------------------------------------------------------
// Internal frontier entry for A*/Dijkstra searches
// ---------------------------------------------------------------------------

/// Frontier entry. `seq` is the insertion counter: among entries with equal
/// `f` the one with the smaller `g` wins, and among those the one inserted
/// earliest, so pop order is fully deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) f: Cost,
    pub(crate) g: Cost,
    pub(crate) seq: u64,
    pub(crate) site: Location,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (f, g, seq).
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Central coordinator for route queries over a network.
///
/// `Router` owns the open frontier, the best-known-cost index, the closed
/// set and the predecessor links, so repeated queries reuse the same
/// allocations. It holds no reference to any network: the snapshot is passed
/// per query and is only read. For concurrent searches, give each thread its
/// own `Router` over the shared snapshot.
#[derive(Default)]
pub struct Router {
    pub(crate) open: BinaryHeap<OpenRef>,
    pub(crate) best_g: HashMap<Location, Cost>,
    pub(crate) parent: HashMap<Location, Location>,
    pub(crate) closed: HashSet<Location>,
    pub(crate) reach_results: Vec<SiteCost>,
    pub(crate) reach_costs: HashMap<Location, Cost>,
    seq: u64,
}

impl Router {
    /// Create a new router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all per-query state, keeping capacity.
    pub(crate) fn reset(&mut self) {
        self.open.clear();
        self.best_g.clear();
        self.parent.clear();
        self.closed.clear();
        self.seq = 0;
    }

    /// Next insertion sequence number for frontier entries.
    pub(crate) fn next_seq(&mut self) -> u64 {
        let s = self.seq;
        self.seq += 1;
        s
    }

    /// Walk predecessor links back from `goal` and return the route.
    pub(crate) fn rebuild(&self, start: Location, goal: Location, total_cost: Cost) -> Route {
        let mut sites = vec![goal];
        let mut cur = goal;
        while cur != start {
            cur = self.parent[&cur];
            sites.push(cur);
        }
        sites.reverse();
        Route { sites, total_cost }
    }
}
