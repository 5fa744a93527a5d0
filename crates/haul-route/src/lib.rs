//! Route selection over weighted logistics networks.
//!
//! This crate picks optimal routes between facilities of a
//! [`Network`](haul_net::Network):
//!
//! - **A\*** point-to-point route selection ([`Router::route`])
//! - **Dijkstra** multi-source reach maps ([`Router::reach_map`])
//!
//! All searches run through [`Router`], which owns and reuses its internal
//! state so that repeated queries recycle allocations. Heuristics are
//! pluggable via the [`Heuristic`] trait; [`ZeroHeuristic`] turns the A*
//! search into plain Dijkstra and still yields optimal routes — a tighter
//! heuristic only makes the search faster, never more correct.
//!
//! "No route exists" is a normal outcome (`Ok(None)`), distinct from the
//! errors of looking up a location the network has never seen or feeding
//! the router a malformed snapshot.

mod astar;
mod dijkstra;
mod distance;
mod heuristic;
mod router;

pub use distance::{chebyshev, manhattan};
pub use heuristic::{Heuristic, Manhattan, ZeroHeuristic};
pub use router::{Route, Router, SiteCost};
