//! **haul-net** — Logistics network model (core types).
//!
//! This crate provides the foundational types used across the *haul*
//! ecosystem: facility coordinates, the directed weighted lane network, and
//! the shared error taxonomy. The routing algorithms live in `haul-route`.

pub mod location;
pub mod network;

pub use location::Location;
pub use network::{Cost, Lane, Network, NetworkError};
