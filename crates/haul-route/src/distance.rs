use haul_net::{Cost, Location};

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> Cost {
    (a.x as Cost - b.x as Cost).abs() + (a.y as Cost - b.y as Cost).abs()
}

/// Chebyshev (L∞) distance between two locations.
#[inline]
pub fn chebyshev(a: Location, b: Location) -> Cost {
    (a.x as Cost - b.x as Cost).abs().max((a.y as Cost - b.y as Cost).abs())
}
