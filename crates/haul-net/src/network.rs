//! The directed weighted lane network.

use std::collections::HashMap;
use std::fmt;

use crate::Location;

/// Cost of traversing a lane, and of accumulated routes. Always >= 0.
pub type Cost = i64;

/// A directed lane to a neighboring site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub to: Location,
    pub weight: Cost,
}

/// Errors from network construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The location has no entry in the network.
    UnknownLocation(Location),
    /// A lane carries a negative weight.
    NegativeWeight {
        from: Location,
        to: Location,
        weight: Cost,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocation(loc) => write!(f, "unknown location {loc}"),
            Self::NegativeWeight { from, to, weight } => {
                write!(f, "lane {from} -> {to} has negative weight {weight}")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// A snapshot of the transportation network: each site maps to its outgoing
/// lanes. Lanes are directed; a site may exist with no lanes at all.
///
/// The network is constructed once, then read-only for the duration of a
/// search. Routing code never mutates it, so sharing one snapshot across
/// threads is safe as long as each thread brings its own router.
#[derive(Debug, Clone, Default)]
pub struct Network {
    sites: HashMap<Location, Vec<Lane>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a site with no outgoing lanes. Idempotent: an already-known
    /// site keeps its lanes.
    pub fn add_site(&mut self, site: Location) {
        self.sites.entry(site).or_default();
    }

    /// Insert a directed lane. Both endpoints become known sites. If a lane
    /// `from -> to` already exists its weight is overwritten.
    ///
    /// Fails with [`NetworkError::NegativeWeight`] when `weight < 0`; the
    /// routing algorithms require non-negative costs.
    pub fn add_lane(&mut self, from: Location, to: Location, weight: Cost) -> Result<(), NetworkError> {
        if weight < 0 {
            return Err(NetworkError::NegativeWeight { from, to, weight });
        }
        self.add_site(to);
        let lanes = self.sites.entry(from).or_default();
        match lanes.iter_mut().find(|l| l.to == to) {
            Some(lane) => lane.weight = weight,
            None => lanes.push(Lane { to, weight }),
        }
        Ok(())
    }

    /// Outgoing lanes of `site`, in insertion order.
    ///
    /// An isolated but known site yields an empty slice; a location never
    /// registered yields [`NetworkError::UnknownLocation`].
    pub fn neighbors(&self, site: Location) -> Result<&[Lane], NetworkError> {
        self.sites
            .get(&site)
            .map(Vec::as_slice)
            .ok_or(NetworkError::UnknownLocation(site))
    }

    /// Whether `site` is known to the network.
    #[inline]
    pub fn contains(&self, site: Location) -> bool {
        self.sites.contains_key(&site)
    }

    /// Number of known sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over all known sites, in no particular order.
    pub fn sites(&self) -> impl Iterator<Item = Location> + '_ {
        self.sites.keys().copied()
    }
}

// Hand-written serde: a JSON map cannot be keyed by a struct, so the network
// serializes as a site-sorted list of (site, lanes) pairs.
#[cfg(feature = "serde")]
impl serde::Serialize for Network {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pairs: Vec<(&Location, &Vec<Lane>)> = self.sites.iter().collect();
        pairs.sort_by_key(|(site, _)| **site);
        serializer.collect_seq(pairs)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Network {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs: Vec<(Location, Vec<Lane>)> = Vec::deserialize(deserializer)?;
        Ok(Network {
            sites: pairs.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_lane_registers_both_endpoints() {
        let mut net = Network::new();
        net.add_lane(Location::new(0, 0), Location::new(1, 0), 4).unwrap();
        assert!(net.contains(Location::new(0, 0)));
        assert!(net.contains(Location::new(1, 0)));
        assert_eq!(net.len(), 2);
        // The destination is known but isolated.
        assert_eq!(net.neighbors(Location::new(1, 0)).unwrap(), &[]);
    }

    #[test]
    fn add_lane_overwrites_weight() {
        let mut net = Network::new();
        let a = Location::new(0, 0);
        let b = Location::new(1, 0);
        net.add_lane(a, b, 4).unwrap();
        net.add_lane(a, b, 9).unwrap();
        assert_eq!(net.neighbors(a).unwrap(), &[Lane { to: b, weight: 9 }]);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut net = Network::new();
        let a = Location::new(0, 0);
        let b = Location::new(1, 0);
        let err = net.add_lane(a, b, -3).unwrap_err();
        assert_eq!(
            err,
            NetworkError::NegativeWeight {
                from: a,
                to: b,
                weight: -3
            }
        );
        // Nothing was inserted.
        assert!(net.is_empty());
    }

    #[test]
    fn unknown_location_is_distinct_from_isolated() {
        let mut net = Network::new();
        let known = Location::new(0, 0);
        let unknown = Location::new(9, 9);
        net.add_site(known);
        assert_eq!(net.neighbors(known).unwrap(), &[]);
        assert_eq!(
            net.neighbors(unknown).unwrap_err(),
            NetworkError::UnknownLocation(unknown)
        );
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut net = Network::new();
        let a = Location::new(0, 0);
        net.add_lane(a, Location::new(2, 0), 8).unwrap();
        net.add_lane(a, Location::new(0, 1), 5).unwrap();
        net.add_lane(a, Location::new(1, 0), 10).unwrap();
        let order: Vec<Location> = net.neighbors(a).unwrap().iter().map(|l| l.to).collect();
        assert_eq!(
            order,
            vec![Location::new(2, 0), Location::new(0, 1), Location::new(1, 0)]
        );
    }

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownLocation(Location::new(9, 9));
        assert_eq!(err.to_string(), "unknown location (9, 9)");
    }
}
