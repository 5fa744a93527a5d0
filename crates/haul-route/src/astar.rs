use haul_net::{Lane, Location, Network, NetworkError};

use crate::Router;
use crate::heuristic::Heuristic;
use crate::router::{OpenRef, Route};

impl Router {
    /// Select the cheapest route from `from` to `to` using A*.
    ///
    /// Returns the full route (both endpoints included) or `Ok(None)` when
    /// no sequence of lanes connects the two sites — a disconnected network
    /// is a business outcome, not an error. Fails with
    /// [`NetworkError::UnknownLocation`] when either endpoint is absent from
    /// the network, and with [`NetworkError::NegativeWeight`] if a malformed
    /// snapshot exposes a negative lane during expansion.
    ///
    /// The search is deterministic: frontier ties are broken by smaller
    /// accumulated cost, then by insertion order, so equal inputs always
    /// produce the same route even when several optimal routes exist.
    pub fn route<H: Heuristic + ?Sized>(
        &mut self,
        net: &Network,
        heuristic: &H,
        from: Location,
        to: Location,
    ) -> Result<Option<Route>, NetworkError> {
        // Both endpoints must be known before the search starts.
        net.neighbors(from)?;
        net.neighbors(to)?;

        if from == to {
            return Ok(Some(Route {
                sites: vec![from],
                total_cost: 0,
            }));
        }

        self.reset();
        self.best_g.insert(from, 0);
        let seq = self.next_seq();
        self.open.push(OpenRef {
            f: heuristic.estimate(from, to),
            g: 0,
            seq,
            site: from,
        });

        while let Some(OpenRef { g, site, .. }) = self.open.pop() {
            // Entries superseded by a cheaper arrival pop after that arrival
            // has already been expanded.
            if self.closed.contains(&site) {
                continue;
            }

            if site == to {
                log::debug!("route {from} -> {to}: found, cost {g}");
                return Ok(Some(self.rebuild(from, to, g)));
            }

            self.closed.insert(site);
            log::trace!("expanding {site} at g={g}");

            for &Lane { to: next, weight } in net.neighbors(site)? {
                if weight < 0 {
                    return Err(NetworkError::NegativeWeight {
                        from: site,
                        to: next,
                        weight,
                    });
                }
                if self.closed.contains(&next) {
                    continue;
                }
                let tentative = g + weight;
                if self.best_g.get(&next).is_some_and(|&best| tentative >= best) {
                    continue;
                }
                self.best_g.insert(next, tentative);
                self.parent.insert(next, site);
                let seq = self.next_seq();
                self.open.push(OpenRef {
                    f: tentative + heuristic.estimate(next, to),
                    g: tentative,
                    seq,
                    site: next,
                });
            }
        }

        log::debug!("route {from} -> {to}: frontier exhausted, no route");
        Ok(None)
    }
}
