use haul_net::{Cost, Lane, Location, Network, NetworkError};

use crate::Router;
use crate::router::{OpenRef, SiteCost};

impl Router {
    /// Compute a multi-source Dijkstra cost map over the network.
    ///
    /// Every source starts at cost 0; expansion stops once the accumulated
    /// cost would exceed `max_cost`. Returns the reached sites in
    /// finalization order (non-decreasing cost), each with its minimum cost
    /// from the nearest source. Pass `Cost::MAX` to map everything reachable
    /// — useful as a connectivity audit before routing on a network that
    /// may be disconnected.
    ///
    /// Fails with [`NetworkError::UnknownLocation`] when a source is absent
    /// from the network.
    pub fn reach_map(
        &mut self,
        net: &Network,
        sources: &[Location],
        max_cost: Cost,
    ) -> Result<&[SiteCost], NetworkError> {
        self.reset();
        self.reach_results.clear();
        self.reach_costs.clear();

        for &src in sources {
            net.neighbors(src)?;
            if self.best_g.contains_key(&src) {
                continue;
            }
            self.best_g.insert(src, 0);
            let seq = self.next_seq();
            self.open.push(OpenRef {
                f: 0,
                g: 0,
                seq,
                site: src,
            });
        }

        while let Some(OpenRef { g, site, .. }) = self.open.pop() {
            if self.closed.contains(&site) {
                continue;
            }
            self.closed.insert(site);
            self.reach_results.push(SiteCost { site, cost: g });
            self.reach_costs.insert(site, g);

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
                if tentative > max_cost {
                    continue;
                }
                if self.best_g.get(&next).is_some_and(|&best| tentative >= best) {
                    continue;
                }
                self.best_g.insert(next, tentative);
                let seq = self.next_seq();
                self.open.push(OpenRef {
                    f: tentative,
                    g: tentative,
                    seq,
                    site: next,
                });
            }
        }

        log::debug!(
            "reach map from {} source(s): {} site(s) within budget",
            sources.len(),
            self.reach_results.len()
        );
        Ok(&self.reach_results)
    }

    /// Cost of `site` in the last [`reach_map`](Self::reach_map) result.
    ///
    /// Returns `None` for sites outside the budget, unreachable ones, or
    /// when no reach map has been computed yet.
    pub fn reach_at(&self, site: Location) -> Option<Cost> {
        self.reach_costs.get(&site).copied()
    }
}
