//! Route planning over a small transportation network.
//!
//! Builds a 7-site network (warehouses, transfer hubs, distribution
//! points), selects the optimal route between a warehouse and a
//! distribution point with A*, cross-checks the cost with a plain Dijkstra
//! search, and prints which sites fall within a transport budget.

use haul_net::{Cost, Location, Network, NetworkError};
use haul_route::{Manhattan, Router, ZeroHeuristic};

fn build_network() -> Result<Network, NetworkError> {
    let mut net = Network::new();
    let l = Location::new;
    for (from, to, w) in [
        (l(0, 0), l(0, 1), 5),
        (l(0, 0), l(1, 0), 10),
        (l(0, 0), l(2, 0), 8),
        (l(0, 1), l(0, 0), 5),
        (l(0, 1), l(1, 0), 3),
        (l(0, 1), l(1, 1), 7),
        (l(0, 1), l(1, 2), 6),
        (l(1, 0), l(0, 0), 10),
        (l(1, 0), l(0, 1), 3),
        (l(1, 0), l(1, 1), 2),
        (l(1, 1), l(0, 1), 7),
        (l(1, 1), l(1, 0), 2),
        (l(1, 1), l(1, 2), 9),
        (l(2, 0), l(0, 0), 8),
        (l(2, 0), l(1, 2), 4),
        (l(2, 0), l(2, 1), 12),
        (l(1, 2), l(0, 1), 6),
        (l(1, 2), l(1, 1), 9),
        (l(1, 2), l(2, 0), 4),
        (l(1, 2), l(2, 1), 5),
        (l(2, 1), l(2, 0), 12),
        (l(2, 1), l(1, 2), 5),
    ] {
        net.add_lane(from, to, w)?;
    }
    Ok(net)
}

fn main() -> Result<(), NetworkError> {
    let net = build_network()?;
    let warehouse = Location::new(0, 0);
    let distribution = Location::new(2, 1);

    let mut router = Router::new();

    println!("Route {warehouse} -> {distribution}");
    match router.route(&net, &Manhattan, warehouse, distribution)? {
        Some(route) => {
            let legs: Vec<String> = route.sites.iter().map(Location::to_string).collect();
            println!("  optimal: {} (cost {})", legs.join(" -> "), route.total_cost);
        }
        None => println!("  no route available"),
    }

    // The zero heuristic degrades A* to Dijkstra; the cost must match.
    if let Some(route) = router.route(&net, &ZeroHeuristic, warehouse, distribution)? {
        println!("  dijkstra cross-check: cost {}", route.total_cost);
    }

    let budget: Cost = 10;
    println!("Sites within budget {budget} of {warehouse}:");
    for sc in router.reach_map(&net, &[warehouse], budget)? {
        println!("  {} at cost {}", sc.site, sc.cost);
    }

    Ok(())
}
