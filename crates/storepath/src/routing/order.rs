use log::debug;
use rayon::prelude::*;

use super::grid::GridMap;
use super::search::find_path;
use super::types::{Location, Stop};

/// Walking distance between two points as the waypoint count of the shortest path.
/// `None` when no path exists.
pub fn walking_distance(grid: &GridMap, from: Location, to: Location) -> Option<usize> {
    let path = find_path(grid, from, to);
    (!path.is_empty()).then_some(path.len())
}

/// Greedy nearest-neighbour ordering of `stops`, starting from `start`.
///
/// At every step each unvisited stop is ranked by its walking distance from the
/// current position and the closest one is taken; ties go to the stop listed first.
/// Stops that cannot be reached rank behind every reachable one. Taking an unreachable
/// stop does not move the current position, so the rest of the order is still measured
/// from where the shopper actually stands.
///
/// Each step runs one search per remaining stop, so a full ordering costs `O(k^2)`
/// searches for `k` stops. The searches of one step run in parallel.
pub fn order_stops(grid: &GridMap, start: &Stop, stops: Vec<Stop>) -> Vec<Stop> {
    let mut unvisited = stops;
    let mut order = Vec::with_capacity(unvisited.len());
    let mut current = start.location;

    while !unvisited.is_empty() {
        let distances: Vec<Option<usize>> = unvisited
            .par_iter()
            .map(|candidate| walking_distance(grid, current, candidate.location))
            .collect();

        let next = nearest(&distances);
        let chosen = unvisited.remove(next);
        match distances[next] {
            Some(d) => {
                debug!("next stop '{}' at {d} waypoints", chosen.id);
                current = chosen.location;
            }
            None => debug!("next stop '{}' is unreachable", chosen.id),
        }
        order.push(chosen);
    }

    order
}

/// Index of the smallest distance. Unreachable counts as infinitely far; ties resolve
/// to the lowest index.
fn nearest(distances: &[Option<usize>]) -> usize {
    distances
        .iter()
        .enumerate()
        .min_by_key(|&(i, d)| (d.unwrap_or(usize::MAX), i))
        .map_or(0, |(i, _)| i)
}
