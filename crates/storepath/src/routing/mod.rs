pub mod grid;
pub mod layout;
pub mod order;
pub mod search;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, warn};

use grid::GridMap;
use layout::StoreLayout;
use order::order_stops;
use search::find_path;
use types::{Location, RoutePlan, RouteWarning, Stop};

/// Resolves stop identifiers to floor locations.
///
/// Implemented by whatever owns the product records; the planner only reads from it.
pub trait StopLookup {
    fn locate(&self, id: &str) -> Option<Location>;
}

impl StopLookup for HashMap<String, Location> {
    fn locate(&self, id: &str) -> Option<Location> {
        self.get(id).copied()
    }
}

impl StopLookup for BTreeMap<String, Location> {
    fn locate(&self, id: &str) -> Option<Location> {
        self.get(id).copied()
    }
}

impl<T: StopLookup + ?Sized> StopLookup for &T {
    fn locate(&self, id: &str) -> Option<Location> {
        (**self).locate(id)
    }
}

/// Plan one walking route through a store.
///
/// The route starts at the layout's entrance, visits every resolvable stop in greedy
/// nearest-by-walking-distance order, and ends at the checkout. Per-leg paths are joined
/// into one continuous path without repeating the shared waypoint at each stop.
///
/// Nothing here fails: unknown ids and legs that cannot be walked are left out and
/// reported in [`RoutePlan::warnings`]. A stop whose leg cannot be walked does not move
/// the shopper, so the following leg starts from the last stop actually reached.
///
/// # Arguments
/// * `layout`: Grid plus entrance and checkout.
/// * `stop_ids`: Requested stops, unordered. Repeated ids count once.
/// * `lookup`: Resolves ids to locations.
///
/// # Returns
/// A `RoutePlan`. Its path is empty when no id resolves or nothing can be walked.
pub fn plan<S: AsRef<str>>(
    layout: &StoreLayout,
    stop_ids: &[S],
    lookup: &impl StopLookup,
) -> RoutePlan {
    let (stops, mut warnings) = resolve_stops(stop_ids, lookup);
    for warning in &warnings {
        warn!("{warning}");
    }

    if stops.is_empty() {
        return RoutePlan {
            warnings,
            ..RoutePlan::default()
        };
    }

    let entrance = layout.entrance_stop();
    let mut visit = vec![entrance.clone()];
    visit.extend(order_stops(layout.grid(), &entrance, stops));
    visit.push(layout.checkout_stop());

    debug!(
        "visit order: {}",
        visit
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    let mut planned = stitch_legs(layout.grid(), &visit);
    warnings.append(&mut planned.warnings);
    planned.warnings = warnings;
    planned
}

/// Convenience form of [`plan`] that returns only the path.
pub fn plan_route<S: AsRef<str>>(
    layout: &StoreLayout,
    stop_ids: &[S],
    lookup: &impl StopLookup,
) -> Vec<Location> {
    plan(layout, stop_ids, lookup).path
}

/// Resolve ids in request order, dropping repeats. Unknown ids become warnings.
fn resolve_stops<S: AsRef<str>>(
    stop_ids: &[S],
    lookup: &impl StopLookup,
) -> (Vec<Stop>, Vec<RouteWarning>) {
    let mut seen = HashSet::new();
    let mut stops = Vec::new();
    let mut warnings = Vec::new();

    for id in stop_ids {
        let id = id.as_ref();
        if !seen.insert(id) {
            continue;
        }
        match lookup.locate(id) {
            Some(location) => stops.push(Stop::new(id, location)),
            None => warnings.push(RouteWarning::UnknownStop { id: id.to_string() }),
        }
    }

    (stops, warnings)
}

/// Walk `visit` in order and join the legs.
///
/// Each leg starts from the last stop reached. An unwalkable leg is skipped with a
/// warning. Every appended leg after the first drops its first waypoint, which is the
/// previous leg's last.
fn stitch_legs(grid: &GridMap, visit: &[Stop]) -> RoutePlan {
    let mut planned = RoutePlan::default();
    let Some((first, rest)) = visit.split_first() else {
        return planned;
    };

    let mut current = first;
    planned.stops.push(first.clone());

    for next in rest {
        let leg = find_path(grid, current.location, next.location);
        if leg.is_empty() {
            let warning = RouteWarning::UnreachableLeg {
                from: current.id.clone(),
                to: next.id.clone(),
            };
            warn!("{warning}");
            planned.warnings.push(warning);
            continue;
        }

        let skip = usize::from(!planned.path.is_empty());
        planned.path.extend(leg.into_iter().skip(skip));
        planned.stops.push(next.clone());
        current = next;
    }

    if planned.path.is_empty() {
        planned.stops.clear();
    }
    planned
}
