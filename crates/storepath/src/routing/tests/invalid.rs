use super::*;
use crate::routing::types::RouteWarning;
use crate::routing::{plan, plan_route};

#[test]
fn no_stops_gives_empty_route() {
    let store = open_layout(5, 5, (0, 0), (4, 4));
    let lookup = stops(&[("A", 2, 2)]);
    let plan = plan::<&str>(&store, &[], &lookup);
    assert!(plan.is_empty());
    assert!(plan.stops.is_empty());
    assert!(plan.warnings.is_empty());
}

#[test]
fn only_unknown_ids_gives_empty_route_with_warnings() {
    let store = open_layout(5, 5, (0, 0), (4, 4));
    let lookup = stops(&[("A", 2, 2)]);
    let plan = plan(&store, &["X", "Y"], &lookup);
    assert!(plan.is_empty());
    assert_eq!(
        plan.warnings,
        vec![
            RouteWarning::UnknownStop { id: "X".into() },
            RouteWarning::UnknownStop { id: "Y".into() },
        ]
    );
}

#[test]
fn unknown_ids_are_skipped() {
    let store = open_layout(5, 5, (0, 0), (4, 4));
    let lookup = stops(&[("A", 2, 2)]);
    let with_unknown = plan(&store, &["X", "A"], &lookup);
    let without = plan(&store, &["A"], &lookup);
    assert_eq!(with_unknown.path, without.path);
    assert_eq!(stop_ids(&with_unknown), vec!["entrance", "A", "checkout"]);
    assert_eq!(with_unknown.warnings.len(), 1);
}

#[test]
fn repeated_ids_are_visited_once() {
    let store = open_layout(5, 5, (0, 0), (4, 4));
    let lookup = stops(&[("A", 2, 2)]);
    let repeated = plan(&store, &["A", "A", "A"], &lookup);
    assert_eq!(stop_ids(&repeated), vec!["entrance", "A", "checkout"]);
    assert_eq!(repeated.path, plan_route(&store, &["A"], &lookup));
    assert!(repeated.warnings.is_empty());
}

#[test]
fn blocked_entrance_gives_empty_route() {
    let store = layout("#....\n.....\n.....", (0, 0), (4, 2));
    let lookup = stops(&[("A", 2, 1)]);
    let plan = plan(&store, &["A"], &lookup);
    assert!(plan.is_empty());
    assert!(plan.stops.is_empty());
    // entrance -> A and entrance -> checkout both fail.
    assert_eq!(plan.unreachable_legs(), 2);
}

#[test]
fn blocked_checkout_ends_route_at_last_stop() {
    let store = layout(".....\n.....\n....#", (0, 0), (4, 2));
    let lookup = stops(&[("A", 2, 1)]);
    let plan = plan(&store, &["A"], &lookup);
    assert_eq!(plan.path.last(), Some(&at(2, 1)));
    assert_eq!(stop_ids(&plan), vec!["entrance", "A"]);
    assert_eq!(
        plan.warnings,
        vec![RouteWarning::UnreachableLeg {
            from: "A".into(),
            to: "checkout".into(),
        }]
    );
}

#[test]
fn stop_off_the_grid_is_unreachable_not_fatal() {
    let store = open_layout(5, 5, (0, 0), (4, 4));
    let mut lookup = stops(&[("A", 2, 2)]);
    lookup.insert("FAR".into(), Location::new(10_000.0, -50.0));
    let plan = plan(&store, &["A", "FAR"], &lookup);
    assert!(!plan.is_empty());
    assert_eq!(stop_ids(&plan), vec!["entrance", "A", "checkout"]);
    assert_eq!(plan.unreachable_legs(), 1);
}
