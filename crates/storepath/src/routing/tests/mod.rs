mod invalid;

use std::collections::{HashMap, HashSet, VecDeque};

use super::grid::GridMap;
use super::layout::StoreLayout;
use super::types::{Cell, Location, RoutePlan};

/// Pixels per cell in every test layout.
const SCALE: u32 = 10;

/// Pixel location of the top-left corner of a cell.
fn at(col: i64, row: i64) -> Location {
    let scale = f64::from(SCALE);
    Location::new(col as f64 * scale, row as f64 * scale)
}

/// Helper to parse an ASCII grid at [`SCALE`].
fn grid(ascii: &str) -> GridMap {
    GridMap::parse(ascii, SCALE).unwrap()
}

/// Helper to create a layout from ASCII art with entrance and checkout given as cells.
fn layout(ascii: &str, entrance: (i64, i64), checkout: (i64, i64)) -> StoreLayout {
    StoreLayout::new(
        "test",
        grid(ascii),
        at(entrance.0, entrance.1),
        at(checkout.0, checkout.1),
    )
    .unwrap()
}

/// Helper to create a layout with no obstacles.
fn open_layout(
    width: usize,
    height: usize,
    entrance: (i64, i64),
    checkout: (i64, i64),
) -> StoreLayout {
    StoreLayout::new(
        "open",
        GridMap::open(width, height, SCALE).unwrap(),
        at(entrance.0, entrance.1),
        at(checkout.0, checkout.1),
    )
    .unwrap()
}

/// Helper to build a stop lookup from `(id, col, row)` triples.
fn stops(entries: &[(&str, i64, i64)]) -> HashMap<String, Location> {
    entries
        .iter()
        .map(|&(id, col, row)| (id.to_string(), at(col, row)))
        .collect()
}

/// Waypoints mapped back to cells.
fn cells_of(grid: &GridMap, path: &[Location]) -> Vec<Cell> {
    path.iter().map(|&loc| grid.cell_of(loc)).collect()
}

/// Ids of the stops a plan actually walks, in order.
fn stop_ids(plan: &RoutePlan) -> Vec<&str> {
    plan.stops.iter().map(|s| s.id.as_str()).collect()
}

/// Assert every waypoint is open and every consecutive pair is one axis step apart.
fn assert_walkable(grid: &GridMap, path: &[Location]) {
    let cells = cells_of(grid, path);
    for (i, cell) in cells.iter().enumerate() {
        assert!(grid.is_passable(*cell), "waypoint {i} at {cell} is blocked");
    }
    for (i, pair) in cells.windows(2).enumerate() {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "waypoints {i} and {} are not adjacent: {} -> {}",
            i + 1,
            pair[0],
            pair[1]
        );
    }
}

/// Assert `path` runs from the cell of `from` to the cell of `to`.
fn assert_endpoints(grid: &GridMap, path: &[Location], from: Location, to: Location) {
    let first = path.first().expect("path is empty");
    let last = path.last().expect("path is empty");
    assert_eq!(grid.cell_of(*first), grid.cell_of(from));
    assert_eq!(grid.cell_of(*last), grid.cell_of(to));
}

/// Breadth-first step count between two cells, used as ground truth for A*.
fn bfs_steps(grid: &GridMap, from: Cell, to: Cell) -> Option<usize> {
    if !grid.is_passable(from) || !grid.is_passable(to) {
        return None;
    }
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([(from, 0)]);
    while let Some((cell, steps)) = queue.pop_front() {
        if cell == to {
            return Some(steps);
        }
        for next in grid.neighbors(cell) {
            if seen.insert(next) {
                queue.push_back((next, steps + 1));
            }
        }
    }
    None
}
