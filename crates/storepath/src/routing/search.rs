use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use super::grid::GridMap;
use super::types::{Cell, Location};

/// Frontier entry. BinaryHeap is a max-heap, so the ordering is reversed:
/// lowest f-score first, then earliest insertion.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f_score: f64,
    g_score: u32,
    /// Insertion counter for deterministic tie-breaking.
    seq: u64,
    cell: Cell,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heuristic: Euclidean distance between cell coordinates. Never overestimates the
/// number of unit axis-aligned steps, so the first time the goal is popped its path is
/// a shortest one.
fn heuristic(from: Cell, to: Cell) -> f64 {
    from.euclidean_to(to)
}

/// Shortest walkable path between two pixel locations.
///
/// Both points are snapped to their grid cells. The result runs from the start cell
/// to the end cell, one waypoint per cell, each waypoint being [`GridMap::cell_center`].
/// An empty vector means there is no path: either endpoint blocked or off the grid,
/// or the two cells are not connected.
pub fn find_path(grid: &GridMap, start: Location, end: Location) -> Vec<Location> {
    let start_cell = grid.cell_of(start);
    let end_cell = grid.cell_of(end);

    find_cell_path(grid, start_cell, end_cell)
        .map(|cells| cells.into_iter().map(|c| grid.cell_center(c)).collect())
        .unwrap_or_default()
}

/// A* over cells. Returns the cell sequence from `start` to `goal` inclusive.
pub fn find_cell_path(grid: &GridMap, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    trace!("[AStar] find_path: start={start} goal={goal}");

    if !grid.is_passable(start) {
        debug!("[AStar] no path: start {start} is blocked or off the grid");
        return None;
    }
    if !grid.is_passable(goal) {
        debug!("[AStar] no path: goal {goal} is blocked or off the grid");
        return None;
    }

    let mut open = BinaryHeap::new();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut g_scores: HashMap<Cell, u32> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut seq = 0_u64;

    g_scores.insert(start, 0);
    open.push(FrontierEntry {
        f_score: heuristic(start, goal),
        g_score: 0,
        seq,
        cell: start,
    });

    let mut expanded = 0_usize;

    while let Some(entry) = open.pop() {
        let current = entry.cell;

        if current == goal {
            trace!(
                "[AStar] reached goal after expanding {expanded} cells, {} steps",
                entry.g_score
            );
            return Some(reconstruct_path(&came_from, goal));
        }

        // A cell can sit in the frontier several times; only its best entry counts.
        if g_scores.get(&current).is_some_and(|&best| entry.g_score > best) {
            continue;
        }
        if !closed.insert(current) {
            continue;
        }
        expanded += 1;

        for neighbor in grid.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }

            let tentative = entry.g_score + 1;
            if g_scores.get(&neighbor).is_none_or(|&g| tentative < g) {
                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative);
                seq += 1;
                open.push(FrontierEntry {
                    f_score: f64::from(tentative) + heuristic(neighbor, goal),
                    g_score: tentative,
                    seq,
                    cell: neighbor,
                });
            }
        }
    }

    debug!("[AStar] no path from {start} to {goal} after expanding {expanded} cells");
    None
}

/// Walk predecessor links back from `goal` and return the path in start-to-goal order.
fn reconstruct_path(came_from: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Walking length of a path in pixels.
pub fn path_length(path: &[Location]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}
