use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Continuous point on the floor plan, in pixels.
///
/// Used for product positions, the entrance and checkout, and every waypoint of a
/// returned path. Value semantics only: two locations are the same if their coordinates are.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance in pixels.
    pub fn distance_to(self, other: Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Writes `(x,y)`. Whole numbers carry no decimals: `(20,540)`, `(12.5,-3)`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display is exact and drops a trailing `.0`.
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Discrete grid coordinate.
///
/// Cells outside the grid are representable (negative or too large) and are simply
/// impassable, so arithmetic on neighbours never needs a bounds check up front.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Step one cell in the given direction. Saturates at the ends of the coordinate range.
    pub fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::Down => Self {
                col: self.col,
                row: self.row.saturating_add(1),
            },
            Direction::Up => Self {
                col: self.col,
                row: self.row.saturating_sub(1),
            },
            Direction::Right => Self {
                col: self.col.saturating_add(1),
                row: self.row,
            },
            Direction::Left => Self {
                col: self.col.saturating_sub(1),
                row: self.row,
            },
        }
    }

    /// Euclidean distance between cell coordinates.
    pub fn euclidean_to(self, other: Cell) -> f64 {
        let dc = self.col.abs_diff(other.col) as f64;
        let dr = self.row.abs_diff(other.row) as f64;
        (dc * dc + dr * dr).sqrt()
    }

    /// Manhattan distance between cell coordinates.
    pub fn manhattan_to(self, other: Cell) -> u64 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// Whether `other` is one axis-aligned step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan_to(other) == 1
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}

/// Axis-aligned direction of travel. Diagonal moves are not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All four directions, in neighbour expansion order.
    ///
    /// The order feeds the search's tie-breaking, so changing it changes which of
    /// several equally short paths is returned.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];
}

/// A named point a route has to pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub location: Location,
}

impl Stop {
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

/// Id of the synthetic stop every route starts from.
pub const ENTRANCE_ID: &str = "entrance";

/// Id of the synthetic stop every route ends at.
pub const CHECKOUT_ID: &str = "checkout";

/// A non-fatal problem found while planning a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RouteWarning {
    /// The lookup had no location for this id; the stop was left out.
    UnknownStop { id: String },
    /// No walkable path between two consecutive stops; the leg was skipped.
    UnreachableLeg { from: String, to: String },
}

impl fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteWarning::UnknownStop { id } => write!(f, "Unknown stop '{id}'"),
            RouteWarning::UnreachableLeg { from, to } => {
                write!(f, "Could not find route from '{from}' to '{to}'")
            }
        }
    }
}

/// Outcome of planning one multi-stop route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Stops in the order they are walked, entrance first and checkout last.
    /// Stops whose leg could not be walked are not listed.
    pub stops: Vec<Stop>,
    /// Continuous waypoint sequence over all walkable legs, without duplicated joints.
    pub path: Vec<Location>,
    pub warnings: Vec<RouteWarning>,
}

impl RoutePlan {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Count of unreachable-leg warnings.
    pub fn unreachable_legs(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, RouteWarning::UnreachableLeg { .. }))
            .count()
    }
}
