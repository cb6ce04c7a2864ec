use super::types::{Cell, Direction, Location};
use crate::error::LayoutError;

/// Largest grid [`GridMap::open`] will allocate without row data to back it.
pub const MAX_OPEN_CELLS: usize = 1 << 26;

/// Static occupancy grid of a store floor.
///
/// Cells are `scale` pixels square. Every in-bounds cell is either open or blocked;
/// anything outside `[0, width) x [0, height)` counts as blocked. The grid is never
/// mutated after construction, so one instance can be shared by any number of searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    scale: u32,
    /// Row-major, `true` = blocked.
    blocked: Vec<bool>,
}

impl GridMap {
    /// Build a grid from a numeric matrix (0 = open, anything else = blocked).
    ///
    /// `rows` must contain exactly `height` rows of exactly `width` values.
    pub fn new(
        width: usize,
        height: usize,
        scale: u32,
        rows: &[Vec<u8>],
    ) -> Result<Self, LayoutError> {
        check_dimensions(width, height, scale)?;
        if rows.len() != height {
            return Err(LayoutError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut blocked = Vec::new();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(LayoutError::RowLength {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            blocked.extend(values.iter().map(|&v| v != 0));
        }

        Ok(Self {
            width,
            height,
            scale,
            blocked,
        })
    }

    /// Build a grid from textual rows with declared dimensions.
    ///
    /// Open cells are `0` or `.`; blocked cells are `1`-`9` or `#`.
    pub fn from_rows<S: AsRef<str>>(
        width: usize,
        height: usize,
        scale: u32,
        rows: &[S],
    ) -> Result<Self, LayoutError> {
        check_dimensions(width, height, scale)?;
        if rows.len() != height {
            return Err(LayoutError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut blocked = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref().trim();
            let found = text.chars().count();
            if found != width {
                return Err(LayoutError::RowLength {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in text.chars().enumerate() {
                blocked.push(parse_cell(ch).ok_or(LayoutError::InvalidCell { row, col, ch })?);
            }
        }

        Ok(Self {
            width,
            height,
            scale,
            blocked,
        })
    }

    /// Parse ASCII art, one line per row. Blank lines are ignored and the width is
    /// taken from the first row.
    ///
    /// ```
    /// use storepath::routing::grid::GridMap;
    ///
    /// let grid = GridMap::parse("..#\n...", 10).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// ```
    pub fn parse(text: &str, scale: u32) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        Self::from_rows(width, rows.len(), scale, &rows)
    }

    /// A grid with every cell open.
    pub fn open(width: usize, height: usize, scale: u32) -> Result<Self, LayoutError> {
        check_dimensions(width, height, scale)?;
        let cells = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_OPEN_CELLS)
            .ok_or(LayoutError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            scale,
            blocked: vec![false; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels per cell.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Map a pixel location to the cell that contains it. No bounds check.
    pub fn cell_of(&self, loc: Location) -> Cell {
        Cell::new(self.axis_to_cell(loc.x), self.axis_to_cell(loc.y))
    }

    /// Top-left pixel of a cell. Lossy: every point of the cell maps back to this one.
    pub fn cell_center(&self, cell: Cell) -> Location {
        let scale = f64::from(self.scale);
        Location::new(cell.col as f64 * scale, cell.row as f64 * scale)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Whether the cell is inside the grid and open.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| !self.blocked[i])
    }

    /// Passable 4-neighbours of `cell`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| cell.step(dir))
            .filter(|n| self.is_passable(*n))
    }

    /// Every in-bounds cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i64)
            .flat_map(move |row| (0..self.width as i64).map(move |col| Cell::new(col, row)))
    }

    pub fn open_count(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len() - self.open_count()
    }

    /// Rows rendered back to text (`0` open, `1` blocked).
    pub fn to_rows(&self) -> Vec<String> {
        self.blocked
            .chunks(self.width)
            .map(|row| row.iter().map(|&b| if b { '1' } else { '0' }).collect())
            .collect()
    }

    fn axis_to_cell(&self, v: f64) -> i64 {
        if !v.is_finite() {
            return i64::MIN;
        }
        (v / f64::from(self.scale)).floor() as i64
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let col = usize::try_from(cell.col).ok()?;
        let row = usize::try_from(cell.row).ok()?;
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }
}

fn check_dimensions(width: usize, height: usize, scale: u32) -> Result<(), LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError::ZeroDimension { width, height });
    }
    if scale == 0 {
        return Err(LayoutError::ZeroScale);
    }
    Ok(())
}

/// `Some(true)` for blocked, `Some(false)` for open.
fn parse_cell(ch: char) -> Option<bool> {
    match ch {
        '0' | '.' => Some(false),
        '1'..='9' | '#' => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn grid() -> GridMap {
        GridMap::parse(
            "
            ....
            .##.
            ....
            ",
            20,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_dimensions() {
        let g = grid();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.scale(), 20);
        assert_eq!(g.blocked_count(), 2);
        assert_eq!(g.open_count(), 10);
    }

    #[test]
    fn test_cell_of_floors() {
        let g = grid();
        assert_eq!(g.cell_of(Location::new(0.0, 0.0)), Cell::new(0, 0));
        assert_eq!(g.cell_of(Location::new(19.9, 39.0)), Cell::new(0, 1));
        assert_eq!(g.cell_of(Location::new(40.0, 20.0)), Cell::new(2, 1));
        assert_eq!(g.cell_of(Location::new(-1.0, 5.0)), Cell::new(-1, 0));
    }

    #[test]
    fn test_cell_of_non_finite_is_out_of_bounds() {
        let g = grid();
        let cell = g.cell_of(Location::new(f64::NAN, 10.0));
        assert!(!g.contains(cell));
        assert!(!g.is_passable(cell));
        assert_eq!(g.neighbors(cell).count(), 0);
    }

    #[test]
    fn test_cell_center() {
        let g = grid();
        assert_eq!(g.cell_center(Cell::new(3, 2)), Location::new(60.0, 40.0));
        let loc = Location::new(47.0, 33.0);
        assert_eq!(g.cell_center(g.cell_of(loc)), Location::new(40.0, 20.0));
    }

    #[test]
    fn test_is_passable() {
        let g = grid();
        assert!(g.is_passable(Cell::new(0, 0)));
        assert!(!g.is_passable(Cell::new(1, 1)));
        assert!(!g.is_passable(Cell::new(-1, 0)));
        assert!(!g.is_passable(Cell::new(4, 0)));
        assert!(!g.is_passable(Cell::new(0, 3)));
    }

    #[test]
    fn test_neighbors_order_down_up_right_left() {
        let g = GridMap::open(3, 3, 1).unwrap();
        let n: Vec<Cell> = g.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                Cell::new(1, 2),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_neighbors_filter_walls_and_edges() {
        let g = grid();
        let n: Vec<Cell> = g.neighbors(Cell::new(1, 0)).collect();
        // Down is a wall, up is off the grid.
        assert_eq!(n, vec![Cell::new(2, 0), Cell::new(0, 0)]);
    }

    #[test]
    fn test_numeric_matrix() {
        let g = GridMap::new(3, 2, 5, &[vec![0, 1, 0], vec![0, 0, 7]]).unwrap();
        assert!(!g.is_passable(Cell::new(1, 0)));
        assert!(!g.is_passable(Cell::new(2, 1)));
        assert_eq!(g.to_rows(), vec!["010", "001"]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = GridMap::new(3, 2, 5, &[vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
        assert!(GridMap::parse("...\n..", 1).is_err());
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let err = GridMap::from_rows(2, 3, 1, &["..", ".."]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::RowCount {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GridMap::parse("", 10),
            Err(LayoutError::ZeroDimension { .. })
        ));
        assert!(matches!(
            GridMap::open(0, 4, 10),
            Err(LayoutError::ZeroDimension { .. })
        ));
        assert!(matches!(GridMap::open(4, 4, 0), Err(LayoutError::ZeroScale)));
    }

    #[test]
    fn test_open_rejects_oversized_grid() {
        assert!(matches!(
            GridMap::open(usize::MAX, 2, 10),
            Err(LayoutError::TooLarge { .. })
        ));
        assert!(matches!(
            GridMap::open(MAX_OPEN_CELLS + 1, 1, 10),
            Err(LayoutError::TooLarge { .. })
        ));
        assert!(GridMap::open(MAX_OPEN_CELLS, 1, 10).is_ok());
    }

    #[test]
    fn test_huge_declared_width_fails_on_row_length() {
        let err = GridMap::new(usize::MAX, 1, 10, &[vec![0, 0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::RowLength {
                row: 0,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_cell_character() {
        let err = GridMap::parse("..x", 1).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidCell {
                row: 0,
                col: 2,
                ch: 'x'
            }
        ));
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let g = GridMap::open(2, 2, 1).unwrap();
        let cells: Vec<Cell> = g.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1)
            ]
        );
    }
}
