use std::path::Path;

use serde::{Deserialize, Serialize};

use super::grid::GridMap;
use super::search::find_path;
use super::types::{CHECKOUT_ID, ENTRANCE_ID, Location, Stop};
use crate::error::LayoutError;

/// The supercenter floor plan: 1200x800 px at 20 px per cell.
const BUNDLED_LAYOUT: &str = include_str!("../../assets/store.yaml");

/// On-disk form of a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    scale: u32,
    width: usize,
    height: usize,
    entrance: Location,
    checkout: Location,
    rows: Vec<String>,
}

/// Everything about a store that stays fixed for the life of the process:
/// the walkable grid and the two points every route starts and ends at.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreLayout {
    name: String,
    grid: GridMap,
    entrance: Location,
    checkout: Location,
}

impl StoreLayout {
    pub fn new(
        name: impl Into<String>,
        grid: GridMap,
        entrance: Location,
        checkout: Location,
    ) -> Result<Self, LayoutError> {
        if !entrance.is_finite() {
            return Err(LayoutError::NonFiniteLocation { which: ENTRANCE_ID });
        }
        if !checkout.is_finite() {
            return Err(LayoutError::NonFiniteLocation { which: CHECKOUT_ID });
        }
        Ok(Self {
            name: name.into(),
            grid,
            entrance,
            checkout,
        })
    }

    /// The layout shipped with the crate.
    pub fn bundled() -> Result<Self, LayoutError> {
        Self::from_yaml(BUNDLED_LAYOUT)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, LayoutError> {
        let file: LayoutFile = serde_yaml::from_str(contents)?;
        let grid = GridMap::from_rows(file.width, file.height, file.scale, &file.rows)?;
        Self::new(
            file.name.unwrap_or_else(|| "unnamed".to_string()),
            grid,
            file.entrance,
            file.checkout,
        )
    }

    pub fn load_from(path: &Path) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn to_yaml(&self) -> Result<String, LayoutError> {
        let file = LayoutFile {
            name: Some(self.name.clone()),
            scale: self.grid.scale(),
            width: self.grid.width(),
            height: self.grid.height(),
            entrance: self.entrance,
            checkout: self.checkout,
            rows: self.grid.to_rows(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn entrance(&self) -> Location {
        self.entrance
    }

    pub fn checkout(&self) -> Location {
        self.checkout
    }

    pub fn entrance_stop(&self) -> Stop {
        Stop::new(ENTRANCE_ID, self.entrance)
    }

    pub fn checkout_stop(&self) -> Stop {
        Stop::new(CHECKOUT_ID, self.checkout)
    }

    /// Whether `loc` can be walked to from the entrance.
    pub fn is_reachable(&self, loc: Location) -> bool {
        !find_path(&self.grid, self.entrance, loc).is_empty()
    }

    /// Health report used by `storepath check`.
    pub fn summary(&self) -> LayoutSummary {
        let entrance_open = self.grid.is_passable(self.grid.cell_of(self.entrance));
        let checkout_open = self.grid.is_passable(self.grid.cell_of(self.checkout));
        LayoutSummary {
            name: self.name.clone(),
            width: self.grid.width(),
            height: self.grid.height(),
            scale: self.grid.scale(),
            open_cells: self.grid.open_count(),
            blocked_cells: self.grid.blocked_count(),
            entrance_open,
            checkout_open,
            connected: self.is_reachable(self.checkout),
        }
    }
}

/// Facts about a layout worth showing before routing over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub open_cells: usize,
    pub blocked_cells: usize,
    pub entrance_open: bool,
    pub checkout_open: bool,
    /// A path exists from the entrance to the checkout.
    pub connected: bool,
}

impl LayoutSummary {
    /// Problems that make every route through this layout come back empty.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.entrance_open {
            problems.push("entrance is on a blocked cell or off the grid".to_string());
        }
        if !self.checkout_open {
            problems.push("checkout is on a blocked cell or off the grid".to_string());
        }
        if self.entrance_open && self.checkout_open && !self.connected {
            problems.push("checkout cannot be reached from the entrance".to_string());
        }
        problems
    }

    pub fn is_usable(&self) -> bool {
        self.problems().is_empty()
    }
}
