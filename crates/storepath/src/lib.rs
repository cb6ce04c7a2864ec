//! Walking routes through a store floor plan.
//!
//! A [`StoreLayout`] holds the occupancy grid plus the entrance and checkout. [`plan`]
//! orders a set of stops by real walking distance and stitches the per-leg A* paths
//! into one continuous route.

pub mod catalog;
pub mod config;
pub mod error;
pub mod routing;

pub use catalog::{Catalog, Product};
pub use error::{CatalogError, LayoutError};
pub use routing::grid::GridMap;
pub use routing::layout::{LayoutSummary, StoreLayout};
pub use routing::types::{Cell, Location, RoutePlan, RouteWarning, Stop};
pub use routing::{StopLookup, plan, plan_route};
