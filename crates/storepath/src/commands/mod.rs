pub mod catalog;
pub mod check;
pub mod completion;
pub mod config;
pub mod path;
pub mod plan;

use anyhow::{Context, Result};
use std::path::Path;

use storepath::config::Config;
use storepath::{Catalog, StoreLayout};

/// Layout from the command line, else from config, else the bundled store.
pub fn load_layout(flag: Option<&Path>, config: &Config) -> Result<StoreLayout> {
    match flag.or(config.layout()) {
        Some(path) => StoreLayout::load_from(path)
            .with_context(|| format!("Failed to load layout {}", path.display())),
        None => StoreLayout::bundled().context("Bundled layout is invalid"),
    }
}

/// Catalog from the command line, else from config, else the bundled demo catalog.
pub fn load_catalog(flag: Option<&Path>, config: &Config) -> Result<Catalog> {
    match flag.or(config.catalog()) {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::bundled().context("Bundled catalog is invalid"),
    }
}
