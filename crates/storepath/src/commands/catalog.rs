use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use storepath::config::Config;

use crate::cli::Sources;

/// Run the catalog command.
pub fn run(sources: &Sources, quiet: bool) -> Result<()> {
    let config = Config::load_or_default();
    let layout = super::load_layout(sources.layout.as_deref(), &config)?;
    let catalog = super::load_catalog(sources.catalog.as_deref(), &config)?;

    if catalog.is_empty() {
        println!("{}", "The catalog has no products.".yellow());
        return Ok(());
    }

    let reachable: Vec<bool> = catalog
        .products()
        .par_iter()
        .map(|p| layout.is_reachable(p.location))
        .collect();

    for (product, ok) in catalog.products().iter().zip(&reachable) {
        let status = if *ok {
            "reachable".green()
        } else {
            "unreachable".red()
        };
        println!(
            "  {:<12} {:<24} {:<12} {:<12} {status}",
            product.sku,
            product.name,
            product.category.as_deref().unwrap_or("-"),
            product.location.to_string(),
        );
    }

    if !quiet {
        let missing = reachable.iter().filter(|ok| !**ok).count();
        println!();
        println!(
            "{} products in {}, {missing} unreachable",
            catalog.len(),
            layout.name()
        );
    }
    Ok(())
}
