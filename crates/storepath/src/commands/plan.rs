use anyhow::Result;
use colored::Colorize;

use storepath::config::{Config, OutputFormat};
use storepath::routing::search::path_length;
use storepath::routing::serialize::{path_to_string, path_to_svg};
use storepath::{Catalog, RoutePlan, plan};

use crate::cli::Sources;

/// Run the plan command.
pub fn run(
    skus: &[String],
    sources: &Sources,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load_or_default();
    let layout = super::load_layout(sources.layout.as_deref(), &config)?;
    let catalog = super::load_catalog(sources.catalog.as_deref(), &config)?;
    let format = format.unwrap_or_else(|| config.format());

    let route = plan(&layout, skus, &catalog);

    match format {
        OutputFormat::Text => print_text(&route, &catalog, layout.name(), quiet),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
        OutputFormat::Svg => println!("{}", path_to_svg(&route.path)),
    }

    if !quiet && format != OutputFormat::Text {
        for warning in &route.warnings {
            eprintln!("{} {warning}", "warning:".yellow().bold());
        }
    }

    if route.is_empty() {
        anyhow::bail!("No walkable route for the requested products");
    }
    Ok(())
}

fn print_text(route: &RoutePlan, catalog: &Catalog, store: &str, quiet: bool) {
    if !route.is_empty() {
        if !quiet {
            println!(
                "{}",
                format!("Route through {store} ({} stops)", route.stops.len()).bold()
            );
            for (i, stop) in route.stops.iter().enumerate() {
                let name = catalog.display_name(&stop.id);
                let label = if name == stop.id {
                    name.to_string()
                } else {
                    format!("{name} [{}]", stop.id)
                };
                println!("  {:>2}. {label:<36} {}", i + 1, stop.location);
            }
            println!(
                "{}",
                format!(
                    "{} waypoints, {:.0} px walked",
                    route.path.len(),
                    path_length(&route.path)
                )
                .green()
            );
        }
        println!("{}", path_to_string(&route.path));
    }

    if !quiet && !route.warnings.is_empty() {
        println!();
        for warning in &route.warnings {
            println!("{}", format!("warning: {warning}").yellow());
        }
    }
}
