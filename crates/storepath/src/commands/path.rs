use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use storepath::Location;
use storepath::config::{Config, OutputFormat};
use storepath::routing::search::{find_path, path_length};
use storepath::routing::serialize::{path_to_string, path_to_svg};

/// Run the path command.
pub fn run(
    from: (f64, f64),
    to: (f64, f64),
    layout: Option<&Path>,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load_or_default();
    let layout = super::load_layout(layout, &config)?;
    let format = format.unwrap_or_else(|| config.format());

    let from = Location::new(from.0, from.1);
    let to = Location::new(to.0, to.1);
    let path = find_path(layout.grid(), from, to);
    if path.is_empty() {
        anyhow::bail!("No walkable path from {from} to {to} in {}", layout.name());
    }

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "{}",
                    format!(
                        "{} waypoints, {:.0} px walked",
                        path.len(),
                        path_length(&path)
                    )
                    .green()
                );
            }
            println!("{}", path_to_string(&path));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&path)?),
        OutputFormat::Svg => println!("{}", path_to_svg(&path)),
    }
    Ok(())
}
