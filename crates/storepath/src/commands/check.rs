use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use storepath::config::Config;

/// Run the check command.
pub fn run(layout: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default();
    let layout = super::load_layout(layout, &config)?;
    let summary = layout.summary();

    println!("{} {}", "Layout:".bold(), summary.name);
    println!(
        "  {} x {} cells at {} px ({} x {} px)",
        summary.width,
        summary.height,
        summary.scale,
        summary.width * summary.scale as usize,
        summary.height * summary.scale as usize
    );
    println!(
        "  {} open, {} blocked",
        summary.open_cells, summary.blocked_cells
    );
    println!("  entrance {}", layout.entrance());
    println!("  checkout {}", layout.checkout());

    if summary.is_usable() {
        println!("{}", "Layout OK".green().bold());
        return Ok(());
    }

    let problems = summary.problems();
    for problem in &problems {
        println!("  {}", problem.red());
    }
    anyhow::bail!("Layout has {} problem(s)", problems.len())
}
