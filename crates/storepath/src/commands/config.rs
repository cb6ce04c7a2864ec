use anyhow::Result;
use colored::Colorize;

use storepath::config::Config;

use crate::cli::ConfigCommands;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let bundled = || "(bundled)".to_string();
    println!(
        "  defaults.layout:  {}",
        config
            .layout()
            .map_or_else(bundled, |p| p.display().to_string())
    );
    println!(
        "  defaults.catalog: {}",
        config
            .catalog()
            .map_or_else(bundled, |p| p.display().to_string())
    );
    println!("  defaults.format:  {}", config.format());
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
