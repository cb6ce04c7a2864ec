use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use storepath::config::OutputFormat;

#[derive(Parser)]
#[command(name = "storepath")]
#[command(author, version, about)]
#[command(long_about = "Plan walking routes through a store floor plan.\n\n\
    Routes start at the entrance, visit every requested product in nearest-first\n\
    order by real walking distance, and end at the checkout.\n\n\
    Examples:\n  \
    storepath plan MILK-001 EGGS-003        Plan a route on the bundled store\n  \
    storepath plan TV-008 --format svg      Print the route as SVG path data\n  \
    storepath path 20,540 1160,540          Shortest path between two points\n  \
    storepath check my-store.yaml           Validate a layout file\n  \
    storepath catalog                       List products and their reachability")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan a route through the store for a list of products
    Plan {
        /// Product SKUs to pick up, in any order
        #[arg(required = true)]
        skus: Vec<String>,

        #[command(flatten)]
        sources: Sources,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Find the shortest walkable path between two points
    Path {
        /// Start point in pixels, as X,Y
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),

        /// End point in pixels, as X,Y
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),

        /// Store layout file (defaults to the configured or bundled layout)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate a store layout and print its summary
    Check {
        /// Layout file to check (defaults to the configured or bundled layout)
        layout: Option<PathBuf>,
    },

    /// List catalog products and whether each can be reached
    Catalog {
        #[command(flatten)]
        sources: Sources,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

/// Where the layout and catalog come from.
#[derive(clap::Args, Debug, Default)]
pub struct Sources {
    /// Store layout file (defaults to the configured or bundled layout)
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Product catalog file (defaults to the configured or bundled catalog)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.layout, defaults.catalog, defaults.format)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Parse `X,Y` into a pixel coordinate pair.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid X coordinate '{x}'"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid Y coordinate '{y}'"))?;
    Ok((x, y))
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Plan {
                skus,
                sources,
                format,
            }) => crate::commands::plan::run(&skus, &sources, format, self.quiet),
            Some(Commands::Path {
                from,
                to,
                layout,
                format,
            }) => crate::commands::path::run(from, to, layout.as_deref(), format, self.quiet),
            Some(Commands::Check { layout }) => crate::commands::check::run(layout.as_deref()),
            Some(Commands::Catalog { sources }) => crate::commands::catalog::run(&sources, self.quiet),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("storepath {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
