use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "storepath";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Store layout used when `--layout` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,

    /// Product catalog used when `--catalog` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// How routes and paths are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// SVG path data (`M x y L x y ...`)
    Svg,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `storepath config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# storepath configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.layout" => {
                let path = PathBuf::from(value);
                if !path.is_file() {
                    anyhow::bail!("Layout file not found: {value}");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .layout = Some(path);
            }
            "defaults.catalog" => {
                let path = PathBuf::from(value);
                if !path.is_file() {
                    anyhow::bail!("Catalog file not found: {value}");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .catalog = Some(path);
            }
            "defaults.format" => {
                let Some(format) = OutputFormat::from_name(value) else {
                    anyhow::bail!("Invalid format: {value}. Must be 'text', 'json', or 'svg'.");
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .format = Some(format);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.layout, defaults.catalog, defaults.format"
            ),
        }
        Ok(())
    }

    pub fn layout(&self) -> Option<&Path> {
        self.defaults.as_ref()?.layout.as_deref()
    }

    pub fn catalog(&self) -> Option<&Path> {
        self.defaults.as_ref()?.catalog.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.defaults
            .as_ref()
            .and_then(|d| d.format)
            .unwrap_or_default()
    }
}
