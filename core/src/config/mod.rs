use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, load_catalog};
use crate::generator::TableGenerator;
use crate::render::Layout;

pub const CONFIG_FILE: &str = "sheetgen.toml";
pub const DEFAULT_OUTPUT: &str = "./_python/skills.html";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: PathBuf,
    pub catalog: Option<PathBuf>,
    pub layout: Layout,
    pub standalone: bool,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
            catalog: None,
            layout: Layout::default(),
            standalone: false,
            title: "Skills".to_string(),
        }
    }
}

impl Config {
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if config_exists(path) {
            load_config(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::default()),
        }
    }

    pub fn generator(&self) -> Result<TableGenerator> {
        let mut generator = TableGenerator::new(self.load_catalog()?).with_layout(self.layout);
        if self.standalone {
            generator = generator.with_standalone(self.title.clone());
        }
        Ok(generator)
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "Config file {} not found. Run 'sheetgen init' to create one.",
                path.display()
            )
        } else {
            anyhow::anyhow!("Failed to read config from {}: {}", path.display(), e)
        }
    })?;

    let mut config = parse_config(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    // relative catalog paths are resolved against the config file
    if let Some(catalog) = &config.catalog
        && catalog.is_relative()
        && let Some(dir) = path.parent()
    {
        config.catalog = Some(dir.join(catalog));
    }

    Ok(config)
}

pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
