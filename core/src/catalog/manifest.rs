use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use super::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unsupported catalog file {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ),
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let catalog = parse_catalog(&content, format)
        .with_context(|| format!("Failed to parse catalog from {}", path.display()))?;

    tracing::debug!(
        skills = catalog.skills.len(),
        named = catalog.named_skills.len(),
        path = %path.display(),
        "Catalog loaded"
    );

    Ok(catalog)
}

pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog: Catalog = match format {
        CatalogFormat::Toml => toml::from_str(content)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    Ok(catalog)
}

pub fn export_catalog(catalog: &Catalog, format: CatalogFormat) -> Result<String> {
    let content = match format {
        CatalogFormat::Toml => toml::to_string_pretty(catalog)
            .with_context(|| "Failed to serialize catalog to TOML")?,
        CatalogFormat::Yaml => serde_yaml::to_string(catalog)
            .with_context(|| "Failed to serialize catalog to YAML")?,
        CatalogFormat::Json => serde_json::to_string_pretty(catalog)
            .with_context(|| "Failed to serialize catalog to JSON")?,
    };
    Ok(content)
}
