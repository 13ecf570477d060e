use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::templates::DEFAULT_CONFIG;

fn ensure_file(path: &Path, content: &str, force: bool) -> Result<bool> {
    if !path.exists() || force {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(true)
    } else {
        Ok(false)
    }
}

pub fn run_init(config_path: &Path, force: bool) -> Result<()> {
    if ensure_file(config_path, DEFAULT_CONFIG, force)? {
        println!(
            "{} Created {}",
            style("✓").green().bold(),
            config_path.display()
        );
    } else {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("!").yellow(),
            config_path.display()
        );
    }
    Ok(())
}
