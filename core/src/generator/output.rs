use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Replaces whatever is at `path`, creating missing parent directories.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

pub fn compare_document(path: &Path, content: &str) -> Result<OutputStatus> {
    match std::fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => Ok(OutputStatus::UpToDate),
        Ok(_) => Ok(OutputStatus::Stale),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(OutputStatus::Missing),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
