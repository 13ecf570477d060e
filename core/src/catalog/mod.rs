pub mod builtin;
pub mod ident;
pub mod manifest;
pub mod rows;

pub use ident::RowId;
pub use manifest::{CatalogFormat, export_catalog, load_catalog, parse_catalog};
pub use rows::{NamedSkill, Row};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Upper bound for any repeat count a catalog may request.
pub const MAX_REPEAT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillDescriptor {
    Plain(String),
    Family { name: String, subskills: Vec<String> },
}

impl SkillDescriptor {
    pub fn plain(name: impl Into<String>) -> Self {
        Self::Plain(name.into())
    }

    pub fn family<I, S>(name: impl Into<String>, subskills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Family {
            name: name.into(),
            subskills: subskills.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Family { name, .. } => name,
        }
    }
}

/// Everything the generator renders. Fields left out of a catalog file
/// keep the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub default_repeat: usize,
    pub offsets: Vec<u32>,
    pub characteristics: Vec<String>,
    pub skills: Vec<SkillDescriptor>,
    pub named_skills: Vec<String>,
    pub named_counts: BTreeMap<String, usize>,
    pub defaults: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        builtin::catalog()
    }
}

impl Catalog {
    /// Rejects catalogs that would produce a broken document and returns
    /// human-readable warnings for the suspicious-but-renderable ones.
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.default_repeat > MAX_REPEAT {
            anyhow::bail!(
                "Default repeat count {} exceeds the limit of {}",
                self.default_repeat,
                MAX_REPEAT
            );
        }
        for (name, count) in &self.named_counts {
            if *count > MAX_REPEAT {
                anyhow::bail!(
                    "Repeat count {} for '{}' exceeds the limit of {}",
                    count,
                    name,
                    MAX_REPEAT
                );
            }
        }

        if self.characteristics.is_empty() {
            anyhow::bail!("Catalog has no characteristic options");
        }

        let mut seen_offsets = HashSet::new();
        for offset in &self.offsets {
            if !seen_offsets.insert(offset) {
                anyhow::bail!("Duplicate tier offset: +{}", offset);
            }
        }

        for skill in &self.skills {
            if skill.name().trim().is_empty() {
                anyhow::bail!("Skill with an empty name");
            }
            if let SkillDescriptor::Family { name, subskills } = skill {
                if subskills.is_empty() {
                    anyhow::bail!("Skill family '{}' has no sub-skills", name);
                }
                if subskills.iter().any(|s| s.trim().is_empty()) {
                    anyhow::bail!("Skill family '{}' has a sub-skill with an empty name", name);
                }
            }
        }

        if self.named_skills.iter().any(|n| n.trim().is_empty()) {
            anyhow::bail!("Named skill with an empty name");
        }

        let mut ids = HashSet::new();
        for row in self.core_rows().iter().chain(self.named_rows().iter()) {
            if let Some(id) = row.id()
                && !ids.insert(id.clone())
            {
                anyhow::bail!("Row identifier '{}' is generated more than once", id);
            }
        }

        let mut warnings = Vec::new();

        for (key, value) in &self.defaults {
            if !self.characteristics.contains(value) {
                warnings.push(format!(
                    "Default '{}' for '{}' is not a characteristic option",
                    value, key
                ));
            }
        }

        for name in self.named_counts.keys() {
            if !self.named_skills.contains(name) {
                warnings.push(format!(
                    "Repeat count set for '{}', which is not a named skill",
                    name
                ));
            }
        }

        Ok(warnings)
    }

    pub fn leaf_count(&self) -> usize {
        self.core_rows().iter().filter(|r| r.is_leaf()).count()
    }

    pub fn instance_count(&self) -> usize {
        self.named().fold(0, |acc, n| acc.saturating_add(n.count))
    }
}
