use serde::Serialize;
use std::fmt;

/// Stable row key the sheet scripts bind to through `data-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn skill(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn subskill(parent: &str, child: &str) -> Self {
        Self(normalize(&format!("{parent}_{child}")))
    }

    /// `index` is 1-based.
    pub fn instance(index: usize, name: &str) -> Self {
        Self(format!("{index}_{}", normalize(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(label: &str) -> String {
    label.replace(' ', "_").to_lowercase()
}

/// Key into the default characteristic map. Spaces are kept.
pub fn lookup_key(label: &str) -> String {
    label.to_lowercase()
}

pub fn subskill_lookup_key(parent: &str, child: &str) -> String {
    lookup_key(&format!("{parent} {child}"))
}
