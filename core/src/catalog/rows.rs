use super::ident::{RowId, lookup_key, subskill_lookup_key};
use super::{Catalog, SkillDescriptor};

/// One `<tr>` of a generated table, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// Label-only row above a skill family or a named skill's instances.
    Header { label: &'a str },
    Skill {
        id: RowId,
        label: &'a str,
        subskill: bool,
        default: Option<&'a str>,
    },
    /// Blank instance of a named skill; the player types the specialization.
    Instance {
        id: RowId,
        default: Option<&'a str>,
    },
}

impl<'a> Row<'a> {
    pub fn id(&self) -> Option<&RowId> {
        match self {
            Row::Header { .. } => None,
            Row::Skill { id, .. } | Row::Instance { id, .. } => Some(id),
        }
    }

    pub fn default(&self) -> Option<&'a str> {
        match self {
            Row::Header { .. } => None,
            Row::Skill { default, .. } | Row::Instance { default, .. } => *default,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Row::Header { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedSkill<'a> {
    pub name: &'a str,
    pub count: usize,
}

impl Catalog {
    pub fn default_for(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    pub fn repeat_count(&self, name: &str) -> usize {
        self.named_counts
            .get(name)
            .copied()
            .unwrap_or(self.default_repeat)
    }

    pub fn named(&self) -> impl Iterator<Item = NamedSkill<'_>> {
        self.named_skills.iter().map(|name| NamedSkill {
            name,
            count: self.repeat_count(name),
        })
    }

    pub fn core_rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();

        for skill in &self.skills {
            match skill {
                SkillDescriptor::Plain(name) => rows.push(Row::Skill {
                    id: RowId::skill(name),
                    label: name,
                    subskill: false,
                    default: self.default_for(&lookup_key(name)),
                }),
                SkillDescriptor::Family { name, subskills } => {
                    rows.push(Row::Header { label: name });
                    for sub in subskills {
                        rows.push(Row::Skill {
                            id: RowId::subskill(name, sub),
                            label: sub,
                            subskill: true,
                            default: self.default_for(&subskill_lookup_key(name, sub)),
                        });
                    }
                }
            }
        }

        rows
    }

    pub fn named_rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::new();

        for named in self.named() {
            let default = self.default_for(&lookup_key(named.name));
            rows.push(Row::Header { label: named.name });
            rows.extend((1..=named.count).map(|i| Row::Instance {
                id: RowId::instance(i, named.name),
                default,
            }));
        }

        rows
    }
}
