use super::{Catalog, SkillDescriptor};
use std::collections::BTreeMap;

pub const DEFAULT_REPEAT: usize = 4;

pub const TIER_OFFSETS: &[u32] = &[0, 10, 20, 30];

pub const CHARACTERISTICS: &[&str] = &["WS", "BS", "S", "T", "A", "P", "I", "W", "F", "Inf", "Cor"];

const PLAIN_BEFORE_FAMILIES: &[&str] = &[
    "Acrobatics",
    "Athletics",
    "Awareness",
    "Charm",
    "Command",
    "Commerce",
    "Deceive",
    "Dodge",
    "Inquiry",
    "Interrogation",
    "Intimidate",
    "Logic",
    "Medicae",
];

const FAMILIES: &[(&str, &[&str])] = &[
    ("Navigate", &["Surface", "Stellar", "Warp"]),
    ("Operate", &["Surface", "Aeronautica", "Void"]),
];

const PLAIN_AFTER_FAMILIES: &[&str] = &[
    "Parry",
    "Psyniscience",
    "Scrutiny",
    "Security",
    "Sleight of Hand",
    "Stealth",
    "Survival",
    "Tech-Use",
];

const NAMED_SKILLS: &[(&str, usize)] = &[
    ("Linguistics", 5),
    ("Trade", 5),
    ("Common Lore", 5),
    ("Scholastic Lore", 5),
    ("Forbidden Lore", 5),
];

const DEFAULTS: &[(&str, &str)] = &[
    ("acrobatics", "A"),
    ("athletics", "S"),
    ("awareness", "P"),
    ("charm", "F"),
    ("command", "F"),
    ("commerce", "I"),
    ("deceive", "I"),
    ("dodge", "A"),
    ("inquiry", "F"),
    ("interrogation", "W"),
    ("intimidate", "W"),
    ("logic", "I"),
    ("medicae", "I"),
    ("navigate surface", "I"),
    ("navigate stellar", "I"),
    ("navigate warp", "I"),
    ("operate surface", "A"),
    ("operate aeronautica", "A"),
    ("operate void", "I"),
    ("parry", "WS"),
    ("psyniscience", "P"),
    ("scrutiny", "P"),
    ("security", "I"),
    ("sleight of hand", "A"),
    ("stealth", "A"),
    ("survival", "P"),
    ("tech-use", "I"),
    ("linguistics", "I"),
    ("trade", "I"),
    ("common lore", "I"),
    ("scholastic lore", "I"),
    ("forbidden lore", "I"),
];

/// The skill list of the character sheet shipped with the site.
pub fn catalog() -> Catalog {
    let mut skills: Vec<SkillDescriptor> = PLAIN_BEFORE_FAMILIES
        .iter()
        .map(|name| SkillDescriptor::plain(*name))
        .collect();
    skills.extend(
        FAMILIES
            .iter()
            .map(|(name, subskills)| SkillDescriptor::family(*name, subskills.iter().copied())),
    );
    skills.extend(
        PLAIN_AFTER_FAMILIES
            .iter()
            .map(|name| SkillDescriptor::plain(*name)),
    );

    Catalog {
        default_repeat: DEFAULT_REPEAT,
        offsets: TIER_OFFSETS.to_vec(),
        characteristics: CHARACTERISTICS.iter().map(|c| c.to_string()).collect(),
        skills,
        named_skills: NAMED_SKILLS.iter().map(|(n, _)| n.to_string()).collect(),
        named_counts: NAMED_SKILLS
            .iter()
            .map(|(n, count)| (n.to_string(), *count))
            .collect(),
        defaults: DEFAULTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}
