//! HTML formatting for the skill tables.
//!
//! Everything here is a pure function of its inputs, so the same catalog
//! always renders to the same bytes.

pub mod cells;
pub mod table;

pub use table::{render_row, render_table};

use serde::{Deserialize, Serialize};

/// Table `data-id` pair the sheet page binds to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    FirstSecond,
    LeftRight,
}

impl Layout {
    pub fn table_ids(self) -> (&'static str, &'static str) {
        match self {
            Self::FirstSecond => ("skills-first", "skills-second"),
            Self::LeftRight => ("skills-left", "skills-right"),
        }
    }
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps the tables either as a bare fragment (leading and trailing newline,
/// ready to paste into a page template) or as a standalone page.
pub fn render_document(tables: &[String], standalone: Option<&str>) -> String {
    let tables = tables.join("\n");
    match standalone {
        None => format!("\n{tables}\n"),
        Some(title) => format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
{tables}
</body>
</html>
"#,
            title = escape(title),
        ),
    }
}
