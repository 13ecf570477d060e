use crate::catalog::{Catalog, Row};

use super::cells::{checkbox_cells, difficulty_cell, label_cell, name_cell, select_cell};
use super::escape;

const INDENT: &str = "    ";

pub fn render_row(row: &Row<'_>, catalog: &Catalog) -> String {
    match row {
        Row::Header { label } => format!("<tr>\n{INDENT}{}\n</tr>", label_cell(label)),
        Row::Skill {
            id,
            label,
            subskill,
            default,
        } => {
            let class = if *subskill { r#" class="subskill""# } else { "" };
            leaf_row(
                &format!(r#"<tr{class} data-id="{}">"#, escape(id.as_str())),
                label_cell(label),
                catalog,
                *default,
            )
        }
        Row::Instance { id, default } => leaf_row(
            &format!(r#"<tr data-id="{}">"#, escape(id.as_str())),
            name_cell(),
            catalog,
            *default,
        ),
    }
}

fn leaf_row(open: &str, first_cell: String, catalog: &Catalog, default: Option<&str>) -> String {
    [
        open.to_string(),
        format!("{INDENT}{first_cell}"),
        format!("{INDENT}{}", select_cell(&catalog.characteristics, default)),
        format!("{INDENT}{}", checkbox_cells(&catalog.offsets)),
        format!("{INDENT}{}", difficulty_cell()),
        "</tr>".to_string(),
    ]
    .join("\n")
}

pub fn render_table(table_id: &str, rows: &[Row<'_>], catalog: &Catalog) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(r#"<table data-id="{}">"#, escape(table_id)));
    lines.extend(rows.iter().map(|row| render_row(row, catalog)));
    lines.push("</table>".to_string());
    lines.join("\n")
}
