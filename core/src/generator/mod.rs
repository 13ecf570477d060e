pub mod output;

pub use output::{OutputStatus, compare_document, write_document};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::render::{Layout, render_document, render_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub skill_rows: usize,
    pub instance_rows: usize,
}

pub struct TableGenerator {
    catalog: Catalog,
    layout: Layout,
    standalone_title: Option<String>,
}

impl TableGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            layout: Layout::default(),
            standalone_title: None,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Emit a complete HTML page instead of a bare fragment.
    pub fn with_standalone(mut self, title: impl Into<String>) -> Self {
        self.standalone_title = Some(title.into());
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn build_core_table(&self) -> String {
        let rows = self.catalog.core_rows();
        tracing::debug!(rows = rows.len(), "Building core skill table");
        render_table(self.layout.table_ids().0, &rows, &self.catalog)
    }

    pub fn build_named_table(&self) -> String {
        let rows = self.catalog.named_rows();
        tracing::debug!(rows = rows.len(), "Building named skill table");
        render_table(self.layout.table_ids().1, &rows, &self.catalog)
    }

    pub fn render(&self) -> Result<String> {
        for warning in self.catalog.validate()? {
            tracing::warn!("{}", warning);
        }

        let tables = [self.build_core_table(), self.build_named_table()];
        Ok(render_document(&tables, self.standalone_title.as_deref()))
    }

    pub fn generate(&self, path: &Path) -> Result<GenerateReport> {
        let document = self.render()?;
        write_document(path, &document)?;

        let report = GenerateReport {
            path: path.to_path_buf(),
            bytes: document.len(),
            skill_rows: self.catalog.leaf_count(),
            instance_rows: self.catalog.instance_count(),
        };

        tracing::info!(
            path = %path.display(),
            bytes = report.bytes,
            skill_rows = report.skill_rows,
            instance_rows = report.instance_rows,
            "Skill tables written"
        );

        Ok(report)
    }

    pub fn check(&self, path: &Path) -> Result<OutputStatus> {
        let document = self.render()?;
        let status = compare_document(path, &document)?;
        tracing::debug!(path = %path.display(), ?status, "Checked generated tables");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillDescriptor;
    use std::collections::{BTreeMap, HashSet};
    use tempfile::TempDir;

    fn data_ids(html: &str) -> Vec<&str> {
        html.lines()
            .filter(|l| l.starts_with("<tr"))
            .filter_map(|l| l.split("data-id=\"").nth(1))
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    /// Returns the `<tr …>…</tr>` block whose row id is `id`.
    fn row_block<'a>(html: &'a str, id: &str) -> &'a str {
        let marker = format!("data-id=\"{id}\">");
        let start = html.find(&marker).unwrap();
        let end = start + html[start..].find("</tr>").unwrap();
        &html[start..end]
    }

    #[test]
    fn output_is_deterministic() {
        let generator = TableGenerator::new(Catalog::default());
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skills.html");
        generator.generate(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        TableGenerator::new(Catalog::default())
            .generate(&path)
            .unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn row_ids_are_unique() {
        let html = TableGenerator::new(Catalog::default()).render().unwrap();
        let ids = data_ids(&html);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 27 + 25);
    }

    #[test]
    fn athletics_defaults_to_strength() {
        let catalog = Catalog {
            skills: vec![SkillDescriptor::plain("Athletics")],
            named_skills: vec![],
            named_counts: BTreeMap::new(),
            defaults: BTreeMap::from([("athletics".to_string(), "S".to_string())]),
            ..Catalog::default()
        };
        let html = TableGenerator::new(catalog).render().unwrap();
        let row = row_block(&html, "athletics");

        assert!(row.contains(r#"<option value="S" selected>S</option>"#));
        assert_eq!(row.matches(" selected").count(), 1);
        assert_eq!(row.matches(r#"type="checkbox""#).count(), 4);
        for off in ["+0", "+10", "+20", "+30"] {
            assert!(row.contains(&format!(r#"data-id="{off}""#)));
        }
    }

    #[test]
    fn navigate_family_rows() {
        let catalog = Catalog {
            skills: vec![SkillDescriptor::family(
                "Navigate",
                ["Surface", "Stellar", "Warp"],
            )],
            named_skills: vec![],
            named_counts: BTreeMap::new(),
            defaults: BTreeMap::from([
                ("navigate surface".to_string(), "I".to_string()),
                ("navigate stellar".to_string(), "P".to_string()),
                ("navigate warp".to_string(), "W".to_string()),
            ]),
            ..Catalog::default()
        };
        let html = TableGenerator::new(catalog).build_core_table();

        assert!(html.contains("<tr>\n    <td>Navigate</td>\n</tr>"));
        let header_at = html.find("<td>Navigate</td>").unwrap();

        let expected = [
            ("navigate_surface", "Surface", "I"),
            ("navigate_stellar", "Stellar", "P"),
            ("navigate_warp", "Warp", "W"),
        ];
        let mut last = header_at;
        for (id, label, default) in expected {
            let at = html
                .find(&format!(r#"<tr class="subskill" data-id="{id}">"#))
                .unwrap();
            assert!(at > last, "{id} out of order");
            last = at;

            let row = row_block(&html, id);
            assert!(row.contains(&format!("<td>{label}</td>")));
            assert!(row.contains(&format!(
                r#"<option value="{default}" selected>{default}</option>"#
            )));
            assert_eq!(row.matches(r#"type="checkbox""#).count(), 4);
        }
    }

    #[test]
    fn trade_repeats_five_times() {
        let catalog = Catalog {
            named_skills: vec!["Trade".to_string()],
            named_counts: BTreeMap::from([("Trade".to_string(), 5)]),
            ..Catalog::default()
        };
        let html = TableGenerator::new(catalog).build_named_table();
        let ids = data_ids(&html);

        assert_eq!(ids, ["1_trade", "2_trade", "3_trade", "4_trade", "5_trade"]);
        assert_eq!(html.matches(r#"<td><input data-id="name"></td>"#).count(), 5);
        assert!(html.contains("<tr>\n    <td>Trade</td>\n</tr>"));
    }

    #[test]
    fn unconfigured_named_skill_uses_default_repeat() {
        let catalog = Catalog {
            named_skills: vec!["Pilot".to_string()],
            named_counts: BTreeMap::new(),
            default_repeat: 3,
            ..Catalog::default()
        };
        let html = TableGenerator::new(catalog).build_named_table();
        assert_eq!(data_ids(&html), ["1_pilot", "2_pilot", "3_pilot"]);
    }

    #[test]
    fn unmapped_skill_has_no_selection() {
        let catalog = Catalog {
            skills: vec![SkillDescriptor::plain("Pilot")],
            named_skills: vec![],
            named_counts: BTreeMap::new(),
            ..Catalog::default()
        };
        let html = TableGenerator::new(catalog).render().unwrap();
        assert!(!row_block(&html, "pilot").contains("selected"));
    }

    #[test]
    fn every_mapped_leaf_selects_its_default() {
        let catalog = Catalog::default();
        let html = TableGenerator::new(catalog.clone()).render().unwrap();
        for row in catalog.core_rows().iter().chain(catalog.named_rows().iter()) {
            let (Some(id), Some(default)) = (row.id(), row.default()) else {
                continue;
            };
            let block = row_block(&html, id.as_str());
            assert!(
                block.contains(&format!(r#"<option value="{default}" selected>"#)),
                "{id} does not select {default}"
            );
        }
    }

    #[test]
    fn layout_changes_table_ids_only() {
        let first = TableGenerator::new(Catalog::default()).render().unwrap();
        let left = TableGenerator::new(Catalog::default())
            .with_layout(Layout::LeftRight)
            .render()
            .unwrap();

        assert!(left.contains(r#"<table data-id="skills-left">"#));
        assert!(left.contains(r#"<table data-id="skills-right">"#));
        assert_eq!(
            left.replace("skills-left", "skills-first")
                .replace("skills-right", "skills-second"),
            first
        );
    }

    #[test]
    fn fragment_shape() {
        let html = TableGenerator::new(Catalog::default()).render().unwrap();
        assert!(html.starts_with("\n<table data-id=\"skills-first\">\n"));
        assert!(html.ends_with("</table>\n"));
        assert_eq!(html.matches("<table").count(), 2);
    }

    #[test]
    fn standalone_page() {
        let html = TableGenerator::new(Catalog::default())
            .with_standalone("Skills")
            .render()
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<table").count(), 2);
    }

    #[test]
    fn invalid_catalog_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/skills.html");
        let catalog = Catalog {
            skills: vec![
                SkillDescriptor::plain("Dodge"),
                SkillDescriptor::plain("Dodge"),
            ],
            ..Catalog::default()
        };

        assert!(TableGenerator::new(catalog).generate(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn generate_reports_counts_and_check_agrees() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_python/skills.html");
        let generator = TableGenerator::new(Catalog::default());

        assert_eq!(generator.check(&path).unwrap(), OutputStatus::Missing);

        let report = generator.generate(&path).unwrap();
        assert_eq!(report.skill_rows, 27);
        assert_eq!(report.instance_rows, 25);
        assert_eq!(report.bytes, std::fs::metadata(&path).unwrap().len() as usize);
        assert_eq!(generator.check(&path).unwrap(), OutputStatus::UpToDate);

        let standalone = TableGenerator::new(Catalog::default()).with_standalone("Skills");
        assert_eq!(standalone.check(&path).unwrap(), OutputStatus::Stale);
    }
}
