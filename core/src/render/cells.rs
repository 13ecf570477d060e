use std::fmt::Write;

use super::escape;

pub fn label_cell(label: &str) -> String {
    format!("<td>{}</td>", escape(label))
}

/// Characteristic dropdown. `default` marks at most one option as selected;
/// a default that is not among `options` selects nothing.
pub fn select_cell<S: AsRef<str>>(options: &[S], default: Option<&str>) -> String {
    let mut opts = String::new();
    for opt in options {
        let opt = escape(opt.as_ref());
        let selected = if default.is_some_and(|d| escape(d) == opt) {
            " selected"
        } else {
            ""
        };
        let _ = write!(opts, r#"<option value="{opt}"{selected}>{opt}</option>"#);
    }
    format!(r#"<td><select data-id="characteristic">{opts}</select></td>"#)
}

pub fn checkbox_cells(offsets: &[u32]) -> String {
    offsets
        .iter()
        .map(|off| format!(r#"<td><input type="checkbox" data-id="+{off}"></td>"#))
        .collect()
}

/// Left blank; the sheet script fills it in.
pub fn difficulty_cell() -> String {
    r#"<td><input type="text" class="short uneditable" data-id="difficulty" readonly></td>"#
        .to_string()
}

pub fn name_cell() -> String {
    r#"<td><input data-id="name"></td>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: &[&str] = &["WS", "BS", "S", "Inf"];

    #[test]
    fn select_marks_only_the_default() {
        let html = select_cell(OPTS, Some("S"));
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains(r#"<option value="S" selected>S</option>"#));
        assert!(html.contains(r#"<option value="WS">WS</option>"#));
    }

    #[test]
    fn select_without_default_has_no_selection() {
        assert!(!select_cell(OPTS, None).contains("selected"));
        assert!(!select_cell(OPTS, Some("Cor")).contains("selected"));
    }

    #[test]
    fn one_checkbox_per_offset() {
        let html = checkbox_cells(&[0, 10, 20, 30]);
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 4);
        for off in ["+0", "+10", "+20", "+30"] {
            assert!(html.contains(&format!(r#"data-id="{off}""#)));
        }
    }

    #[test]
    fn label_is_escaped() {
        assert_eq!(label_cell("Lore <Xenos>"), "<td>Lore &lt;Xenos&gt;</td>");
    }
}
