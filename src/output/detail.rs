//! "Field: value" rendering for the detail pane and `show`.

use crate::db::SessionRow;

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One line per column, field name capitalized, NULL code as empty value.
pub(crate) fn detail_lines(row: &SessionRow) -> Vec<String> {
    [
        ("title", row.title.as_str()),
        ("date", row.date.as_str()),
        ("session_code", row.code_display()),
    ]
    .into_iter()
    .map(|(field, value)| format!("{}: {}", capitalize(field), value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_capitalize_column_names() {
        let row = SessionRow {
            id: 1,
            title: "Keynote".to_string(),
            date: "Mon, Jun 5 10:00 AM".to_string(),
            code: Some("K1".to_string()),
        };
        assert_eq!(
            detail_lines(&row),
            vec![
                "Title: Keynote",
                "Date: Mon, Jun 5 10:00 AM",
                "Session_code: K1",
            ]
        );
    }

    #[test]
    fn null_code_renders_empty_value() {
        let row = SessionRow {
            id: 2,
            title: "Panel".to_string(),
            date: "Thu, Jun 8 4:00 PM".to_string(),
            code: None,
        };
        assert_eq!(detail_lines(&row)[2], "Session_code: ");
    }
}
