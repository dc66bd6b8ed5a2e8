use crate::cli::SortOrder;
use crate::db::SessionRow;

/// JSON array of the filtered result set. NULL codes serialize as "".
pub(crate) fn output_session_json(rows: &[SessionRow], order: SortOrder) -> String {
    let mut rows: Vec<&SessionRow> = rows.iter().collect();
    if matches!(order, SortOrder::Desc) {
        rows.reverse();
    }

    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "id": row.id,
                "title": row.title,
                "date": row.date,
                "code": row.code_display(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn output_detail_json(row: &SessionRow) -> String {
    let value = serde_json::json!({
        "id": row.id,
        "title": row.title,
        "date": row.date,
        "code": row.code_display(),
    });
    serde_json::to_string_pretty(&value).unwrap()
}
