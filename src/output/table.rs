use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS,
    presets::UTF8_FULL,
};

use crate::cli::SortOrder;
use crate::db::SessionRow;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ListTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color { cell.fg(Color::Cyan) } else { cell }
}

/// Print the filtered result set as a table (columns Title, Date, Code).
pub(crate) fn print_session_table(rows: &[SessionRow], options: ListTableOptions) {
    let mut rows: Vec<&SessionRow> = rows.iter().collect();
    if matches!(options.order, SortOrder::Desc) {
        rows.reverse();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Title", options.use_color),
            header_cell("Date", options.use_color),
            header_cell("Code", options.use_color),
        ]);

    for row in &rows {
        table.add_row(vec![
            Cell::new(&row.title),
            Cell::new(&row.date),
            Cell::new(row.code_display()),
        ]);
    }

    println!("{table}");
    println!("\n  {} sessions\n", rows.len());
}
