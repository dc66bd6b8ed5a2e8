mod detail;
mod json;
mod table;

pub(crate) use detail::detail_lines;
pub(crate) use json::{output_detail_json, output_session_json};
pub(crate) use table::{ListTableOptions, print_session_table};
