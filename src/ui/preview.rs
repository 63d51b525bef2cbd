//! Terminal preview of a billing summary.

use crate::export::HEADERS;
use crate::models::OutputRow;
use crate::utils::colors::{GREY, color_for_handler, color_for_hours};
use crate::utils::formatting::{format_date, format_hours};
use crate::utils::table::{Cell, Column, Table};

/// Descriptions longer than this wrap onto continuation lines.
const DESCRIPTION_WIDTH: usize = 48;

/// Render up to `limit` rows (all when `None`) as an aligned table.
///
/// Handlers listed in `unmapped` kept their full name and are highlighted.
pub fn render_preview(
    rows: &[OutputRow],
    unmapped: &[String],
    date_format: &str,
    limit: Option<usize>,
) -> String {
    let mut table = Table::new(vec![
        Column::left(HEADERS[0]),
        Column::left(HEADERS[1]),
        Column::left(HEADERS[2]).wrapped(DESCRIPTION_WIDTH),
        Column::right(HEADERS[3]),
        Column::right(HEADERS[4]),
    ]);

    let shown = limit.unwrap_or(rows.len()).min(rows.len());

    for r in &rows[..shown] {
        let mapped = !unmapped.contains(&r.person_code);

        table.add_row(vec![
            Cell::colored(r.person_code.clone(), color_for_handler(mapped)),
            Cell::plain(format_date(r.date, date_format)),
            if r.description.trim().is_empty() {
                Cell::colored("-", GREY)
            } else {
                Cell::plain(r.description.clone())
            },
            Cell::colored(format_hours(r.work_hours), color_for_hours(r.work_hours)),
            Cell::colored(format_hours(r.travel_hours), color_for_hours(r.travel_hours)),
        ]);
    }

    let mut out = table.render();
    if shown < rows.len() {
        out.push_str(&format!("... {} more rows\n", rows.len() - shown));
    }
    out
}
