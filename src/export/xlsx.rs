// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::HEADERS;
use crate::export::{ExportOptions, notify_export_success};
use crate::models::OutputRow;
use crate::ui::messages::info;
use crate::utils::date::to_excel_serial;
use crate::utils::formatting::{format_date, format_hours};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Widest description column before text wraps inside the cell.
const MAX_DESCRIPTION_WIDTH: usize = 60;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(rows: &[OutputRow], path: &Path, opts: &ExportOptions) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Transformed").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let excel_date_format = excel_num_format(&opts.date_format);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (idx, r) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        let band = if idx % 2 == 0 { band1 } else { band2 };
        let base = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        write_text(worksheet, row, 0, &r.person_code, &base)?;

        let date_fmt = base.clone().set_num_format(&excel_date_format);
        worksheet
            .write_with_format(row, 1, to_excel_serial(r.date), &date_fmt)
            .map_err(to_export_error)?;

        let text_fmt = base.clone().set_text_wrap();
        write_text(worksheet, row, 2, &r.description, &text_fmt)?;

        let num_fmt = base.clone().set_align(FormatAlign::Right).set_num_format("0.00");
        for (col, hours) in [(3u16, r.work_hours), (4u16, r.travel_hours)] {
            worksheet
                .write_with_format(row, col, hours.to_f64().unwrap_or_default(), &num_fmt)
                .map_err(to_export_error)?;
        }

        let date_text = format_date(r.date, &opts.date_format);
        let work_text = format_hours(r.work_hours);
        let travel_text = format_hours(r.travel_hours);
        let rendered = [
            r.person_code.as_str(),
            date_text.as_str(),
            r.description.as_str(),
            work_text.as_str(),
            travel_text.as_str(),
        ];
        for (c, text) in rendered.iter().enumerate() {
            col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(*text));
        }
    }

    col_widths[2] = col_widths[2].min(MAX_DESCRIPTION_WIDTH);
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_text(ws: &mut Worksheet, row: u32, col: u16, s: &str, fmt: &Format) -> AppResult<()> {
    ws.write_with_format(row, col, s, fmt)
        .map_err(to_export_error)?;
    Ok(())
}

/// Translate a strftime date pattern into an Excel number format.
fn excel_num_format(strftime: &str) -> String {
    strftime
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
        .replace("%y", "yy")
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
