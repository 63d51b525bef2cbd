mod common;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use common::{date, dec, test_dir};
use rbillsheet::export::{ExportFormat, ExportOptions, SummaryExport, export, write_csv};
use rbillsheet::models::OutputRow;
use rbillsheet::ui::preview::render_preview;
use rbillsheet::utils::date::{from_excel_serial, parse_date, to_excel_serial};
use rbillsheet::utils::encoding::{decode_cp1252, encode_cp1252};
use rbillsheet::utils::format_hours;
use rbillsheet::utils::formatting::is_valid_date_format;
use std::path::Path;

fn row(code: &str, day: u32, description: &str, work: &str, travel: &str) -> OutputRow {
    OutputRow {
        person_code: code.to_string(),
        date: date(2024, 1, day),
        description: description.to_string(),
        work_hours: dec(work),
        travel_hours: dec(travel),
    }
}

#[test]
fn test_csv_quotes_only_when_needed() {
    let rows = vec![
        row("us", 5, "Setup, ", "3", "1"),
        row("sf", 6, "Server; Backup", "0.50", "0"),
    ];
    let mut buf = Vec::new();
    write_csv(&rows, &ExportOptions::default(), &mut buf).expect("write");

    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(
        text,
        "\u{feff}Bearb.;Datum;Arbeitsbeschrieb;Arbeitstarif;Fahrtarif\n\
         us;05.01.2024;Setup, ;3;1\n\
         sf;06.01.2024;\"Server; Backup\";0.5;0\n"
    );
}

#[test]
fn test_csv_of_empty_summary_is_header_only() {
    let opts = ExportOptions {
        bom: false,
        ..ExportOptions::default()
    };
    let mut buf = Vec::new();
    write_csv(&[], &opts, &mut buf).expect("write");

    assert_eq!(
        String::from_utf8(buf).expect("utf8"),
        "Bearb.;Datum;Arbeitsbeschrieb;Arbeitstarif;Fahrtarif\n"
    );
}

#[test]
fn test_json_record_uses_column_names() {
    let export = SummaryExport::from_row(&row("nl", 5, "", "0", "1.25"), "%Y-%m-%d");
    let v = serde_json::to_value(&export).expect("json");

    assert_eq!(v["Bearb."], "nl");
    assert_eq!(v["Datum"], "2024-01-05");
    assert_eq!(v["Arbeitsbeschrieb"], "");
    assert_eq!(v["Fahrtarif"].as_f64(), Some(1.25));
}

#[test]
fn test_xlsx_dates_are_real_dates() {
    let dir = test_dir("export_xlsx_dates");
    let path = dir.join("out.xlsx");
    export(
        &[row("us", 5, "Setup, ", "3", "1")],
        ExportFormat::Xlsx,
        &path,
        &ExportOptions::default(),
    )
    .expect("export");

    let mut wb = open_workbook_auto(&path).expect("open");
    let range = wb.worksheet_range("Transformed").expect("sheet");

    assert_eq!(range.get_value((0, 2)), Some(&Data::String("Arbeitsbeschrieb".into())));
    let cell = range.get_value((1, 1)).expect("date cell");
    assert_eq!(cell.as_date(), Some(date(2024, 1, 5)));
    assert_eq!(range.get_value((1, 3)).and_then(|d| d.get_float()), Some(3.0));
}

#[test]
fn test_pdf_has_one_page_per_chunk() {
    let dir = test_dir("export_pdf_pages");
    let path = dir.join("out.pdf");
    let rows: Vec<OutputRow> = (0..60)
        .map(|i| row("ss", 1 + (i % 28), "Wartung Kühlanlage", "1", "0"))
        .collect();

    export(&rows, ExportFormat::Pdf, &path, &ExportOptions::default()).expect("export");

    let bytes = std::fs::read(&path).expect("read");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 3"), "60 rows span three pages");
}

#[test]
fn test_preview_marks_unmapped_and_empty() {
    let rows = vec![
        row("us", 5, "Setup, ", "3", "1"),
        row("Jane Doe", 6, "", "0", "2"),
    ];
    let out = render_preview(&rows, &["Jane Doe".to_string()], "%d.%m.%Y", None);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Bearb."));
    assert!(lines[2].contains("05.01.2024"));
    assert!(lines[3].contains("\x1b[33mJane Doe"));
    assert!(lines[3].contains("\x1b[90m-"));
}

#[test]
fn test_preview_wraps_long_descriptions() {
    let long = "Netzwerk neu verkabelt und Switch im Serverraum ersetzt, danach Tests";
    let out = render_preview(&[row("mc", 5, long, "4", "0")], &[], "%d.%m.%Y", None);

    assert_eq!(out.lines().count(), 4);
    assert!(out.contains("Tests"));
}

#[test]
fn test_output_format_from_extension() {
    assert_eq!(ExportFormat::from_path(Path::new("x.JSON")), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::from_path(Path::new("x.pdf")), Some(ExportFormat::Pdf));
    assert_eq!(ExportFormat::from_path(Path::new("x.txt")), None);
}

#[test]
fn test_hours_and_dates_helpers() {
    assert_eq!(format_hours(dec("3.00")), "3");
    assert_eq!(format_hours(dec("0.250")), "0.25");

    assert_eq!(parse_date("05.01.24"), Some(date(2024, 1, 5)));
    assert_eq!(parse_date("05/01/2024"), Some(date(2024, 1, 5)));
    assert_eq!(parse_date("2024-01-05 00:00:00"), Some(date(2024, 1, 5)));
    assert_eq!(parse_date("Freitag"), None);

    assert_eq!(to_excel_serial(date(2024, 1, 5)), 45296.0);
    assert_eq!(from_excel_serial(45296.75), Some(date(2024, 1, 5)));
    assert_eq!(from_excel_serial(0.0), None);

    assert!(is_valid_date_format("%d.%m.%Y"));
    assert!(!is_valid_date_format("%Q"));
    assert!(!is_valid_date_format(""));
}

#[test]
fn test_windows_1252_table() {
    assert_eq!(decode_cp1252(b"\x80 \x93x\x94 \x96 \xE4"), "€ \u{201C}x\u{201D} \u{2013} ä");
    assert_eq!(encode_cp1252("€ Müller – 漢"), b"\x80 M\xFCller \x96 ?".to_vec());
}
