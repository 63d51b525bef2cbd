mod common;

use common::{HEADER, date, dec, test_dir, write_input};
use rbillsheet::errors::AppError;
use rbillsheet::import::{
    InputFormat, LoadOptions, RawCell, RawTable, entries_from_table, load_entries, read_delimited,
};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

fn load(path: &Path) -> Result<Vec<rbillsheet::models::Entry>, AppError> {
    load_entries(path, &LoadOptions::default())
}

#[test]
fn test_reads_semicolon_file_with_bom() {
    let dir = test_dir("import_bom");
    let path = dir.join("input.csv");
    let content = format!(
        "\u{feff}{HEADER}\nNein;05.01.2024;Urs Steinegger;Arbeitstarif;3;Setup\n"
    );
    fs::write(&path, content).expect("write input");

    let entries = load(&path).expect("load");

    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.date, date(2024, 1, 5));
    assert_eq!(e.user, "Urs Steinegger");
    assert!(!e.completed);
    assert_eq!(e.category, "Arbeitstarif");
    assert_eq!(e.hours, dec("3"));
    assert_eq!(e.remark.as_deref(), Some("Setup"));
}

#[test]
fn test_missing_hours_column_is_schema_error() {
    let dir = test_dir("import_missing_column");
    let path = dir.join("input.csv");
    fs::write(
        &path,
        "Abgeschlossen;Datum;Benutzer;Leistung;Bemerkung\n\
         Nein;05.01.2024;Urs Steinegger;Arbeitstarif;x\n",
    )
    .expect("write input");

    let err = load(&path).expect_err("missing column");

    assert!(err.is_schema_error());
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "Stunden"));
}

#[test]
fn test_remark_column_is_optional() {
    let dir = test_dir("import_no_remark");
    let path = dir.join("input.csv");
    fs::write(
        &path,
        "Datum;Benutzer;Abgeschlossen;Stunden;Leistung\n\
         05.01.2024;Nina Leidenberger;Nein;2;Fahrtarif\n",
    )
    .expect("write input");

    let entries = load(&path).expect("load");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].remark, None);
    assert_eq!(entries[0].category, "Fahrtarif");
    assert_eq!(entries[0].hours, dec("2"));
}

#[test]
fn test_decimal_comma_and_date_layouts() {
    let dir = test_dir("import_decimal_comma");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Nein;2024-01-05;Urs Steinegger;Arbeitstarif;1,5;",
            "Nein;05.01.24;Urs Steinegger;Fahrtarif;0.25;",
        ],
    );

    let entries = load(&path).expect("load");

    assert_eq!(entries[0].hours, dec("1.5"));
    assert_eq!(entries[0].remark, None);
    assert_eq!(entries[1].hours, dec("0.25"));
    assert_eq!(entries[0].date, date(2024, 1, 5));
    assert_eq!(entries[1].date, date(2024, 1, 5));
}

#[test]
fn test_only_literal_nein_is_open() {
    let dir = test_dir("import_open_marker");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Nein;05.01.2024;a;Arbeitstarif;1;",
            " Nein ;05.01.2024;b;Arbeitstarif;1;",
            "nein;05.01.2024;c;Arbeitstarif;1;",
            "NEIN;05.01.2024;d;Arbeitstarif;1;",
            "Ja;05.01.2024;e;Arbeitstarif;1;",
            "Vielleicht;05.01.2024;f;Arbeitstarif;1;",
            ";05.01.2024;g;Arbeitstarif;1;",
        ],
    );

    let entries = load(&path).expect("unknown flags are not an error");

    assert_eq!(entries.len(), 7);
    let open: Vec<&str> = entries
        .iter()
        .filter(|e| !e.completed)
        .map(|e| e.user.as_str())
        .collect();
    assert_eq!(open, ["a", "b"]);
}

#[test]
fn test_completed_rows_are_not_validated() {
    let dir = test_dir("import_completed_unchecked");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Ja;irgendwann;Simone Frei;Arbeitstarif;viel;",
            ";;Simone Frei;;;Notiz",
            "Nein;05.01.2024;Urs Steinegger;Arbeitstarif;3;Setup",
        ],
    );

    let entries = load(&path).expect("load");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "Urs Steinegger");
}

#[test]
fn test_extra_field_is_an_error() {
    let dir = test_dir("import_extra_field");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Nein;05.01.2024;Urs Steinegger;Fahrtarif;1;",
            "Nein;05.01.2024;Urs Steinegger;Arbeitstarif;3;Setup; Kunde Meier",
        ],
    );

    let err = load(&path).expect_err("seven fields under a six-column header");

    assert!(matches!(err, AppError::Parse(_)));
    let msg = err.to_string();
    assert!(msg.contains("row 3"), "{msg}");
    assert!(msg.contains("expected 6 fields, found 7"), "{msg}");
}

#[test]
fn test_short_rows_read_as_empty_cells() {
    let dir = test_dir("import_short_row");
    let path = write_input(&dir, "input.csv", &["Nein;05.01.2024;a;Arbeitstarif;2"]);

    let entries = load(&path).expect("load");
    assert_eq!(entries[0].remark, None);
    assert_eq!(entries[0].hours, dec("2"));
}

#[test]
fn test_remark_spacing_is_kept() {
    let dir = test_dir("import_remark_spacing");
    let path = write_input(
        &dir,
        "input.csv",
        &["Nein; 05.01.2024 ; Urs Steinegger ; Arbeitstarif ; 3 ;  Setup "],
    );

    let entries = load(&path).expect("load");

    assert_eq!(entries[0].user, "Urs Steinegger");
    assert_eq!(entries[0].category, "Arbeitstarif");
    assert_eq!(entries[0].hours, dec("3"));
    assert_eq!(entries[0].remark.as_deref(), Some("  Setup "));
}

#[test]
fn test_negative_and_garbage_hours_rejected() {
    let dir = test_dir("import_bad_hours");

    let negative = write_input(&dir, "neg.csv", &["Nein;05.01.2024;a;Arbeitstarif;-1;"]);
    let err = load(&negative).expect_err("negative hours");
    assert!(err.to_string().contains("Stunden"));

    let garbage = write_input(&dir, "nan.csv", &["Nein;05.01.2024;a;Arbeitstarif;viel;"]);
    assert!(matches!(
        load(&garbage),
        Err(AppError::InvalidValue { row: 2, .. })
    ));
}

#[test]
fn test_invalid_date_reports_third_row() {
    let dir = test_dir("import_bad_date");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Nein;05.01.2024;a;Arbeitstarif;1;",
            "Nein;32.13.2024;a;Arbeitstarif;1;",
        ],
    );

    let err = load(&path).expect_err("bad date");
    assert!(matches!(
        err,
        AppError::InvalidValue { row: 3, ref column, .. } if column == "Datum"
    ));
}

#[test]
fn test_windows_1252_input_is_decoded() {
    let dir = test_dir("import_cp1252");
    let path = dir.join("input.csv");
    let mut bytes = format!("{HEADER}\nNein;05.01.2024;M").into_bytes();
    bytes.push(0xFC);
    bytes.extend_from_slice(b"ller;Arbeitstarif;1;");
    bytes.push(0x93);
    bytes.extend_from_slice(b"Gr");
    bytes.push(0xFC);
    bytes.extend_from_slice(b"n");
    bytes.push(0x94);
    bytes.extend_from_slice(b" 20 ");
    bytes.push(0x80);
    bytes.push(b'\n');
    fs::write(&path, bytes).expect("write input");

    let entries = load(&path).expect("load");

    assert_eq!(entries[0].user, "Müller");
    assert_eq!(entries[0].remark.as_deref(), Some("\u{201C}Grün\u{201D} 20 €"));
}

#[test]
fn test_blank_rows_are_skipped() {
    let dir = test_dir("import_blank_rows");
    let path = write_input(
        &dir,
        "input.csv",
        &[
            "Nein;05.01.2024;a;Arbeitstarif;1;",
            ";;;;;",
            "Nein;06.01.2024;a;Arbeitstarif;2;",
        ],
    );

    let entries = load(&path).expect("load");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].date, date(2024, 1, 6));
}

#[test]
fn test_custom_delimiter() {
    let table = read_delimited(
        "Abgeschlossen,Datum,Benutzer,Leistung,Stunden\nNein,05.01.2024,a,Fahrtarif,\"1,5\"\n"
            .as_bytes(),
        b',',
    )
    .expect("read");

    let entries = entries_from_table(&table).expect("entries");
    assert_eq!(entries[0].hours, dec("1.5"));
}

#[test]
fn test_typed_cells_from_table() {
    let table = RawTable {
        headers: ["Abgeschlossen", "Datum", "Benutzer", "Leistung", "Stunden"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: vec![vec![
            RawCell::Bool(false),
            RawCell::Date(date(2024, 2, 29)),
            RawCell::Number(4711.0),
            RawCell::from_text(" Arbeitstarif "),
            RawCell::Number(0.75),
        ]],
    };

    let entries = entries_from_table(&table).expect("entries");

    assert_eq!(entries[0].user, "4711");
    assert_eq!(entries[0].category, "Arbeitstarif");
    assert_eq!(entries[0].hours, dec("0.75"));
    assert_eq!(entries[0].date, date(2024, 2, 29));
}

#[test]
fn test_reads_xlsx_input() {
    let dir = test_dir("import_xlsx");
    let path = dir.join("input.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, h) in ["Abgeschlossen", "Datum", "Benutzer", "Leistung", "Stunden", "Bemerkung"]
        .iter()
        .enumerate()
    {
        sheet.write(0, col as u16, *h).expect("header");
    }
    sheet.write(1, 0, "Nein").expect("cell");
    sheet.write(1, 1, 45296).expect("cell");
    sheet.write(1, 2, "Simonetta Selva").expect("cell");
    sheet.write(1, 3, "Arbeitstarif").expect("cell");
    sheet.write(1, 4, 2.5).expect("cell");
    sheet.write(1, 5, "Montage").expect("cell");
    workbook.save(&path).expect("save workbook");

    let entries = load(&path).expect("load");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, date(2024, 1, 5));
    assert_eq!(entries[0].hours, dec("2.5"));
    assert_eq!(entries[0].user, "Simonetta Selva");
    assert_eq!(entries[0].remark.as_deref(), Some("Montage"));
}

#[test]
fn test_unknown_sheet_lists_available() {
    let dir = test_dir("import_xlsx_sheet");
    let path = dir.join("input.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Zeiten").expect("sheet name");
    sheet.write(0, 0, "Abgeschlossen").expect("header");
    workbook.save(&path).expect("save workbook");

    let opts = LoadOptions {
        sheet: Some("Nope".into()),
        ..LoadOptions::default()
    };
    let err = load_entries(&path, &opts).expect_err("unknown sheet");
    assert!(err.to_string().contains("Zeiten"));
}

#[test]
fn test_input_format_by_extension() {
    assert_eq!(
        InputFormat::from_path(Path::new("a.CSV")).expect("csv"),
        InputFormat::Delimited
    );
    assert_eq!(
        InputFormat::from_path(Path::new("a.ods")).expect("ods"),
        InputFormat::Spreadsheet
    );
    assert!(matches!(
        InputFormat::from_path(Path::new("a.docx")),
        Err(AppError::InvalidInputFormat(_))
    ));
}
