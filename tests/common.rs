#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rbillsheet::models::Entry;
use rust_decimal::Decimal;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub const HEADER: &str = "Abgeschlossen;Datum;Benutzer;Leistung;Stunden;Bemerkung";

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbillsheet")
}

/// Fresh, empty working directory for one test inside the system temp dir
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rbillsheet_tests");
    path.push(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of a configuration file that does not exist (defaults apply)
pub fn no_config(dir: &PathBuf) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

/// Write `lines` below the standard header into `<dir>/<file>`
pub fn write_input(dir: &PathBuf, file: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(file);
    let mut content = String::from(HEADER);
    for l in lines {
        content.push('\n');
        content.push_str(l);
    }
    content.push('\n');
    fs::write(&path, content).expect("write input");
    path
}

/// The two open rows from the reference example plus one completed row
pub fn sample_lines() -> Vec<&'static str> {
    vec![
        "Nein;05.01.2024;Urs Steinegger;Arbeitstarif;3;Setup",
        "Nein;05.01.2024;Urs Steinegger;Fahrtarif;1;",
        "Ja;05.01.2024;Simone Frei;Arbeitstarif;8;Already billed",
    ]
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("decimal literal")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn entry(
    day: NaiveDate,
    user: &str,
    completed: bool,
    category: &str,
    hours: &str,
    remark: Option<&str>,
) -> Entry {
    Entry {
        date: day,
        user: user.to_string(),
        completed,
        category: category.to_string(),
        hours: dec(hours),
        remark: remark.map(str::to_string),
    }
}

/// Output file content without the BOM, split into lines
pub fn output_lines(path: &PathBuf) -> Vec<String> {
    let content = fs::read_to_string(path).expect("read output");
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::to_string)
        .collect()
}
