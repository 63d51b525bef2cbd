//! Table rendering utilities for CLI outputs.

use crate::utils::colors::colorize;
use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Wrap cells wider than this onto continuation lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            max_width: None,
        }
    }

    pub fn wrapped(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }
}

/// A cell: the plain text used for layout and an optional ANSI color.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn lines_of(&self, col: usize, text: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if UnicodeWidthStr::width(text) > w => textwrap::wrap(text, w)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![text.to_string()],
        }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let w = self
                    .lines_of(i, &cell.text)
                    .iter()
                    .map(|l| UnicodeWidthStr::width(l.as_str()))
                    .max()
                    .unwrap_or(0);
                widths[i] = widths[i].max(w);
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cell_lines: Vec<Vec<String>> = row
                .iter()
                .enumerate()
                .take(widths.len())
                .map(|(i, cell)| self.lines_of(i, &cell.text))
                .collect();
            let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                for (i, lines) in cell_lines.iter().enumerate() {
                    let text = lines.get(line).map(String::as_str).unwrap_or("");
                    let padded = match self.columns[i].align {
                        Align::Left => pad_right(text, widths[i]),
                        Align::Right => pad_left(text, widths[i]),
                    };
                    match row[i].color {
                        Some(color) if !text.is_empty() => out.push_str(&colorize(&padded, color)),
                        _ => out.push_str(&padded),
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
