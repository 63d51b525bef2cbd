// src/export/pdf.rs

use crate::utils::encoding::encode_cp1252;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Approximate Helvetica advance width of one character, in units of font size.
const AVG_CHAR_WIDTH: f32 = 0.52;

/// Inner padding of a table cell, left and right.
const CELL_PADDING: f32 = 4.0;

/// No column may take more than this share of the printable width.
const MAX_COLUMN_SHARE: f32 = 0.5;

/// Paged table renderer on top of `pdf-writer`: landscape A4, Helvetica.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        // WinAnsi so that umlauts in names and remarks render
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Rows that fit below the title and the table header on one page.
    fn rows_per_page(&self) -> usize {
        let usable = self.page_h - 2.0 * self.margin - 30.0 - self.row_h;
        ((usable / self.row_h).floor() as usize).max(1)
    }

    /// Column widths from content length, capped and scaled to the printable width.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let printable = self.page_w - 2.0 * self.margin;
        let text_w = |s: &str, size: f32| s.chars().count() as f32 * size * AVG_CHAR_WIDTH;

        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| text_w(h, self.header_font_size) + 2.0 * CELL_PADDING)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(text_w(cell, self.font_size) + 2.0 * CELL_PADDING);
            }
        }

        for w in &mut widths {
            *w = w.min(printable * MAX_COLUMN_SHARE);
        }

        let total: f32 = widths.iter().sum();
        if total > printable {
            let scale = printable / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encode_cp1252(text)));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(widths) {
            let fitted = fit_to_width(text, w - 2.0 * CELL_PADDING, size);
            self.draw_text(content, x + CELL_PADDING, y + 5.0, size, &fitted);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// One page: title, page number, table header and `rows`.
    fn table_page(
        &mut self,
        title: &str,
        page_no: usize,
        header: &[String],
        widths: &[f32],
        rows: &[Vec<String>],
    ) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        let mut content = Content::new();
        let table_w: f32 = widths.iter().sum();

        self.draw_text(
            &mut content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );
        self.draw_text(
            &mut content,
            self.page_w - self.margin - 50.0,
            self.margin - 25.0,
            self.font_size,
            &format!("Page {page_no}"),
        );

        let mut y = self.page_h - self.margin - 30.0;
        self.fill_band(&mut content, y, table_w, 0.85);
        self.draw_row(&mut content, y, widths, header, self.header_font_size);

        for (i, row) in rows.iter().enumerate() {
            y -= self.row_h;
            if i % 2 == 0 {
                self.fill_band(&mut content, y, table_w, 0.95);
            }
            self.draw_row(&mut content, y, widths, row, self.font_size);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Multi-page table under `title`; with no rows, one page with just the header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.column_widths(headers, rows);
        let header: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        if rows.is_empty() {
            self.table_page(title, 1, &header, &widths, &[]);
            return;
        }

        let per_page = self.rows_per_page();
        for (idx, chunk) in rows.chunks(per_page).enumerate() {
            self.table_page(title, idx + 1, &header, &widths, chunk);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Truncate `text` with "..." so that it fits into `width` points.
fn fit_to_width(text: &str, width: f32, font_size: f32) -> String {
    let max_chars = (width / (font_size * AVG_CHAR_WIDTH)).floor().max(3.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}
