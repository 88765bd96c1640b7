use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A4 in points.
const A4_SHORT: f32 = 595.0;
const A4_LONG: f32 = 842.0;

/// Minimal multi-page table writer on top of `pdf_writer`.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PdfManager {
    /// Landscape pages leave room for ledgers with many session columns.
    pub fn new(landscape: bool) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let (page_w, page_h) = if landscape {
            (A4_LONG, A4_SHORT)
        } else {
            (A4_SHORT, A4_LONG)
        };

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin: 40.0,
            row_h: 18.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 9.5,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, self.row_h);
        content.stroke();
        content.restore_state();
    }

    /// Draw one table row. Cells listed in `highlight` get a green or red fill
    /// for `1`/`0` values.
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        highlight: &std::ops::Range<usize>,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            if highlight.contains(&i) {
                match text.as_str() {
                    "1" => self.fill_rect(content, x, y, w, (0.78, 0.94, 0.81)),
                    "0" => self.fill_rect(content, x, y, w, (1.0, 0.78, 0.81)),
                    _ => {}
                }
            }
            self.draw_text(content, x + 3.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.6 + 6.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = (cell.len() as f32 * 5.2 + 6.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    /// Multi-page table with a title; the header row repeats on every page.
    pub fn write_table(
        &mut self,
        title: &str,
        headers: &[String],
        rows: &[Vec<String>],
        highlight: std::ops::Range<usize>,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        // an empty ledger still gets one page with the header row
        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_rect(&mut content, self.margin, y, table_w, (0.85, 0.87, 0.90));
            self.draw_row(
                &mut content,
                y,
                &col_widths,
                headers,
                self.header_font_size,
                &(0..0),
            );
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                if i % 2 == 0 {
                    self.fill_rect(&mut content, self.margin, y, table_w, (0.96, 0.96, 0.96));
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size, &highlight);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
