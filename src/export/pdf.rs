use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Page being filled: its content stream and the current vertical cursor.
struct PageState {
    content: Content,
    content_id: Ref,
    y: f32,
}

/// Minimal flowing PDF writer: text lines and multi-page tables on A4,
/// with a title and page number on every page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    page: Option<PageState>,
    title: String,

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

impl PdfManager {
    pub fn new(title: &str) -> Self {
        let mut pdf = Pdf::new();

        // ids are managed by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            page: None,
            title: title.to_string(),

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one.
    fn start_page(&mut self) {
        self.finalize_page();

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

        // title + page number
        draw_text(
            &mut content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            &self.title,
        );
        draw_text(
            &mut content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &format!("Page {}", self.page_refs.len()),
        );

        self.page = Some(PageState {
            content,
            content_id,
            y: self.page_h - self.margin - 30.0,
        });
    }

    fn finalize_page(&mut self) {
        if let Some(state) = self.page.take() {
            self.pdf.stream(state.content_id, &state.content.finish());
        }
    }

    /// Make sure `h` points of vertical space are available on the current
    /// page, breaking to a new page if not.
    fn ensure_space(&mut self, h: f32) {
        let fits = self
            .page
            .as_ref()
            .is_some_and(|state| state.y - h >= self.margin);
        if !fits {
            self.start_page();
        }
    }

    /// One line of text at the left margin.
    pub fn text_line(&mut self, text: &str, size: f32) {
        let (x, row_h) = (self.margin, self.row_h);
        self.ensure_space(row_h);
        if let Some(state) = self.page.as_mut() {
            draw_text(&mut state.content, x, state.y + 5.0, size, text);
            state.y -= row_h;
        }
    }

    pub fn heading(&mut self, text: &str) {
        let size = self.header_font_size + 1.0;
        self.text_line(text, size);
    }

    pub fn line(&mut self, text: &str) {
        let size = self.font_size;
        self.text_line(text, size);
    }

    /// Vertical gap of `h` points (ignored at a page break).
    pub fn spacer(&mut self, h: f32) {
        if let Some(state) = self.page.as_mut() {
            state.y -= h;
        }
    }

    /// Table with a shaded header row, repeated on every page it spans.
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let (margin, row_h) = (self.margin, self.row_h);
        let (font_size, header_font_size) = (self.font_size, self.header_font_size);
        let total_w: f32 = col_widths.iter().sum();

        let draw_header = |state: &mut PageState| {
            state.content.save_state();
            state.content.set_fill_rgb(0.85, 0.87, 0.90);
            state.content.rect(margin, state.y, total_w, row_h);
            state.content.fill_nonzero();
            state.content.restore_state();

            draw_row(
                &mut state.content,
                state.y,
                &col_widths,
                margin,
                row_h,
                &header_row,
                header_font_size,
            );
            state.y -= row_h;
        };

        // header + at least one row on the same page
        self.ensure_space(row_h * 2.0);
        if let Some(state) = self.page.as_mut() {
            draw_header(state);
        }

        for (i, row) in rows.iter().enumerate() {
            let at_break = self
                .page
                .as_ref()
                .is_none_or(|state| state.y - row_h < margin);
            if at_break {
                self.start_page();
                if let Some(state) = self.page.as_mut() {
                    draw_header(state);
                }
            }

            let Some(state) = self.page.as_mut() else {
                continue;
            };

            // zebra stripe
            if i % 2 == 0 {
                state.content.save_state();
                state.content.set_fill_rgb(0.96, 0.96, 0.96);
                state.content.rect(margin, state.y, total_w, row_h);
                state.content.fill_nonzero();
                state.content.restore_state();
            }

            draw_row(
                &mut state.content,
                state.y,
                &col_widths,
                margin,
                row_h,
                row,
                font_size,
            );
            state.y -= row_h;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.chars().count() as f32 * 6.2).max(widths[i]);
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

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.page.is_none() && self.page_refs.is_empty() {
            // never emit a document without pages
            self.start_page();
        }
        self.finalize_page();

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

/// The built-in Helvetica font only covers Latin-1-ish glyphs: anything
/// outside printable ASCII is replaced.
fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    let safe = pdf_safe(text);
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(safe.as_bytes()));
    content.end_text();
}

fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

fn draw_row(
    content: &mut Content,
    y: f32,
    col_widths: &[f32],
    x_start: f32,
    row_h: f32,
    row: &[String],
    font_size: f32,
) {
    let mut x = x_start;

    for (text, w) in row.iter().zip(col_widths) {
        draw_text(content, x + 4.0, y + 5.0, font_size, text);
        draw_cell_borders(content, x, y, *w, row_h);
        x += w;
    }
}
