pub mod layout;

use chrono::{DateTime, Utc};
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::{self, BOLD_PDF_NAME, REGULAR_PDF_NAME};
use crate::report;

use layout::{Cursor, DrawSink, LayoutPolicy, TextStyle};

/// Fallback ascender ratio for the base fonts; the line box top sits this
/// fraction of the font size above the baseline.
const ASCENDER_RATIO: f32 = 0.75;

/// Footer baselines, in points above the bottom page edge.
const FOOTER_LINE_Y: f32 = 34.0;
const DISCLAIMER_LINE_Y: f32 = 22.0;
const FOOTER_SIZE: f32 = 8.0;

const DISCLAIMER: &str =
    "This document is generated automatically and does not constitute a formal quotation.";

/// Knobs for one render call. `generated_at` pins the footer timestamp — the
/// only time-varying bytes in the output — so callers that need reproducible
/// documents can get them.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub policy: LayoutPolicy,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Render a raw report into a finished PDF byte stream.
///
/// The first three raw lines are drawn as the document header, straight from
/// the unclassified text. The classified blocks follow in order, then a
/// centered attribution-and-disclaimer footer on the final page. Fails only
/// when classification yields no blocks at all; anything else degrades
/// gracefully.
pub fn render(raw: &str, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    let blocks = report::classify(raw);
    if blocks.is_empty() {
        return Err(Error::EmptyReport);
    }

    let policy = &options.policy;
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let (regular_ref, bold_ref) = fonts::register_base_fonts(&mut pdf, &mut alloc);

    // Phase 1: lay content out into per-page content streams.
    let mut sink = PdfSink::new(policy);
    let mut cursor = Cursor::new(policy);

    for (i, line) in raw.lines().take(3).enumerate() {
        let style = if i == 0 { TextStyle::Emphasis } else { TextStyle::Body };
        let y = cursor.line(policy.line_height, &mut sink);
        sink.text(policy.margin, y, style, line);
    }
    cursor.gap(policy.block_gap_lines * policy.line_height);

    for block in &blocks {
        layout::place(block, &mut cursor, &mut sink, policy);
    }

    let generated_at = options.generated_at.unwrap_or_else(Utc::now);
    sink.draw_footer(generated_at);

    log::debug!(
        "laid out {} blocks across {} pages",
        blocks.len(),
        cursor.page_index + 1,
    );

    // Phase 2: page tree and compressed content streams.
    let pages = sink.finish();
    let n = pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, content) in pages.into_iter().enumerate() {
        let raw_stream = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw_stream, 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, policy.page_width, policy.page_height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut font_res = resources.fonts();
        font_res.pair(Name(REGULAR_PDF_NAME), regular_ref);
        font_res.pair(Name(BOLD_PDF_NAME), bold_ref);
    }

    Ok(pdf.finish())
}

/// `DrawSink` backed by pdf-writer content streams, one per page. Layout
/// coordinates count down from the page top; PDF user space counts up from
/// the bottom, so `text` flips the axis and drops to the baseline.
struct PdfSink<'a> {
    policy: &'a LayoutPolicy,
    pages: Vec<Content>,
}

impl<'a> PdfSink<'a> {
    fn new(policy: &'a LayoutPolicy) -> Self {
        Self {
            policy,
            pages: vec![Content::new()],
        }
    }

    fn current(&mut self) -> &mut Content {
        self.pages.last_mut().expect("sink always has an open page")
    }

    fn show_text(&mut self, x: f32, baseline: f32, font: &[u8], size: f32, text: &str) {
        let bytes = fonts::to_winansi_bytes(text);
        self.current()
            .begin_text()
            .set_font(Name(font), size)
            .next_line(x, baseline)
            .show(Str(&bytes))
            .end_text();
    }

    /// Two centered lines near the bottom edge of the final page, drawn
    /// outside the cursor flow at fixed positions.
    fn draw_footer(&mut self, generated_at: DateTime<Utc>) {
        let width = self.policy.page_width;
        let attribution = format!(
            "Generated by specsheet-pdf on {}",
            generated_at.format("%Y-%m-%d %H:%M UTC"),
        );

        let x = (width - fonts::text_width(&attribution, FOOTER_SIZE, false)) / 2.0;
        self.show_text(x, FOOTER_LINE_Y, REGULAR_PDF_NAME, FOOTER_SIZE, &attribution);

        let x = (width - fonts::text_width(DISCLAIMER, FOOTER_SIZE, false)) / 2.0;
        self.show_text(x, DISCLAIMER_LINE_Y, REGULAR_PDF_NAME, FOOTER_SIZE, DISCLAIMER);
    }

    fn finish(self) -> Vec<Content> {
        self.pages
    }
}

impl DrawSink for PdfSink<'_> {
    fn start_page(&mut self) {
        self.pages.push(Content::new());
    }

    fn text(&mut self, x: f32, y: f32, style: TextStyle, text: &str) {
        let (font, size) = match style {
            TextStyle::Emphasis => (BOLD_PDF_NAME, self.policy.emphasis_size),
            TextStyle::Body => (REGULAR_PDF_NAME, self.policy.body_size),
        };
        let baseline = self.policy.page_height - y - size * ASCENDER_RATIO;
        self.show_text(x, baseline, font, size, text);
    }
}
