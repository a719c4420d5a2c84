//! PDF serialization of a `DocumentLayout`.
//!
//! One content stream per page, base-14 Helvetica with WinAnsi encoding, so no
//! font program is embedded. Layout coordinates (mm, top-left origin) are
//! converted to PDF user space (points, bottom-left origin) here and nowhere else.

use std::io::Write;

use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::layout::font_metrics::{is_winansi, FontMetricTable, PageConfig, MM_PER_PT};
use crate::layout::page::{layout_document, DocumentLayout};
use crate::puzzle::Grid;

const FONT_RESOURCE: Name<'static> = Name(b"F1");
/// Grid border stroke width (0.2 mm).
const BORDER_WIDTH_PT: f32 = 0.567;
const PRODUCER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to write document: {0}")]
    Write(#[from] std::io::Error),
}

/// Lays out and serializes the puzzle, returning the PDF bytes.
pub fn render(
    grid: &Grid,
    words: &[String],
    config: &PageConfig,
    metrics: &FontMetricTable,
) -> Result<Vec<u8>, DocumentError> {
    let mut bytes = Vec::new();
    write_document(grid, words, config, metrics, &mut bytes)?;
    Ok(bytes)
}

/// Lays out the puzzle and writes the PDF into `sink`.
pub fn write_document<W: Write>(
    grid: &Grid,
    words: &[String],
    config: &PageConfig,
    metrics: &FontMetricTable,
    mut sink: W,
) -> Result<(), DocumentError> {
    let layout = layout_document(grid, words, config, metrics);
    let bytes = encode_layout(&layout, metrics);
    debug!(
        pages = layout.pages.len(),
        bytes = bytes.len(),
        "Encoded word search PDF"
    );
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Serializes a finished layout into a complete PDF file.
pub fn encode_layout(layout: &DocumentLayout, metrics: &FontMetricTable) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let font_id = alloc.bump();
    let info_id = alloc.bump();

    let page_ids: Vec<(Ref, Ref)> = layout
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    let width_pt = mm_to_pt(layout.page_width_mm);
    let height_pt = mm_to_pt(layout.page_height_mm);

    for (page_layout, (page_id, content_id)) in layout.pages.iter().zip(&page_ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt));
        page.parent(page_tree_id);
        page.contents(*content_id);
        page.resources().fonts().pair(FONT_RESOURCE, font_id);
        page.finish();

        let mut content = Content::new();

        if !page_layout.cells.is_empty() {
            content.set_line_width(BORDER_WIDTH_PT);
            for cell in &page_layout.cells {
                let size = mm_to_pt(cell.size_mm);
                content.rect(
                    mm_to_pt(cell.x_mm),
                    height_pt - mm_to_pt(cell.y_mm) - size,
                    size,
                    size,
                );
            }
            content.stroke();
        }

        for run in &page_layout.texts {
            content.begin_text();
            content.set_font(FONT_RESOURCE, run.font_size_pt);
            content.next_line(mm_to_pt(run.x_mm), height_pt - mm_to_pt(run.baseline_mm));
            content.show(Str(&to_winansi(&run.text)));
            content.end_text();
        }

        pdf.stream(*content_id, &content.finish());
    }

    pdf.type1_font(font_id)
        .base_font(Name(metrics.base_font.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let now = Utc::now();
    pdf.document_info(info_id)
        .title(TextStr(layout.title))
        .producer(TextStr(PRODUCER))
        .creation_date(
            Date::new(now.year() as u16)
                .month(now.month() as u8)
                .day(now.day() as u8)
                .hour(now.hour() as u8)
                .minute(now.minute() as u8)
                .second(now.second() as u8),
        );

    let file_id = Uuid::new_v4().as_bytes().to_vec();
    pdf.set_file_id((file_id.clone(), file_id));

    pdf.finish()
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Maps text onto WinAnsi bytes. Latin-1 code points map directly; anything
/// the encoding cannot show becomes `?`.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if is_winansi(c) { c as u8 } else { b'?' })
        .collect()
}

/// Word-list numbers read back from a PDF's text, in reading order.
#[cfg(test)]
pub(crate) fn extracted_line_numbers(pdf: &[u8]) -> Vec<usize> {
    let text = pdf_extract::extract_text_from_mem(pdf).expect("PDF text should extract");
    text.split_whitespace()
        .filter_map(|token| token.strip_suffix('.')?.parse().ok())
        .collect()
}
