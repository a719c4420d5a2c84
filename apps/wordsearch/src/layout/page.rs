//! Page layout: turns a filled grid and its word list into positioned page elements.
//!
//! # Layout
//! 1. Grid table: `rows x columns` bordered squares, centered horizontally,
//!    starting at the top margin. Letters centered in each cell.
//! 2. `spacer_rows` blank rows of cell height.
//! 3. Word list: one `"{n}. {word}"` line per slot, flowed by `ColumnFlow`.
//!
//! Coordinates are millimetres from the top-left corner. The PDF writer flips
//! them into points from the bottom-left.

use tracing::debug;

use crate::layout::columns::ColumnFlow;
use crate::layout::font_metrics::{pt_to_mm, FontMetricTable, PageConfig};
use crate::puzzle::Grid;

/// Document title written into the PDF metadata.
pub const DOCUMENT_TITLE: &str = "Word Search";

/// A bordered square of the grid table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_mm: f32,
}

/// A single run of text placed on its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x_mm: f32,
    pub baseline_mm: f32,
    pub font_size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub cells: Vec<CellBox>,
    pub texts: Vec<TextRun>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: &'static str,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub pages: Vec<PageLayout>,
}

/// Lays out the grid table followed by the numbered word list.
pub fn layout_document(
    grid: &Grid,
    words: &[String],
    config: &PageConfig,
    metrics: &FontMetricTable,
) -> DocumentLayout {
    let mut pages = vec![PageLayout::default()];

    let list_top = layout_grid(&mut pages[0], grid, config, metrics);

    let mut flow = ColumnFlow::new(config, list_top);
    let mut state = None;

    for (i, word) in words.iter().enumerate() {
        let slot = flow.next_line();
        if state != Some(slot.state) {
            debug!(line = i + 1, page = slot.page, state = ?slot.state, "Word list column");
            state = Some(slot.state);
        }
        while pages.len() <= slot.page {
            pages.push(PageLayout::default());
        }

        pages[slot.page].texts.push(TextRun {
            x_mm: slot.x_mm + config.cell_padding_mm,
            baseline_mm: baseline(slot.y_mm, config.list_line_height_mm, config.list_font_pt),
            font_size_pt: config.list_font_pt,
            text: format!("{}. {}", i + 1, word),
        });
    }

    DocumentLayout {
        title: DOCUMENT_TITLE,
        page_width_mm: config.page_width_mm,
        page_height_mm: config.page_height_mm,
        pages,
    }
}

/// Draws the grid table into `page` and returns the y where the word list starts.
fn layout_grid(
    page: &mut PageLayout,
    grid: &Grid,
    config: &PageConfig,
    metrics: &FontMetricTable,
) -> f32 {
    let size = config.grid_cell_mm;
    let left = (config.page_width_mm - grid.columns() as f32 * size) / 2.0;
    let mut y = config.margin_mm;

    for row in 0..grid.rows() {
        for (column, cell) in grid.row(row).iter().enumerate() {
            let x = left + column as f32 * size;
            page.cells.push(CellBox {
                x_mm: x,
                y_mm: y,
                size_mm: size,
            });

            if let Some(letter) = cell {
                let text = letter.to_string();
                let width = metrics.measure_mm(&text, config.grid_font_pt);
                page.texts.push(TextRun {
                    x_mm: x + (size - width) / 2.0,
                    baseline_mm: baseline(y, size, config.grid_font_pt),
                    font_size_pt: config.grid_font_pt,
                    text,
                });
            }
        }
        y += size;
    }

    y + f32::from(config.spacer_rows) * size
}

/// Baseline of text vertically centered in a box of `height` starting at `top`.
fn baseline(top: f32, height: f32, font_size_pt: f32) -> f32 {
    top + 0.5 * height + 0.3 * pt_to_mm(font_size_pt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{a4_page_config, HELVETICA};
    use crate::puzzle::generator::generate;
    use crate::puzzle::{WordList, COLUMNS, NUM_WORDS, ROWS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_layout(words: &[String]) -> DocumentLayout {
        let grid = generate(words, ROWS, COLUMNS, &mut StdRng::seed_from_u64(1)).unwrap();
        layout_document(&grid, words, &a4_page_config(), &HELVETICA)
    }

    /// Word-list runs of one page, in drawing order.
    fn list_runs(page: &PageLayout) -> Vec<&TextRun> {
        page.texts.iter().filter(|t| t.font_size_pt == 14.0).collect()
    }

    #[test]
    fn test_grid_table_is_centered() {
        let list = WordList::new(["cat", "dog"]).unwrap();
        let layout = make_layout(list.as_slice());
        let page = &layout.pages[0];

        assert_eq!(page.cells.len(), ROWS * COLUMNS);
        let first = page.cells[0];
        let last = page.cells[ROWS * COLUMNS - 1];
        assert_eq!(first.x_mm, 35.0);
        assert_eq!(first.y_mm, 10.0);
        assert_eq!(last.x_mm + last.size_mm, 175.0);
        assert_eq!(last.y_mm, 120.0);
    }

    #[test]
    fn test_every_cell_has_a_centered_letter() {
        let list = WordList::new(["cat"]).unwrap();
        let layout = make_layout(list.as_slice());
        let page = &layout.pages[0];
        let letters: Vec<&TextRun> = page.texts.iter().filter(|t| t.font_size_pt == 20.0).collect();
        assert_eq!(letters.len(), ROWS * COLUMNS);

        for (cell, run) in page.cells.iter().zip(&letters) {
            let width = HELVETICA.measure_mm(&run.text, 20.0);
            let center = run.x_mm + width / 2.0;
            assert!((center - (cell.x_mm + cell.size_mm / 2.0)).abs() < 1e-3);
            assert!(run.baseline_mm > cell.y_mm && run.baseline_mm < cell.y_mm + cell.size_mm);
        }
    }

    #[test]
    fn test_cat_dog_lists_fourteen_numbered_lines() {
        let list = WordList::new(["cat", "dog"]).unwrap();
        let layout = make_layout(list.as_slice());

        assert_eq!(layout.pages.len(), 1);
        let lines: Vec<&str> = list_runs(&layout.pages[0])
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(lines.len(), NUM_WORDS);
        assert_eq!(lines[0], "1. cat");
        assert_eq!(lines[1], "2. dog");
        for (i, line) in lines.iter().enumerate().skip(2) {
            assert_eq!(*line, format!("{}. ", i + 1));
        }
    }

    #[test]
    fn test_full_list_splits_nine_and_five() {
        let list = WordList::new(Vec::<String>::new()).unwrap();
        let layout = make_layout(list.as_slice());
        let runs = list_runs(&layout.pages[0]);

        assert!(runs[..9].iter().all(|t| t.x_mm == 31.0));
        assert!(runs[9..].iter().all(|t| t.x_mm == 111.0));
        assert_eq!(runs.len() - 9, 5);
        assert_eq!(runs[0].baseline_mm, runs[9].baseline_mm);
    }

    #[test]
    fn test_list_starts_two_rows_below_grid() {
        let list = WordList::new(["cat"]).unwrap();
        let layout = make_layout(list.as_slice());
        let first_line = layout.pages[0]
            .texts
            .iter()
            .find(|t| t.text == "1. cat")
            .unwrap();
        assert_eq!(first_line.x_mm, 31.0);
        // Grid ends at 130 mm, two spacer rows put the list top at 150 mm.
        let expected = 150.0 + 7.0 + 0.3 * pt_to_mm(14.0);
        assert!((first_line.baseline_mm - expected).abs() < 1e-3);
    }

    #[test]
    fn test_long_list_overflows_onto_second_page_in_order() {
        let grid = generate(&[], ROWS, COLUMNS, &mut StdRng::seed_from_u64(1)).unwrap();
        let words: Vec<String> = (0..20).map(|i| format!("word{i}")).collect();
        let layout = layout_document(&grid, &words, &a4_page_config(), &HELVETICA);

        assert_eq!(layout.pages.len(), 2);
        assert_eq!(list_runs(&layout.pages[0]).len(), 18);
        assert_eq!(layout.pages[1].cells.len(), 0);

        let continued: Vec<&str> = layout.pages[1].texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(continued, ["19. word18", "20. word19"]);
        assert_eq!(layout.pages[1].texts[0].x_mm, 111.0);

        let numbers: Vec<usize> = layout
            .pages
            .iter()
            .flat_map(list_runs)
            .map(|t| t.text.split('.').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
    }
}
