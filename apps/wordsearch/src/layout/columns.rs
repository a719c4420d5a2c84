//! Word-list column flow.
//!
//! # Break rules
//! - The list starts in `FirstColumn`, directly below the grid.
//! - The first overflow moves to `SecondColumn` on the same page, back at the
//!   y position the list started from.
//! - Any later overflow starts a new physical page (`NewPage`); lines resume at
//!   the top margin and keep the current column's x position.

use crate::layout::font_metrics::PageConfig;

/// Where the word list is currently flowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    FirstColumn,
    SecondColumn,
    NewPage,
}

impl ColumnState {
    /// State entered when the next line does not fit in the current one.
    pub fn on_overflow(self) -> ColumnState {
        match self {
            ColumnState::FirstColumn => ColumnState::SecondColumn,
            ColumnState::SecondColumn | ColumnState::NewPage => ColumnState::NewPage,
        }
    }
}

/// Position assigned to one word-list line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSlot {
    /// Zero-based page index.
    pub page: usize,
    pub state: ColumnState,
    pub x_mm: f32,
    /// Top of the line box.
    pub y_mm: f32,
}

/// Cursor that hands out line positions and applies the break rules.
#[derive(Debug, Clone)]
pub struct ColumnFlow<'a> {
    config: &'a PageConfig,
    state: ColumnState,
    page: usize,
    x_mm: f32,
    y_mm: f32,
    list_top_mm: f32,
}

impl<'a> ColumnFlow<'a> {
    /// Starts the list on page 0 at `list_top_mm`, in the first column.
    pub fn new(config: &'a PageConfig, list_top_mm: f32) -> Self {
        ColumnFlow {
            config,
            state: ColumnState::FirstColumn,
            page: 0,
            x_mm: config.list_left_mm,
            y_mm: list_top_mm,
            list_top_mm,
        }
    }

    /// Returns the slot for the next line and advances past it.
    pub fn next_line(&mut self) -> LineSlot {
        let line_height = self.config.list_line_height_mm;

        if self.y_mm + line_height > self.config.break_trigger_mm() {
            self.state = self.state.on_overflow();
            if self.state == ColumnState::SecondColumn {
                self.x_mm = self.config.column_origin_mm + self.config.column_width_mm;
                self.y_mm = self.list_top_mm;
            } else {
                self.page += 1;
                self.y_mm = self.config.margin_mm;
            }
        }

        let slot = LineSlot {
            page: self.page,
            state: self.state,
            x_mm: self.x_mm,
            y_mm: self.y_mm,
        };
        self.y_mm += line_height;
        slot
    }
}
