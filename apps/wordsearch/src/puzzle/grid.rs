//! Letter grid model.
//!
//! Cells are `Option<char>`: `None` until a word or filler letter is written.
//! The grid remembers every placement so callers can tell word cells from filler.

/// Horizontal location of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub start_column: usize,
    pub len: usize,
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<char>>,
    placements: Vec<Placement>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![None; rows * columns],
            placements: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.cells[row * self.columns + column]
    }

    pub fn set(&mut self, row: usize, column: usize, letter: char) {
        self.cells[row * self.columns + column] = Some(letter);
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Option<char>] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// True if `len` cells starting at `start_column` on `row` fit and are all empty.
    pub fn is_run_free(&self, row: usize, start_column: usize, len: usize) -> bool {
        start_column + len <= self.columns
            && self.row(row)[start_column..start_column + len]
                .iter()
                .all(Option::is_none)
    }

    /// Writes `letters` left to right from `placement` and records it.
    /// Callers check `is_run_free` first.
    pub fn place(&mut self, placement: Placement, letters: &[char]) {
        for (offset, letter) in letters.iter().enumerate() {
            self.set(placement.row, placement.start_column + offset, *letter);
        }
        self.placements.push(placement);
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_cells() == 0
    }
}

#[cfg(test)]
impl Placement {
    /// Returns true if `(row, column)` lies inside this placement's span.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        row == self.row && column >= self.start_column && column < self.start_column + self.len
    }
}

#[cfg(test)]
impl Grid {
    /// Row as a string, with `.` standing in for empty cells.
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().map(|c| c.unwrap_or('.')).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.empty_cells(), 12);
        assert!(!grid.is_complete());
        assert_eq!(grid.row_string(0), "....");
    }

    #[test]
    fn test_place_writes_letters_and_records_span() {
        let mut grid = Grid::new(2, 5);
        let placement = Placement {
            row: 1,
            start_column: 1,
            len: 3,
        };
        grid.place(placement, &['C', 'A', 'T']);
        assert_eq!(grid.row_string(1), ".CAT.");
        assert_eq!(grid.placements(), &[placement]);
        assert!(placement.covers(1, 3));
        assert!(!placement.covers(1, 4));
        assert!(!placement.covers(0, 2));
    }

    #[test]
    fn test_run_free_rejects_occupied_and_out_of_bounds() {
        let mut grid = Grid::new(1, 6);
        grid.set(0, 2, 'X');
        assert!(grid.is_run_free(0, 3, 3));
        assert!(!grid.is_run_free(0, 1, 2), "overlaps the X");
        assert!(!grid.is_run_free(0, 4, 3), "runs past the right edge");
        assert!(grid.is_run_free(0, 0, 0));
    }
}
