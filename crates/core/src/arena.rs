//! Arena module - the settled grid of locked cells
//!
//! The arena is a `width x height` grid where each cell holds `0` (empty) or a
//! piece value `1..=7`. Uses a flat row-major buffer sized once at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::EMPTY;

/// The settled grid, stored row-major (`y * width + x`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Arena {
    /// Create an all-empty arena
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build an arena from explicit rows (all rows must have equal length)
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == width),
            "arena rows must all have the same width"
        );
        let cells = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y); `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y); returns false when out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Check if (x, y) is inside the arena and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Borrow row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Every row above `y` moves down by one.
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }
        let width = self.width;
        // Rows 0..y slide down into 1..=y; copy_within handles the overlap.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Flat view of all cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate the non-empty cells as `(x, y, value)`
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != EMPTY)
            .map(move |(i, &v)| ((i % width) as i32, (i / width) as i32, v))
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Copy another arena's contents, reusing this allocation
    pub fn copy_from(&mut self, other: &Arena) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }
}
