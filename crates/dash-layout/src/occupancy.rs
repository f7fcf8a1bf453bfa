// ABOUTME: Sparse map of raster cells claimed during one layout computation.
// ABOUTME: Created per computation and dropped with it.

use std::collections::HashSet;

use crate::CellRect;

#[derive(Debug, Default)]
pub struct Occupancy {
    cells: HashSet<(i32, i32)>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Claim every cell of `rect` unconditionally (no bounds or overlap checks).
    /// Returns how many of those cells were already claimed.
    pub fn mark(&mut self, rect: &CellRect) -> usize {
        rect.cells().filter(|&cell| !self.cells.insert(cell)).count()
    }

    pub fn is_free(&self, rect: &CellRect) -> bool {
        rect.cells().all(|cell| !self.cells.contains(&cell))
    }

    /// Claim `rect` only if none of its cells are taken
    pub fn try_allocate(&mut self, rect: &CellRect) -> bool {
        if !self.is_free(rect) {
            return false;
        }
        self.cells.extend(rect.cells());
        true
    }
}
