// ABOUTME: Cell rectangles used while resolving and growing a layout.
// ABOUTME: Right and bottom edges are exclusive.

use serde::Serialize;

use crate::{Raster, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CellRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// All covered cells, column by column
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (top, bottom) = (self.top, self.bottom);
        (self.left..self.right).flat_map(move |x| (top..bottom).map(move |y| (x, y)))
    }

    /// Number of covered cells
    pub fn area(&self) -> usize {
        (self.width().max(0) as usize) * (self.height().max(0) as usize)
    }

    /// Covered cells lying inside the raster
    pub fn area_within(&self, raster: &Raster) -> usize {
        CellRect::new(
            self.left.max(0),
            self.top.max(0),
            self.right.min(raster.width()),
            self.bottom.min(raster.height()),
        )
        .area()
    }
}

/// A dashlet's current rectangle plus the direction it may still grow in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetRect {
    pub rect: CellRect,
    pub grow_by: Vec2,
}
