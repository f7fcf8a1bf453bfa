// ABOUTME: Integer 2D vector used for raster positions, sizes, and growth directions.
// ABOUTME: Reproduces the legacy truncating division and 1-based to 0-based conversion.

use std::fmt;
use std::ops::Add;

use dash_core::{Dimension, RelativePosition, RelativeSize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Integer division truncating toward zero (never rounding)
    pub fn divide(self, s: i32) -> Self {
        Self::new(self.x / s, self.y / s)
    }

    /// Convert a signed 1-based relative coordinate into a 0-based one.
    /// Negative coordinates count from the far edge: -1 maps to `grid_size`,
    /// which is the exclusive far edge of the dashlet.
    pub fn make_absolute(self, grid_size: Vec2) -> Self {
        Self::new(
            absolute_coord(self.x, grid_size.x),
            absolute_coord(self.y, grid_size.y),
        )
    }

    /// Starting size of a dashlet in raster cells. MAX consumes all space up to the
    /// raster edge regardless of other dashlets, GROW starts at `min_size`.
    pub fn initial_size(size: RelativeSize, position: Vec2, grid: Vec2, min_size: Vec2) -> Self {
        Self::new(
            initial_cells(size.width, position.x, grid.x, min_size.x),
            initial_cells(size.height, position.y, grid.y, min_size.y),
        )
    }
}

fn absolute_coord(coord: i32, grid_size: i32) -> i32 {
    if coord < 0 {
        coord.saturating_add(grid_size).saturating_add(1)
    } else {
        coord.saturating_sub(1)
    }
}

fn initial_cells(dimension: Dimension, position: i32, grid_size: i32, min_size: i32) -> i32 {
    match dimension {
        Dimension::Max => grid_size.saturating_sub(position.saturating_abs()).saturating_add(1),
        Dimension::Grow => min_size,
        Dimension::Cells(n) => n,
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl From<RelativePosition> for Vec2 {
    fn from(p: RelativePosition) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<[i32; 2]> for Vec2 {
    fn from(v: [i32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(Vec2::new(1999, 1005).divide(10), Vec2::new(199, 100));
        assert_eq!(Vec2::new(-15, 9).divide(10), Vec2::new(-1, 0));
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let grid = Vec2::new(10, 10);
        assert_eq!(
            Vec2::new(i32::MIN, i32::MAX).make_absolute(grid),
            Vec2::new(i32::MIN + 11, i32::MAX - 1)
        );
        let size = RelativeSize {
            width: Dimension::Max,
            height: Dimension::Max,
        };
        assert_eq!(
            Vec2::initial_size(size, Vec2::new(i32::MIN, 1), grid, Vec2::new(1, 1)),
            Vec2::new(i32::MIN + 12, 10)
        );
    }

    #[test]
    fn make_absolute_both_edges() {
        let grid = Vec2::new(10, 8);
        assert_eq!(Vec2::new(1, 1).make_absolute(grid), Vec2::new(0, 0));
        assert_eq!(Vec2::new(4, 3).make_absolute(grid), Vec2::new(3, 2));
        assert_eq!(Vec2::new(-1, -1).make_absolute(grid), Vec2::new(10, 8));
        assert_eq!(Vec2::new(-3, -2).make_absolute(grid), Vec2::new(8, 7));
    }

    #[test]
    fn initial_size_per_mode() {
        let grid = Vec2::new(10, 10);
        let min = Vec2::new(2, 3);
        let size = RelativeSize {
            width: Dimension::Max,
            height: Dimension::Grow,
        };
        assert_eq!(
            Vec2::initial_size(size, Vec2::new(3, 1), grid, min),
            Vec2::new(8, 3)
        );

        let size = RelativeSize {
            width: Dimension::Cells(4),
            height: Dimension::Max,
        };
        assert_eq!(
            Vec2::initial_size(size, Vec2::new(1, -2), grid, min),
            Vec2::new(4, 9)
        );
    }

    #[test]
    fn add_and_display() {
        let v = Vec2::new(1, 2) + Vec2::new(3, -4);
        assert_eq!(v, Vec2::new(4, -2));
        assert_eq!(v.to_string(), "4/-2");
    }
}
