// ABOUTME: Raster of fixed-size cells laid over the pixel canvas.
// ABOUTME: All dashlet coordinates are measured in these cells.

use dash_core::Canvas;

use crate::{LayoutError, Vec2};

/// Largest raster dimension, dashlet coordinate or size (in cells) the engine works with
pub const MAX_EXTENT: i32 = 4096;

/// Largest accepted cell size in pixels
pub const MAX_CELL_SIZE: i32 = 1000;

/// Snap a pixel value to the cell boundary, truncating toward zero
pub fn align_to_grid(px: i32, cell_size: i32) -> i32 {
    (px / cell_size) * cell_size
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    cell_size: i32,
    size: Vec2,
}

impl Raster {
    /// The raster is at least one cell in each direction, even for tiny canvases
    pub fn new(canvas: Canvas, cell_size: i32) -> Result<Self, LayoutError> {
        if cell_size <= 0 || cell_size > MAX_CELL_SIZE {
            return Err(LayoutError::InvalidCellSize(cell_size));
        }
        let cells = Vec2::new(canvas.width, canvas.height).divide(cell_size);
        if cells.x > MAX_EXTENT || cells.y > MAX_EXTENT {
            return Err(LayoutError::CanvasTooLarge {
                width: canvas.width,
                height: canvas.height,
            });
        }
        Ok(Self {
            cell_size,
            size: Vec2::new(cells.x.max(1), cells.y.max(1)),
        })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn align(&self, px: i32) -> i32 {
        align_to_grid(px, self.cell_size)
    }

    /// Pixel extent of the whole raster
    pub fn board(&self) -> Vec2 {
        Vec2::new(self.size.x * self.cell_size, self.size.y * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_truncates_canvas() {
        let raster = Raster::new(Canvas::new(1234, 567), 10).unwrap();
        assert_eq!(raster.size(), Vec2::new(123, 56));
        assert_eq!(raster.board(), Vec2::new(1230, 560));
    }

    #[test]
    fn raster_is_never_empty() {
        let raster = Raster::new(Canvas::new(4, 0), 10).unwrap();
        assert_eq!(raster.size(), Vec2::new(1, 1));
    }

    #[test]
    fn cell_size_must_be_positive() {
        assert_eq!(
            Raster::new(Canvas::new(100, 100), 0),
            Err(LayoutError::InvalidCellSize(0))
        );
    }

    #[test]
    fn oversized_inputs_are_rejected() {
        assert_eq!(
            Raster::new(Canvas::new(100, 100), MAX_CELL_SIZE + 1),
            Err(LayoutError::InvalidCellSize(MAX_CELL_SIZE + 1))
        );
        assert_eq!(
            Raster::new(Canvas::new(i32::MAX, 600), 1),
            Err(LayoutError::CanvasTooLarge {
                width: i32::MAX,
                height: 600,
            })
        );
    }

    #[test]
    fn align_truncates() {
        assert_eq!(align_to_grid(29, 10), 20);
        assert_eq!(align_to_grid(-29, 10), -20);
        assert_eq!(align_to_grid(9, 10), 0);
    }
}
