// ABOUTME: Pixel geometry shared between the layout engine and its callers.
// ABOUTME: Canvas size plus the position/dimensions rectangles handed to the renderer.

use serde::{Deserialize, Serialize};

/// Pixel size of the dashboard area, as measured by the hosting page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelPosition {
    pub left: i32,
    pub top: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

/// Rectangle in pixels. Serializes as `{position: {left, top}, dimensions: {width, height}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub position: PixelPosition,
    pub dimensions: PixelSize,
}

impl PixelRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            position: PixelPosition { left, top },
            dimensions: PixelSize { width, height },
        }
    }

    pub fn left(&self) -> i32 {
        self.position.left
    }

    pub fn top(&self) -> i32 {
        self.position.top
    }

    pub fn width(&self) -> i32 {
        self.dimensions.width
    }

    pub fn height(&self) -> i32 {
        self.dimensions.height
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.position.left + self.dimensions.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.position.top + self.dimensions.height
    }
}
