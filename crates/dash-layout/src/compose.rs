// ABOUTME: Converts final cell rectangles into pixel frames and padded content areas.
// ABOUTME: Also derives the title bar and edit controls geometry of a dashlet.

use dash_core::{Padding, PixelPosition, PixelRect, SlimThresholds};
use serde::Serialize;

use crate::{CellRect, Raster};

/// Horizontal space reserved next to the title text (9 px title padding plus the gap on the right)
pub const TITLE_WIDTH_ADJUSTMENT: i32 = 17;

/// Titled dashlets never get narrower than this, tiny canvases would otherwise yield negative title widths
pub const MIN_TITLED_WIDTH: i32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleBar {
    pub position: PixelPosition,
    pub width: i32,
}

/// Final pixel layout of one dashlet. Content, title and controls are relative to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbsoluteLayout {
    pub frame: PixelRect,
    pub content: PixelRect,
    pub title: Option<TitleBar>,
    pub controls: PixelRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashletDimensions {
    pub inner: PixelRect,
    pub title_width: Option<i32>,
    pub outer_width: i32,
}

pub fn single_dashlet_dimensions(
    outer_width: i32,
    outer_height: i32,
    padding: &Padding,
    has_title: bool,
) -> DashletDimensions {
    let (outer_width, title_width) = if has_title {
        let width = outer_width.max(MIN_TITLED_WIDTH);
        (width, Some(width - TITLE_WIDTH_ADJUSTMENT))
    } else {
        (outer_width, None)
    };

    let top_padding = padding.top_for(has_title);
    let height = (outer_height - top_padding - padding.bottom).max(0);
    let width = (outer_width - padding.right - padding.left).max(0);

    DashletDimensions {
        inner: PixelRect::new(padding.left, top_padding, width, height),
        title_width,
        outer_width,
    }
}

/// Area covered by the edit controls overlay
fn controls_rect(width: i32, height: i32, padding: &Padding) -> PixelRect {
    PixelRect::new(
        padding.left,
        padding.top_without_title,
        (width - padding.right - padding.left).max(0),
        (height - padding.bottom - padding.top_without_title).max(0),
    )
}

/// Whether the edit controls should use their compact form
pub fn is_slim(width: i32, height: i32, thresholds: &SlimThresholds, cell_size: i32) -> bool {
    width < thresholds.width * cell_size || height < thresholds.height * cell_size
}

pub fn compose(rect: &CellRect, raster: &Raster, padding: &Padding, has_title: bool) -> AbsoluteLayout {
    let cell = raster.cell_size();
    let height = rect.height() * cell;
    let dims = single_dashlet_dimensions(rect.width() * cell, height, padding, has_title);

    AbsoluteLayout {
        frame: PixelRect::new(rect.left * cell, rect.top * cell, dims.outer_width, height),
        content: dims.inner,
        title: dims.title_width.map(|width| TitleBar {
            position: PixelPosition {
                left: padding.left,
                top: padding.top_without_title,
            },
            width,
        }),
        controls: controls_rect(dims.outer_width, height, padding),
    }
}
