// ABOUTME: Geometry for interactive dashboard editing: sizer cycling, anchor changes,
// ABOUTME: dragging and resizing frames on the raster. Event handling stays with the caller.

use dash_core::{Dimension, PixelRect, RelativeLayout};

use crate::coords::calculate_relative_coords;
use crate::{Anchor, Edge, LayoutError, Raster, Vec2};

/// Cycle a size through fixed -> GROW -> MAX -> fixed.
///
/// `last_fixed` remembers the literal size across the cycle so that returning to a
/// fixed size restores it; `effective_cells` is the currently rendered size in cells.
pub fn toggle_sizer(current: Dimension, last_fixed: &mut Option<i32>, effective_cells: i32) -> Dimension {
    match current {
        Dimension::Cells(n) => {
            *last_fixed = Some(n);
            Dimension::Grow
        }
        Dimension::Grow => {
            if last_fixed.is_none() {
                *last_fixed = Some(effective_cells.max(1));
            }
            Dimension::Max
        }
        Dimension::Max => Dimension::Cells(last_fixed.unwrap_or(effective_cells).max(1)),
    }
}

/// Re-express a dashlet relative to another corner, keeping it where it is rendered.
/// Returns `None` when the anchor does not change.
pub fn toggle_anchor(
    layout: &RelativeLayout,
    frame: &PixelRect,
    raster: &Raster,
    anchor: Anchor,
) -> Result<Option<RelativeLayout>, LayoutError> {
    if Anchor::from_position(layout.position)? == anchor {
        return Ok(None);
    }
    calculate_relative_coords(layout, frame, raster, Some(anchor)).map(Some)
}

/// Starting frame for a drag: dynamic dimensions shrink to the minimum size,
/// keeping the anchored edge in place.
pub fn drag_origin(
    frame: &PixelRect,
    layout: &RelativeLayout,
    min_size: Vec2,
    raster: &Raster,
) -> Result<PixelRect, LayoutError> {
    let anchor = Anchor::from_position(layout.position)?;
    let cell = raster.cell_size();

    let shrink = |dimension: Dimension, edge: Edge, pos: i32, size: i32, min: i32| {
        if !dimension.is_dynamic() {
            return (pos, size);
        }
        match edge {
            Edge::Near => (pos, min),
            Edge::Far => (pos + size - min, min),
        }
    };

    let (left, width) = shrink(
        layout.dimensions.width,
        anchor.horizontal(),
        frame.left(),
        frame.width(),
        min_size.x * cell,
    );
    let (top, height) = shrink(
        layout.dimensions.height,
        anchor.vertical(),
        frame.top(),
        frame.height(),
        min_size.y * cell,
    );
    Ok(PixelRect::new(left, top, width, height))
}

/// Move `origin` by the grid-aligned mouse movement, keeping it on the board
pub fn drag_to(origin: &PixelRect, mouse_delta: Vec2, raster: &Raster) -> PixelRect {
    let board = raster.board();
    let clamp = |pos: i32, size: i32, board: i32| {
        if pos < 0 {
            0
        } else if pos + size > board {
            board - size
        } else {
            pos
        }
    };

    let x = origin.left() + raster.align(mouse_delta.x);
    let y = origin.top() + raster.align(mouse_delta.y);
    PixelRect::new(
        clamp(x, origin.width(), board.x),
        clamp(y, origin.height(), board.y),
        origin.width(),
        origin.height(),
    )
}

/// Handle grabbed for resizing: one of the four borders or a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    Corner(Anchor),
}

impl ResizeHandle {
    pub fn horizontal(self) -> Option<Edge> {
        match self {
            ResizeHandle::Left => Some(Edge::Near),
            ResizeHandle::Right => Some(Edge::Far),
            ResizeHandle::Corner(anchor) => Some(anchor.horizontal()),
            ResizeHandle::Top | ResizeHandle::Bottom => None,
        }
    }

    pub fn vertical(self) -> Option<Edge> {
        match self {
            ResizeHandle::Top => Some(Edge::Near),
            ResizeHandle::Bottom => Some(Edge::Far),
            ResizeHandle::Corner(anchor) => Some(anchor.vertical()),
            ResizeHandle::Left | ResizeHandle::Right => None,
        }
    }
}

/// Resize along one axis. Returns the new (position, size); `None` leaves the value as it was.
fn resize_axis(
    edge: Edge,
    start_pos: i32,
    start_size: i32,
    diff: i32,
    board: i32,
    min: i32,
    far_inclusive: bool,
) -> (Option<i32>, i32) {
    match edge {
        Edge::Near => {
            let new_pos = start_pos - diff;
            if new_pos < 0 {
                (Some(0), start_size + start_pos)
            } else if start_size + diff < min {
                (None, min)
            } else {
                (Some(new_pos), start_size + diff)
            }
        }
        Edge::Far => {
            let end = start_pos + start_size - diff;
            let past_board = if far_inclusive { end >= board } else { end > board };
            if past_board {
                (None, board - start_pos)
            } else if start_size - diff < min {
                (None, min)
            } else {
                (None, start_size - diff)
            }
        }
    }
}

/// Frame after moving `handle` by `mouse_delta` since the resize started.
///
/// `start` is the frame when the resize began, `current` the frame of the previous step;
/// values a step does not touch are carried over from `current`.
pub fn resize_to(
    start: &PixelRect,
    current: &PixelRect,
    handle: ResizeHandle,
    mouse_delta: Vec2,
    raster: &Raster,
    min_size: Vec2,
) -> PixelRect {
    let board = raster.board();
    let cell = raster.cell_size();
    // Positive when the edge moves left/up
    let diff = Vec2::new(-raster.align(mouse_delta.x), -raster.align(mouse_delta.y));
    let mut result = *current;

    if let Some(edge) = handle.horizontal() {
        let (left, width) = resize_axis(
            edge,
            start.left(),
            start.width(),
            diff.x,
            board.x,
            min_size.x * cell,
            false,
        );
        if let Some(left) = left {
            result.position.left = left;
        }
        result.dimensions.width = width;
    }

    if let Some(edge) = handle.vertical() {
        let (top, height) = resize_axis(
            edge,
            start.top(),
            start.height(),
            diff.y,
            board.y,
            min_size.y * cell,
            true,
        );
        if let Some(top) = top {
            result.position.top = top;
        }
        result.dimensions.height = height;
    }

    result
}
