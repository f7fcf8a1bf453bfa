// ABOUTME: Converts an interactively placed pixel frame back into the persisted relative layout.
// ABOUTME: Inverse of the anchored placement for dashlets that do not touch the raster edges.

use dash_core::{Dimension, PixelRect, RelativeLayout, RelativePosition, RelativeSize};

use crate::{Anchor, Axis, Edge, LayoutError, Raster, Vec2, MAX_EXTENT};

/// The coordinate must keep the sign of the requested edge: positive from the near
/// edge, negative from the far edge.
fn relative_coord(
    anchor: Anchor,
    axis: Axis,
    position: i32,
    size: i32,
    raster_size: i32,
) -> Result<i32, LayoutError> {
    let edge = anchor.edge(axis);
    let offset = match edge {
        Edge::Near => i64::from(position),
        Edge::Far => i64::from(position) + i64::from(size) - (i64::from(raster_size) + 2),
    };
    let coord = offset + 1;

    let matches_edge = match edge {
        Edge::Near => coord > 0,
        Edge::Far => coord < 0,
    };
    if !matches_edge {
        return Err(LayoutError::AnchorMismatch { anchor, axis, coord });
    }
    let out_of_range = || LayoutError::OutOfRange {
        what: "Position",
        axis,
        value: coord,
        max: MAX_EXTENT,
    };
    if coord.unsigned_abs() > u64::from(MAX_EXTENT.unsigned_abs()) {
        return Err(out_of_range());
    }
    i32::try_from(coord).map_err(|_| out_of_range())
}

/// Snap `frame` to the raster and express it relative to `anchor`.
/// Returns the relative position together with the frame size in cells.
///
/// Fails when the frame sticks out past the anchored edge, since the coordinate could
/// not carry that anchor.
pub fn to_relative(
    frame: &PixelRect,
    raster: &Raster,
    anchor: Anchor,
) -> Result<(RelativePosition, Vec2), LayoutError> {
    let cell = raster.cell_size();
    let position = Vec2::new(raster.align(frame.left()), raster.align(frame.top())).divide(cell);
    let size = Vec2::new(raster.align(frame.width()), raster.align(frame.height())).divide(cell);

    let relative = RelativePosition {
        x: relative_coord(anchor, Axis::X, position.x, size.x, raster.width())?,
        y: relative_coord(anchor, Axis::Y, position.y, size.y, raster.height())?,
    };
    Ok((relative, size))
}

/// Recompute a dashlet's relative layout from its current frame.
///
/// Fixed sizes are replaced by the frame's size in cells, MAX and GROW are kept.
/// Without an explicit anchor the dashlet keeps its current one.
pub fn calculate_relative_coords(
    layout: &RelativeLayout,
    frame: &PixelRect,
    raster: &Raster,
    anchor: Option<Anchor>,
) -> Result<RelativeLayout, LayoutError> {
    let anchor = match anchor {
        Some(anchor) => anchor,
        None => Anchor::from_position(layout.position)?,
    };
    let (position, size) = to_relative(frame, raster, anchor)?;

    // A zero literal would read back as GROW
    let fixed = |current: Dimension, cells: i32| {
        if current.is_dynamic() {
            current
        } else {
            Dimension::Cells(cells.max(1))
        }
    };

    Ok(RelativeLayout {
        position,
        dimensions: RelativeSize {
            width: fixed(layout.dimensions.width, size.x),
            height: fixed(layout.dimensions.height, size.y),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::Canvas;

    fn raster() -> Raster {
        Raster::new(Canvas::new(1000, 600), 10).unwrap()
    }

    #[test]
    fn top_left_is_one_based() {
        let (position, size) = to_relative(&PixelRect::new(0, 0, 120, 50), &raster(), Anchor::TopLeft).unwrap();
        assert_eq!(position, RelativePosition { x: 1, y: 1 });
        assert_eq!(size, Vec2::new(12, 5));
    }

    #[test]
    fn far_edges_become_negative() {
        // Frame flush with the bottom-right corner of a 100x60 raster
        let frame = PixelRect::new(880, 550, 120, 50);
        let (position, _) = to_relative(&frame, &raster(), Anchor::BottomRight).unwrap();
        assert_eq!(position, RelativePosition { x: -1, y: -1 });

        let (position, _) = to_relative(&frame, &raster(), Anchor::TopRight).unwrap();
        assert_eq!(position, RelativePosition { x: -1, y: 56 });
    }

    #[test]
    fn unaligned_frames_are_truncated() {
        let frame = PixelRect::new(37, 12, 129, 58);
        let (position, size) = to_relative(&frame, &raster(), Anchor::TopLeft).unwrap();
        assert_eq!(position, RelativePosition { x: 4, y: 2 });
        assert_eq!(size, Vec2::new(12, 5));
    }

    #[test]
    fn dynamic_sizes_survive() {
        let layout = RelativeLayout::new(1, 1, Dimension::Grow, Dimension::Cells(3));
        let updated = calculate_relative_coords(
            &layout,
            &PixelRect::new(100, 200, 300, 70),
            &raster(),
            None,
        )
        .unwrap();
        assert_eq!(
            updated,
            RelativeLayout::new(11, 21, Dimension::Grow, Dimension::Cells(7))
        );
    }

    #[test]
    fn explicit_anchor_overrides_current() {
        let layout = RelativeLayout::new(11, 21, Dimension::Cells(30), Dimension::Cells(7));
        let updated = calculate_relative_coords(
            &layout,
            &PixelRect::new(100, 200, 300, 70),
            &raster(),
            Some(Anchor::BottomRight),
        )
        .unwrap();
        // right edge at column 40 of 100, bottom edge at row 27 of 60
        assert_eq!(updated.position, RelativePosition { x: -61, y: -34 });
    }

    #[test]
    fn frame_past_the_anchored_edge_fails() {
        // Left edge one cell past the raster: no positive x can describe it
        let frame = PixelRect::new(-10, 0, 120, 50);
        assert_eq!(
            to_relative(&frame, &raster(), Anchor::TopLeft),
            Err(LayoutError::AnchorMismatch {
                anchor: Anchor::TopLeft,
                axis: Axis::X,
                coord: 0,
            })
        );

        // Bottom edge one cell past the raster: the far coordinate would be zero
        let frame = PixelRect::new(0, 560, 120, 50);
        assert_eq!(
            to_relative(&frame, &raster(), Anchor::BottomLeft),
            Err(LayoutError::AnchorMismatch {
                anchor: Anchor::BottomLeft,
                axis: Axis::Y,
                coord: 0,
            })
        );
    }

    #[test]
    fn frames_far_outside_the_raster_fail() {
        let frame = PixelRect::new(i32::MAX - 100, 0, i32::MAX, 50);
        assert!(matches!(
            to_relative(&frame, &raster(), Anchor::TopLeft),
            Err(LayoutError::OutOfRange { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn zero_position_without_anchor_fails() {
        let layout = RelativeLayout::new(0, 1, Dimension::Cells(3), Dimension::Cells(3));
        assert!(calculate_relative_coords(&layout, &PixelRect::default(), &raster(), None).is_err());
    }
}
