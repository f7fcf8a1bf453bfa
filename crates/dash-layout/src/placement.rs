// ABOUTME: Places every dashlet at its anchored starting rectangle.
// ABOUTME: Marks occupied cells without clamping, so oversized dashboards overlap as they always did.

use dash_core::{DashletSpec, Dimension, RelativeLayout};

use crate::{
    Anchor, Axis, CellRect, Edge, LayoutError, Occupancy, Raster, Vec2, WidgetRect, MAX_EXTENT,
};

/// Engine input for one dashlet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    pub layout: RelativeLayout,
    /// Overrides the configured minimum size for GROW dimensions
    pub min_size: Option<Vec2>,
    pub has_title: bool,
}

impl WidgetSpec {
    pub fn new(layout: RelativeLayout) -> Self {
        Self {
            layout,
            min_size: None,
            has_title: false,
        }
    }

    pub fn with_title(mut self, has_title: bool) -> Self {
        self.has_title = has_title;
        self
    }

    pub fn with_min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = Some(min_size);
        self
    }
}

impl From<&DashletSpec> for WidgetSpec {
    fn from(dashlet: &DashletSpec) -> Self {
        Self {
            layout: dashlet.layout,
            min_size: dashlet.min_size.map(Vec2::from),
            has_title: dashlet.has_title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Starting rectangles in input order
    pub rects: Vec<WidgetRect>,
    /// Cells claimed by more than one dashlet
    pub overlap_cells: usize,
    /// Claimed cells lying outside the raster
    pub out_of_bounds_cells: usize,
}

/// Span of a dashlet along one axis. A near anchor starts at `abs`, a far anchor ends there.
fn span(edge: Edge, abs: i32, size: i32) -> (i32, i32) {
    match edge {
        Edge::Near => (abs, abs + size),
        Edge::Far => (abs - size, abs),
    }
}

fn check_extent(what: &'static str, axis: Axis, value: i32) -> Result<(), LayoutError> {
    if value.unsigned_abs() > MAX_EXTENT as u32 {
        return Err(LayoutError::OutOfRange {
            what,
            axis,
            value: value.into(),
            max: MAX_EXTENT,
        });
    }
    Ok(())
}

/// Reject inputs the raster arithmetic cannot represent. Positions and sizes past the
/// raster edge are still accepted as long as they stay within `MAX_EXTENT`.
fn check_widget(widget: &WidgetSpec, min_size: Vec2) -> Result<(), LayoutError> {
    let position = widget.layout.position;
    let dimensions = widget.layout.dimensions;
    for (axis, coord, dimension, min) in [
        (Axis::X, position.x, dimensions.width, min_size.x),
        (Axis::Y, position.y, dimensions.height, min_size.y),
    ] {
        check_extent("Position", axis, coord)?;
        if let Dimension::Cells(n) = dimension {
            check_extent("Size", axis, n)?;
        }
        if min <= 0 {
            return Err(LayoutError::InvalidMinSize { axis, value: min });
        }
        check_extent("Minimum size", axis, min)?;
    }
    Ok(())
}

pub fn place(
    widgets: &[WidgetSpec],
    raster: &Raster,
    default_min_size: Vec2,
    occupancy: &mut Occupancy,
) -> Result<Placement, LayoutError> {
    let mut rects = Vec::with_capacity(widgets.len());
    let mut overlap_cells = 0;
    let mut out_of_bounds_cells = 0;

    for (index, widget) in widgets.iter().enumerate() {
        let anchor = Anchor::from_position(widget.layout.position)
            .map_err(|e| e.for_dashlet(index))?;
        let min_size = widget.min_size.unwrap_or(default_min_size);
        check_widget(widget, min_size).map_err(|e| e.for_dashlet(index))?;

        let rel_position = Vec2::from(widget.layout.position);
        let abs_position = rel_position.make_absolute(raster.size());
        let used_size =
            Vec2::initial_size(widget.layout.dimensions, rel_position, raster.size(), min_size);

        let (left, right) = span(anchor.horizontal(), abs_position.x, used_size.x);
        let (top, bottom) = span(anchor.vertical(), abs_position.y, used_size.y);
        let rect = CellRect::new(left, top, right, bottom);

        overlap_cells += occupancy.mark(&rect);
        out_of_bounds_cells += rect.area() - rect.area_within(raster);

        rects.push(WidgetRect {
            rect,
            grow_by: anchor.grow_by(widget.layout.dimensions),
        });
    }

    if overlap_cells > 0 || out_of_bounds_cells > 0 {
        tracing::warn!(
            "Dashlets do not fit the {} raster: {} overlapping cells, {} cells outside",
            raster.size(),
            overlap_cells,
            out_of_bounds_cells
        );
    }

    Ok(Placement {
        rects,
        overlap_cells,
        out_of_bounds_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::{Canvas, Dimension};

    fn raster_10x10() -> Raster {
        Raster::new(Canvas::new(100, 100), 10).unwrap()
    }

    fn widget(x: i32, y: i32, width: Dimension, height: Dimension) -> WidgetSpec {
        WidgetSpec::new(RelativeLayout::new(x, y, width, height))
    }

    #[test]
    fn bottom_right_anchor_ends_at_raster_edge() {
        let mut occupancy = Occupancy::new();
        let placement = place(
            &[widget(-1, -1, Dimension::Cells(2), Dimension::Cells(2))],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap();

        assert_eq!(placement.rects[0].rect, CellRect::new(8, 8, 10, 10));
        assert_eq!(placement.rects[0].grow_by, Vec2::new(0, 0));
        assert_eq!(occupancy.len(), 4);
    }

    #[test]
    fn grow_starts_at_minimum() {
        let mut occupancy = Occupancy::new();
        let placement = place(
            &[widget(2, -3, Dimension::Grow, Dimension::Grow)],
            &raster_10x10(),
            Vec2::new(3, 2),
            &mut occupancy,
        )
        .unwrap();

        let placed = placement.rects[0];
        assert_eq!(placed.rect, CellRect::new(1, 6, 4, 8));
        assert_eq!(placed.grow_by, Vec2::new(1, -1));
    }

    #[test]
    fn per_widget_min_size_wins() {
        let mut occupancy = Occupancy::new();
        let spec = widget(1, 1, Dimension::Grow, Dimension::Cells(1)).with_min_size(Vec2::new(5, 5));
        let placement = place(&[spec], &raster_10x10(), Vec2::new(1, 1), &mut occupancy).unwrap();
        assert_eq!(placement.rects[0].rect.width(), 5);
        assert_eq!(placement.rects[0].rect.height(), 1);
    }

    #[test]
    fn max_reaches_far_edge() {
        let mut occupancy = Occupancy::new();
        let placement = place(
            &[widget(3, -2, Dimension::Max, Dimension::Max)],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap();
        // x: from column 2 to the right edge, y: from the top edge up to row 9 (exclusive)
        assert_eq!(placement.rects[0].rect, CellRect::new(2, 0, 10, 9));
    }

    #[test]
    fn overflow_is_counted_not_rejected() {
        let mut occupancy = Occupancy::new();
        let placement = place(
            &[
                widget(1, 1, Dimension::Cells(8), Dimension::Cells(2)),
                widget(5, 1, Dimension::Cells(8), Dimension::Cells(2)),
            ],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap();

        assert_eq!(placement.rects[1].rect, CellRect::new(4, 0, 12, 2));
        assert_eq!(placement.overlap_cells, 8);
        assert_eq!(placement.out_of_bounds_cells, 4);
        assert!(occupancy.is_occupied(11, 1));
    }

    #[test]
    fn far_out_positions_and_sizes_fail() {
        let mut occupancy = Occupancy::new();
        let err = place(
            &[widget(2, 1, Dimension::Cells(i32::MAX), Dimension::Cells(1))],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::OutOfRange {
                what: "Size",
                axis: Axis::X,
                value: i32::MAX.into(),
                max: MAX_EXTENT,
            }
            .for_dashlet(0)
        );

        let err = place(
            &[widget(1, i32::MIN, Dimension::Cells(1), Dimension::Cells(1))],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Dashlet { index: 0, ref source }
                if matches!(**source, LayoutError::OutOfRange { what: "Position", axis: Axis::Y, .. })
        ));
        assert!(occupancy.is_empty());
    }

    #[test]
    fn overflow_within_limits_is_still_placed() {
        let mut occupancy = Occupancy::new();
        let placement = place(
            &[widget(-MAX_EXTENT, 1, Dimension::Cells(MAX_EXTENT), Dimension::Cells(1))],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap();
        assert_eq!(
            placement.rects[0].rect,
            CellRect::new(11 - 2 * MAX_EXTENT, 0, 11 - MAX_EXTENT, 1)
        );
        assert_eq!(placement.out_of_bounds_cells, MAX_EXTENT as usize);
    }

    #[test]
    fn non_positive_min_size_is_rejected() {
        let mut occupancy = Occupancy::new();
        let spec = widget(1, 1, Dimension::Grow, Dimension::Grow).with_min_size(Vec2::new(3, 0));
        let err = place(&[spec], &raster_10x10(), Vec2::new(1, 1), &mut occupancy).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidMinSize {
                axis: Axis::Y,
                value: 0,
            }
            .for_dashlet(0)
        );
    }

    #[test]
    fn zero_position_names_dashlet() {
        let mut occupancy = Occupancy::new();
        let err = place(
            &[
                widget(1, 1, Dimension::Cells(1), Dimension::Cells(1)),
                widget(1, 0, Dimension::Cells(1), Dimension::Cells(1)),
            ],
            &raster_10x10(),
            Vec2::new(1, 1),
            &mut occupancy,
        )
        .unwrap_err();

        assert_eq!(
            err,
            LayoutError::ZeroCoordinate(crate::Axis::Y).for_dashlet(1)
        );
        assert_eq!(err.to_string().split(':').next(), Some("Dashlet 1"));
    }
}
