// ABOUTME: Layout computation entry point.
// ABOUTME: Rasterizes the canvas, places and grows dashlets, and composes their pixel layouts.

use dash_core::{Canvas, DashboardSpec, LayoutConfig};
use serde::Serialize;

use crate::compose::{compose, AbsoluteLayout};
use crate::growth::expand;
use crate::placement::{place, WidgetSpec};
use crate::{CellRect, LayoutError, Occupancy, Raster, Vec2};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    /// Raster size in cells
    pub raster: Vec2,
    /// One entry per dashlet, in input order
    pub dashlets: Vec<AbsoluteLayout>,
    /// Final cell rectangles, in input order
    pub cells: Vec<CellRect>,
    /// Cells claimed twice while placing, non-zero when the dashboard does not fit
    pub overlap_cells: usize,
    pub out_of_bounds_cells: usize,
    pub rounds: usize,
}

pub fn compute_layout(
    widgets: &[WidgetSpec],
    canvas: Canvas,
    config: &LayoutConfig,
) -> Result<LayoutReport, LayoutError> {
    let raster = Raster::new(canvas, config.grid_size)?;
    let mut occupancy = Occupancy::new();

    let placement = place(
        widgets,
        &raster,
        Vec2::from(config.dashlet_min_size),
        &mut occupancy,
    )?;
    let mut rects = placement.rects;
    let rounds = expand(&mut rects, &raster, &mut occupancy);

    let dashlets = rects
        .iter()
        .zip(widgets)
        .map(|(placed, widget)| {
            compose(&placed.rect, &raster, &config.dashlet_padding, widget.has_title)
        })
        .collect();

    tracing::debug!(
        "Laid out {} dashlets on a {} raster ({} cells occupied)",
        widgets.len(),
        raster.size(),
        occupancy.len()
    );

    Ok(LayoutReport {
        raster: raster.size(),
        dashlets,
        cells: rects.iter().map(|placed| placed.rect).collect(),
        overlap_cells: placement.overlap_cells,
        out_of_bounds_cells: placement.out_of_bounds_cells,
        rounds,
    })
}

/// Lay out all dashlets of a dashboard document
pub fn compute_dashboard(
    dashboard: &DashboardSpec,
    canvas: Canvas,
    config: &LayoutConfig,
) -> Result<LayoutReport, LayoutError> {
    let widgets: Vec<WidgetSpec> = dashboard.dashlets.iter().map(WidgetSpec::from).collect();
    compute_layout(&widgets, canvas, config)
}
