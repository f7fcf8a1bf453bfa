// ABOUTME: Relative grid layout engine for dashboards.
// ABOUTME: Turns anchored MAX/GROW dashlet layouts into pixel rectangles and back.

mod anchor;
mod compose;
mod coords;
mod edit;
mod engine;
mod error;
mod growth;
mod occupancy;
mod placement;
mod raster;
mod rect;
mod vector;

pub use anchor::{Anchor, Edge};
pub use compose::{
    compose, is_slim, single_dashlet_dimensions, AbsoluteLayout, DashletDimensions, TitleBar,
    MIN_TITLED_WIDTH, TITLE_WIDTH_ADJUSTMENT,
};
pub use coords::{calculate_relative_coords, to_relative};
pub use edit::{drag_origin, drag_to, resize_to, toggle_anchor, toggle_sizer, ResizeHandle};
pub use engine::{compute_dashboard, compute_layout, LayoutReport};
pub use error::LayoutError;
pub use growth::expand;
pub use occupancy::Occupancy;
pub use placement::{place, Placement, WidgetSpec};
pub use raster::{align_to_grid, Raster, MAX_CELL_SIZE, MAX_EXTENT};
pub use rect::{CellRect, WidgetRect};
pub use vector::{Axis, Vec2};
