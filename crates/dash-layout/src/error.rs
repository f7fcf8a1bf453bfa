// ABOUTME: Error type for layout computations.
// ABOUTME: Contract violations and values far beyond any raster fail; overflowing layouts are reported.

use crate::{Anchor, Axis};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Zero {0} coordinate: positions start at 1 (from left/top) or -1 (from right/bottom)")]
    ZeroCoordinate(Axis),

    #[error("Invalid grid cell size: {0}")]
    InvalidCellSize(i32),

    #[error("Canvas {width}x{height} exceeds the supported raster size")]
    CanvasTooLarge { width: i32, height: i32 },

    #[error("{what} {value} on the {axis} axis is outside the supported range of {max} cells")]
    OutOfRange {
        what: &'static str,
        axis: Axis,
        value: i64,
        max: i32,
    },

    #[error("Invalid minimum size {value} on the {axis} axis: must be at least one cell")]
    InvalidMinSize { axis: Axis, value: i32 },

    #[error("Frame cannot be anchored {anchor:?}: its {axis} coordinate would be {coord}")]
    AnchorMismatch { anchor: Anchor, axis: Axis, coord: i64 },

    #[error("Dashlet {index}: {source}")]
    Dashlet {
        index: usize,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    /// Attach the index of the offending dashlet
    pub fn for_dashlet(self, index: usize) -> Self {
        LayoutError::Dashlet {
            index,
            source: Box::new(self),
        }
    }
}
