// ABOUTME: Persisted relative dashlet layout representation.
// ABOUTME: Signed 1-based anchored positions and literal/MAX/GROW sizes.

use serde::{Deserialize, Deserializer, Serialize};

/// Size of a dashlet along one axis.
///
/// Persisted as a plain integer: a positive cell count, `-1` for [`Dimension::Max`]
/// or `0` for [`Dimension::Grow`]. `Cells` must hold a positive count; use
/// [`Dimension::cells`] for values that are not known to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Dimension {
    /// Fixed number of raster cells
    Cells(i32),
    /// Extend up to the raster edge, regardless of other dashlets
    Max,
    /// Start at the minimum size and take free space as it becomes available
    Grow,
}

impl Dimension {
    pub const MAX_SENTINEL: i32 = -1;
    pub const GROW_SENTINEL: i32 = 0;

    /// Checked literal size
    pub fn cells(n: i32) -> Result<Self, DimensionError> {
        if n > 0 {
            Ok(Dimension::Cells(n))
        } else {
            Err(DimensionError::Invalid(n))
        }
    }

    /// MAX and GROW are dynamic, their effective size depends on the raster
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Dimension::Max | Dimension::Grow)
    }

    pub fn is_grow(&self) -> bool {
        matches!(self, Dimension::Grow)
    }

    pub fn fixed_cells(&self) -> Option<i32> {
        match self {
            Dimension::Cells(n) => Some(*n),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Invalid dashlet size {0}: expected a positive cell count, -1 (MAX) or 0 (GROW)")]
    Invalid(i32),
}

impl TryFrom<i32> for Dimension {
    type Error = DimensionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            Self::MAX_SENTINEL => Ok(Dimension::Max),
            Self::GROW_SENTINEL => Ok(Dimension::Grow),
            n => Dimension::cells(n),
        }
    }
}

impl From<Dimension> for i32 {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Cells(n) => {
                debug_assert!(n > 0, "literal size {n} would persist as MAX or GROW");
                n
            }
            Dimension::Max => Dimension::MAX_SENTINEL,
            Dimension::Grow => Dimension::GROW_SENTINEL,
        }
    }
}

/// Signed, 1-based raster position. Positive values count from the left/top edge
/// starting at 1, negative values from the right/bottom edge starting at -1.
/// Zero is not a valid coordinate. Missing or `null` components load as 0 and are
/// rejected when the dashboard is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativePosition {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub x: i32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub y: i32,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeSize {
    pub width: Dimension,
    pub height: Dimension,
}

/// A dashlet's layout as stored with the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeLayout {
    pub position: RelativePosition,
    pub dimensions: RelativeSize,
}

impl RelativeLayout {
    pub const fn new(x: i32, y: i32, width: Dimension, height: Dimension) -> Self {
        Self {
            position: RelativePosition { x, y },
            dimensions: RelativeSize { width, height },
        }
    }
}
