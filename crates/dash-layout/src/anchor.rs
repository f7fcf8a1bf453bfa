// ABOUTME: Anchor corner of a dashlet, derived once from the sign of its relative position.
// ABOUTME: Decides which raster edge a dashlet is measured from and where GROW expands.

use dash_core::{Dimension, RelativePosition, RelativeSize};

use crate::{Axis, LayoutError, Vec2};

/// Which edge of an axis a dashlet is fixed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left or top
    Near,
    /// Right or bottom
    Far,
}

impl Edge {
    fn from_coord(coord: i32, axis: Axis) -> Result<Self, LayoutError> {
        match coord {
            0 => Err(LayoutError::ZeroCoordinate(axis)),
            c if c > 0 => Ok(Edge::Near),
            _ => Ok(Edge::Far),
        }
    }

    /// Growth direction away from this edge: +1 toward right/bottom, -1 toward left/top
    pub fn direction(self) -> i32 {
        match self {
            Edge::Near => 1,
            Edge::Far => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Anchor {
    pub fn all() -> &'static [Anchor] {
        &[
            Anchor::TopLeft,
            Anchor::TopRight,
            Anchor::BottomRight,
            Anchor::BottomLeft,
        ]
    }

    pub fn from_edges(horizontal: Edge, vertical: Edge) -> Self {
        match (horizontal, vertical) {
            (Edge::Near, Edge::Near) => Anchor::TopLeft,
            (Edge::Far, Edge::Near) => Anchor::TopRight,
            (Edge::Far, Edge::Far) => Anchor::BottomRight,
            (Edge::Near, Edge::Far) => Anchor::BottomLeft,
        }
    }

    /// Fails for a zero coordinate on either axis
    pub fn from_position(position: RelativePosition) -> Result<Self, LayoutError> {
        Ok(Self::from_edges(
            Edge::from_coord(position.x, Axis::X)?,
            Edge::from_coord(position.y, Axis::Y)?,
        ))
    }

    pub fn horizontal(self) -> Edge {
        match self {
            Anchor::TopLeft | Anchor::BottomLeft => Edge::Near,
            Anchor::TopRight | Anchor::BottomRight => Edge::Far,
        }
    }

    pub fn vertical(self) -> Edge {
        match self {
            Anchor::TopLeft | Anchor::TopRight => Edge::Near,
            Anchor::BottomLeft | Anchor::BottomRight => Edge::Far,
        }
    }

    pub fn edge(self, axis: Axis) -> Edge {
        match axis {
            Axis::X => self.horizontal(),
            Axis::Y => self.vertical(),
        }
    }

    /// Per axis: 0 for fixed and MAX sizes, otherwise the direction GROW expands in
    pub fn grow_by(self, size: RelativeSize) -> Vec2 {
        let grow = |dimension: Dimension, edge: Edge| {
            if dimension.is_grow() {
                edge.direction()
            } else {
                0
            }
        };
        Vec2::new(
            grow(size.width, self.horizontal()),
            grow(size.height, self.vertical()),
        )
    }
}
