// ABOUTME: Shared types and configuration for dashgrid.
// ABOUTME: Defines pixel geometry, relative dashlet layouts, padding, and config file handling.

pub mod config;
pub mod dashboard;
pub mod geometry;
pub mod padding;
pub mod relative;

pub use config::{ConfigError, LayoutConfig, SlimThresholds};
pub use dashboard::{DashboardError, DashboardSet, DashboardSpec, DashletSpec};
pub use geometry::{Canvas, PixelPosition, PixelRect, PixelSize};
pub use padding::Padding;
pub use relative::{Dimension, DimensionError, RelativeLayout, RelativePosition, RelativeSize};
