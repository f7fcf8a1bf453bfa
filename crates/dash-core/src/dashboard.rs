// ABOUTME: Dashboard documents as delivered by the dashboard API.
// ABOUTME: Named dashboards holding ordered dashlet layouts, loaded from and saved to JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::RelativeLayout;

/// A single dashlet entry of a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashletSpec {
    #[serde(flatten)]
    pub layout: RelativeLayout,

    /// Whether the dashlet renders a title bar above its content
    #[serde(default)]
    pub has_title: bool,

    /// Per-dashlet minimum size (columns, rows), overriding the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<[i32; 2]>,
}

impl DashletSpec {
    pub fn new(layout: RelativeLayout, has_title: bool) -> Self {
        Self {
            layout,
            has_title,
            min_size: None,
        }
    }
}

/// One dashboard. Dashlet order matters: earlier dashlets win contested space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSpec {
    #[serde(default)]
    pub title: String,
    pub dashlets: Vec<DashletSpec>,
}

impl DashboardSpec {
    pub fn dashlet_mut(&mut self, index: usize) -> Result<&mut DashletSpec, DashboardError> {
        let count = self.dashlets.len();
        self.dashlets
            .get_mut(index)
            .ok_or(DashboardError::DashletNotFound { index, count })
    }

    /// Per-dashlet minimum sizes must be at least one cell in each direction
    pub fn validate(&self) -> Result<(), DashboardError> {
        for (index, dashlet) in self.dashlets.iter().enumerate() {
            if let Some(min_size) = dashlet.min_size {
                if min_size.iter().any(|&cells| cells <= 0) {
                    return Err(DashboardError::InvalidMinSize { index, min_size });
                }
            }
        }
        Ok(())
    }

    /// Write back a relative layout, e.g. one produced after an interactive resize
    pub fn update_layout(
        &mut self,
        index: usize,
        layout: RelativeLayout,
    ) -> Result<(), DashboardError> {
        self.dashlet_mut(index)?.layout = layout;
        Ok(())
    }
}

/// All dashboards of a document, keyed by name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSet {
    pub dashboards: BTreeMap<String, DashboardSpec>,
}

impl DashboardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, dashboard: DashboardSpec) {
        self.dashboards.insert(name.into(), dashboard);
    }

    pub fn get(&self, name: &str) -> Result<&DashboardSpec, DashboardError> {
        self.dashboards
            .get(name)
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut DashboardSpec, DashboardError> {
        self.dashboards
            .get_mut(name)
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let set: Self = serde_json::from_str(json)?;
        for dashboard in set.dashboards.values() {
            dashboard.validate()?;
        }
        Ok(set)
    }

    /// Load a dashboard document from disk
    pub fn load(path: &std::path::Path) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save the document to disk as pretty-printed JSON
    pub fn save(&self, path: &std::path::Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dashboard not found: {0}")]
    NotFound(String),

    #[error("Dashlet {index} not found (dashboard has {count} dashlets)")]
    DashletNotFound { index: usize, count: usize },

    #[error("Dashlet {index}: invalid minimum size {min_size:?}, must be at least one cell")]
    InvalidMinSize { index: usize, min_size: [i32; 2] },
}
