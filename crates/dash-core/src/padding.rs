// ABOUTME: Dashlet padding between the outer frame and its content.
// ABOUTME: Persisted as the 5-tuple (N, E, S, W, N without title).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 5]", into = "[i32; 5]")]
pub struct Padding {
    /// Top margin when the dashlet shows a title bar
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    /// Top margin when the dashlet has no title bar
    pub top_without_title: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32, top_without_title: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            top_without_title,
        }
    }

    /// Top margin for a dashlet with or without title bar
    pub fn top_for(&self, has_title: bool) -> i32 {
        if has_title {
            self.top
        } else {
            self.top_without_title
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(26, 4, 4, 4, 4)
    }
}

impl From<[i32; 5]> for Padding {
    fn from(p: [i32; 5]) -> Self {
        Self::new(p[0], p[1], p[2], p[3], p[4])
    }
}

impl From<Padding> for [i32; 5] {
    fn from(p: Padding) -> Self {
        [p.top, p.right, p.bottom, p.left, p.top_without_title]
    }
}
