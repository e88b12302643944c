use serde::{Deserialize, Serialize};

/// Stable string key of a page section (`"home"`, `"about"`, ...).
pub type SectionId = String;

/// Sections whose scroll position drives the navigation highlight, in priority order.
pub const TRACKED_SECTIONS: [&str; 4] = ["home", "about", "skills", "projects"];

/// Distance below the scroll offset used as the activation reference point.
pub const DEFAULT_LOOKAHEAD_PX: f64 = 100.0;

/// Live document position and extent of a section element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Returns the exclusive lower edge of the section.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when `point` lies in `[top, top + height)`.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.bottom()
    }
}

/// Transient UI state exposed to the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiState {
    pub active_section: SectionId,
    pub menu_open: bool,
}
