//! Rendering boundary capabilities.
//!
//! The hosting view supplies two things: where a section currently sits in
//! the document, and a way to animate-scroll a section into view. Both are
//! expressed as traits so the tracker and navigator never touch the WebView.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::section::SectionRect;

/// Queries an element's document position and extent by identifier.
pub trait LayoutProvider {
    /// Returns `None` when no element with that id is currently rendered.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    fn has_section(&self, id: &str) -> bool {
        self.section_rect(id).is_some()
    }
}

/// How a scroll request should move the viewport. Navigation only ever
/// scrolls smoothly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

impl ScrollBehavior {
    /// Value of the DOM `ScrollIntoViewOptions.behavior` field.
    pub fn as_dom_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Moves the viewport so that an element becomes visible.
pub trait ScrollDriver {
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior);
}

/// Section geometry as reported by the page bridge script.
///
/// Elements missing from the rendered tree are simply absent from the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LayoutSnapshot {
    rects: HashMap<String, SectionRect>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and the headless driver.
    pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
        self.insert(id, SectionRect::new(top, height));
        self
    }

    pub fn insert(&mut self, id: &str, rect: SectionRect) {
        self.rects.insert(id.to_string(), rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl LayoutProvider for LayoutSnapshot {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.rects.get(id).copied()
    }
}

/// A single recorded scroll request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollRequest {
    pub id: String,
    pub behavior: ScrollBehavior,
}

/// Scroll driver that records requests instead of moving anything.
#[derive(Debug, Default)]
pub struct RecordingScrollDriver {
    pub requests: Vec<ScrollRequest>,
}

impl RecordingScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollDriver for RecordingScrollDriver {
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
        self.requests.push(ScrollRequest {
            id: id.to_string(),
            behavior,
        });
    }
}

/// Scroll driver that queues JavaScript for the WebView to evaluate.
#[derive(Debug, Default)]
pub struct ScriptScrollDriver {
    scripts: Vec<String>,
}

impl ScriptScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the queued scripts in request order.
    pub fn take_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.scripts)
    }
}

impl ScrollDriver for ScriptScrollDriver {
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
        // serde_json gives us a correctly quoted JS string literal.
        let id_literal = serde_json::Value::String(id.to_string()).to_string();
        self.scripts.push(format!(
            "(function(){{var e=document.getElementById({});if(e)e.scrollIntoView({{behavior:'{}'}});}})()",
            id_literal,
            behavior.as_dom_str()
        ));
    }
}
