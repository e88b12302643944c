//! Section Tracker — keeps the active section in sync with scroll position.

use tracing::debug;

use crate::managers::listeners::{ListenerGuard, ScrollListenerRegistry};
use crate::types::layout::LayoutProvider;
use crate::types::section::{SectionId, DEFAULT_LOOKAHEAD_PX, TRACKED_SECTIONS};

/// Trait defining the section tracker interface.
pub trait SectionTrackerTrait {
    fn on_scroll(&mut self, scroll_y: f64, layout: &dyn LayoutProvider) -> bool;
    fn mount(
        &mut self,
        registry: &ScrollListenerRegistry,
        scroll_y: f64,
        layout: &dyn LayoutProvider,
    ) -> ListenerGuard;
    fn active(&self) -> &str;
    fn sections(&self) -> &[SectionId];
    fn lookahead(&self) -> f64;
    fn set_lookahead(&mut self, lookahead: f64);
}

/// Tracks which section contains the scroll reference point.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    active: SectionId,
    lookahead: f64,
}

impl SectionTracker {
    /// Creates a tracker over `sections` (evaluated in the given order).
    ///
    /// The first section starts out active. An empty list falls back to
    /// the default tracked sections so there is always an active value.
    pub fn new(sections: Vec<SectionId>, lookahead: f64) -> Self {
        let sections = if sections.is_empty() {
            TRACKED_SECTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            sections
        };
        let active = sections[0].clone();
        Self {
            sections,
            active,
            lookahead,
        }
    }

    /// Returns the first section, in list order, whose span contains `point`.
    pub fn locate(&self, point: f64, layout: &dyn LayoutProvider) -> Option<&SectionId> {
        self.sections.iter().find(|id| {
            layout
                .section_rect(id)
                .map(|rect| rect.contains(point))
                .unwrap_or(false)
        })
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(
            TRACKED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_LOOKAHEAD_PX,
        )
    }
}

impl SectionTrackerTrait for SectionTracker {
    /// Recomputes the active section for a scroll offset.
    ///
    /// Returns `true` only when the active section changed. When no section
    /// contains the reference point the previous value is kept.
    fn on_scroll(&mut self, scroll_y: f64, layout: &dyn LayoutProvider) -> bool {
        let reference_point = scroll_y + self.lookahead;
        let found = match self.locate(reference_point, layout) {
            Some(id) => id.clone(),
            None => return false,
        };
        if found == self.active {
            return false;
        }
        debug!(from = %self.active, to = %found, reference_point, "active section changed");
        self.active = found;
        true
    }

    /// Registers the scroll listener and performs the initial computation.
    fn mount(
        &mut self,
        registry: &ScrollListenerRegistry,
        scroll_y: f64,
        layout: &dyn LayoutProvider,
    ) -> ListenerGuard {
        let guard = registry.subscribe();
        self.on_scroll(scroll_y, layout);
        guard
    }

    fn active(&self) -> &str {
        &self.active
    }

    fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Takes effect from the next scroll event. The active section is kept.
    fn set_lookahead(&mut self, lookahead: f64) {
        if lookahead != self.lookahead {
            debug!(from = self.lookahead, to = lookahead, "lookahead changed");
            self.lookahead = lookahead;
        }
    }
}
