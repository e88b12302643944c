//! Page Controller — single owner of the transient page UI state.
//!
//! Active section and menu state change only through the methods here. The
//! tracker's scroll listener is held while the page is mounted; scroll events
//! that arrive while unmounted are ignored.

use tracing::{debug, info};

use crate::managers::listeners::{ListenerGuard, ScrollListenerRegistry};
use crate::managers::navigator::{Navigator, NavigatorTrait};
use crate::managers::section_tracker::{SectionTracker, SectionTrackerTrait};
use crate::types::layout::{LayoutProvider, ScrollDriver};
use crate::types::section::{SectionId, UiState, TRACKED_SECTIONS};

pub struct PageController {
    tracker: SectionTracker,
    navigator: Navigator,
    registry: ScrollListenerRegistry,
    scroll_listener: Option<ListenerGuard>,
}

impl PageController {
    pub fn new(lookahead: f64) -> Self {
        let sections = TRACKED_SECTIONS.iter().map(|s| s.to_string()).collect();
        Self::with_tracker(SectionTracker::new(sections, lookahead))
    }

    pub fn with_tracker(tracker: SectionTracker) -> Self {
        Self {
            tracker,
            navigator: Navigator::new(),
            registry: ScrollListenerRegistry::new(),
            scroll_listener: None,
        }
    }

    /// Attaches the scroll listener and computes the initial active section.
    ///
    /// Mounting an already mounted page replaces the old registration.
    pub fn mount(&mut self, scroll_y: f64, layout: &dyn LayoutProvider) {
        // Release first so a remount never holds two registrations.
        self.scroll_listener = None;
        let guard = self.tracker.mount(&self.registry, scroll_y, layout);
        info!(listener = guard.id(), active = self.tracker.active(), "page mounted");
        self.scroll_listener = Some(guard);
    }

    /// Detaches the scroll listener.
    pub fn unmount(&mut self) {
        if self.scroll_listener.take().is_some() {
            info!("page unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_listener
            .as_ref()
            .map(|g| self.registry.is_registered(g.id()))
            .unwrap_or(false)
    }

    /// Feeds a scroll event to the tracker.
    ///
    /// Returns the new active section when it changed.
    pub fn handle_scroll(&mut self, scroll_y: f64, layout: &dyn LayoutProvider) -> Option<SectionId> {
        if !self.is_mounted() {
            debug!(scroll_y, "scroll ignored while unmounted");
            return None;
        }
        if self.tracker.on_scroll(scroll_y, layout) {
            Some(self.tracker.active().to_string())
        } else {
            None
        }
    }

    pub fn handle_navigate(&mut self, id: &str, layout: &dyn LayoutProvider, driver: &mut dyn ScrollDriver) {
        self.navigator.navigate_to(id, layout, driver);
    }

    /// Toggles the mobile menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.navigator.toggle_menu()
    }

    pub fn active_section(&self) -> &str {
        self.tracker.active()
    }

    pub fn menu_open(&self) -> bool {
        self.navigator.is_menu_open()
    }

    pub fn lookahead(&self) -> f64 {
        self.tracker.lookahead()
    }

    pub fn set_lookahead(&mut self, lookahead: f64) {
        self.tracker.set_lookahead(lookahead);
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listener_count()
    }

    pub fn snapshot(&self) -> UiState {
        UiState {
            active_section: self.tracker.active().to_string(),
            menu_open: self.navigator.is_menu_open(),
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::with_tracker(SectionTracker::default())
    }
}
