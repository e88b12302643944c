//! Navigator — turns a menu selection into a smooth scroll and closes the menu.

use tracing::debug;

use crate::types::layout::{LayoutProvider, ScrollBehavior, ScrollDriver};

/// Trait defining the navigator interface.
pub trait NavigatorTrait {
    fn navigate_to(&mut self, id: &str, layout: &dyn LayoutProvider, driver: &mut dyn ScrollDriver);
    fn toggle_menu(&mut self) -> bool;
    fn close_menu(&mut self);
    fn is_menu_open(&self) -> bool;
}

/// Owns the mobile menu state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NavigatorTrait for Navigator {
    /// Smooth-scrolls to `id` when it is rendered, then closes the menu.
    ///
    /// An unknown id is a silent no-op apart from closing the menu.
    fn navigate_to(&mut self, id: &str, layout: &dyn LayoutProvider, driver: &mut dyn ScrollDriver) {
        if layout.has_section(id) {
            driver.scroll_into_view(id, ScrollBehavior::Smooth);
        } else {
            debug!(section = id, "navigation target not rendered");
        }
        self.close_menu();
    }

    /// Flips the menu state and returns the new value.
    fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
    }

    fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
