// Folio state managers
// Managers own the transient page state: active section, menu state and the scroll listener.

pub mod listeners;
pub mod navigator;
pub mod page_controller;
pub mod section_tracker;
