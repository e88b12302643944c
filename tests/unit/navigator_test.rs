//! Unit tests for the Navigator: smooth scroll to rendered targets, silent
//! no-op for missing ones, and the menu always closing afterward.

use folio::managers::navigator::{Navigator, NavigatorTrait};
use folio::types::layout::{
    LayoutSnapshot, RecordingScrollDriver, ScrollBehavior, ScrollRequest, ScriptScrollDriver,
};

fn layout() -> LayoutSnapshot {
    LayoutSnapshot::new()
        .with_section("home", 0.0, 800.0)
        .with_section("about", 800.0, 600.0)
}

#[test]
fn test_menu_starts_closed() {
    let nav = Navigator::new();
    assert!(!nav.is_menu_open());
}

#[test]
fn test_toggle_menu_flips_state() {
    let mut nav = Navigator::new();
    assert!(nav.toggle_menu());
    assert!(nav.is_menu_open());
    assert!(!nav.toggle_menu());
    assert!(!nav.is_menu_open());
}

#[test]
fn test_navigate_to_known_section_scrolls_once_and_closes_menu() {
    let mut nav = Navigator::new();
    nav.toggle_menu();
    let mut driver = RecordingScrollDriver::new();

    nav.navigate_to("about", &layout(), &mut driver);

    assert_eq!(
        driver.requests,
        vec![ScrollRequest {
            id: "about".to_string(),
            behavior: ScrollBehavior::Smooth,
        }]
    );
    assert!(!nav.is_menu_open());
}

#[test]
fn test_navigate_to_unknown_section_only_closes_menu() {
    let mut nav = Navigator::new();
    nav.toggle_menu();
    let mut driver = RecordingScrollDriver::new();

    nav.navigate_to("blog", &layout(), &mut driver);

    assert!(driver.requests.is_empty());
    assert!(!nav.is_menu_open());
}

#[test]
fn test_navigate_with_closed_menu_keeps_it_closed() {
    let mut nav = Navigator::new();
    let mut driver = RecordingScrollDriver::new();
    nav.navigate_to("home", &layout(), &mut driver);
    assert_eq!(driver.requests.len(), 1);
    assert!(!nav.is_menu_open());
}

#[test]
fn test_script_driver_emits_smooth_scroll_into_view() {
    let mut nav = Navigator::new();
    let mut driver = ScriptScrollDriver::new();
    nav.navigate_to("about", &layout(), &mut driver);

    let scripts = driver.take_scripts();
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].contains("getElementById(\"about\")"));
    assert!(scripts[0].contains("scrollIntoView({behavior:'smooth'})"));
}
