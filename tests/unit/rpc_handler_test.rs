//! Unit tests for the RPC handler — all JSON-RPC methods dispatched by `handle_method`.
//!
//! These go through the same code path as the `folio-rpc` binary, with
//! settings stored in a temporary directory.

use std::sync::Mutex;

use folio::app::App;
use folio::rpc_handler::handle_method;
use serde_json::json;
use tempfile::TempDir;

/// Create a fresh App whose settings live in a temp directory.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("settings.json").to_string_lossy().to_string();
    let app = App::new(Some(path)).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

fn layout() -> serde_json::Value {
    json!({
        "home": {"top": 0, "height": 800},
        "about": {"top": 800, "height": 600}
    })
}

// ─── Ping ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Page ───

#[test]
fn test_mount_scroll_and_state() {
    let (app, _tmp) = setup();
    let mounted = handle_method(&app, "page.mount", &json!({"scroll_y": 0, "layout": layout()})).unwrap();
    assert_eq!(mounted, json!({"active_section": "home", "menu_open": false}));

    let res = handle_method(&app, "page.scroll", &json!({"scroll_y": 750, "layout": layout()})).unwrap();
    assert_eq!(res, json!({"active_section": "about", "changed": true}));

    let state = handle_method(&app, "page.state", &json!({})).unwrap();
    assert_eq!(state["active_section"], "about");
    assert_eq!(state["mounted"], true);
}

#[test]
fn test_scroll_outside_sections_is_sticky() {
    let (app, _tmp) = setup();
    handle_method(&app, "page.mount", &json!({"scroll_y": 750, "layout": layout()})).unwrap();
    let res = handle_method(&app, "page.scroll", &json!({"scroll_y": 9000, "layout": layout()})).unwrap();
    assert_eq!(res, json!({"active_section": "about", "changed": false}));
}

#[test]
fn test_scroll_requires_offset() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "page.scroll", &json!({"layout": layout()})).unwrap_err();
    assert!(err.contains("scroll_y"));
    let err = handle_method(&app, "page.scroll", &json!({"scroll_y": 1, "layout": [1, 2]})).unwrap_err();
    assert!(err.contains("invalid layout"));
}

#[test]
fn test_mount_offset_defaults_only_when_absent() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "page.mount", &json!({"layout": layout()})).unwrap();
    assert_eq!(res["active_section"], "home");

    let err = handle_method(&app, "page.mount", &json!({"scroll_y": "750", "layout": layout()})).unwrap_err();
    assert!(err.contains("scroll_y"));
    let err = handle_method(&app, "page.mount", &json!({"scroll_y": null, "layout": layout()})).unwrap_err();
    assert!(err.contains("scroll_y"));
}

#[test]
fn test_scroll_after_unmount_changes_nothing() {
    let (app, _tmp) = setup();
    handle_method(&app, "page.mount", &json!({"scroll_y": 0, "layout": layout()})).unwrap();
    handle_method(&app, "page.unmount", &json!({})).unwrap();
    let res = handle_method(&app, "page.scroll", &json!({"scroll_y": 750, "layout": layout()})).unwrap();
    assert_eq!(res, json!({"active_section": "home", "changed": false}));
}

#[test]
fn test_navigate_and_menu() {
    let (app, _tmp) = setup();
    let toggled = handle_method(&app, "page.toggle_menu", &json!({})).unwrap();
    assert_eq!(toggled, json!({"menu_open": true}));

    let res = handle_method(&app, "page.navigate", &json!({"id": "about", "layout": layout()})).unwrap();
    assert_eq!(
        res,
        json!({"scrolls": [{"id": "about", "behavior": "smooth"}], "menu_open": false})
    );

    let res = handle_method(&app, "page.navigate", &json!({"id": "nowhere", "layout": layout()})).unwrap();
    assert_eq!(res, json!({"scrolls": [], "menu_open": false}));

    assert!(handle_method(&app, "page.navigate", &json!({})).is_err());
}

#[test]
fn test_render_reflects_state() {
    let (app, _tmp) = setup();
    handle_method(&app, "page.mount", &json!({"scroll_y": 750, "layout": layout()})).unwrap();
    let res = handle_method(&app, "page.render", &json!({})).unwrap();
    let html = res["html"].as_str().unwrap();
    assert!(html.contains("<button class=\"nav-link active\" data-nav=\"about\">About</button>"));
}

// ─── Content ───

#[test]
fn test_content_get() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "content.get", &json!({})).unwrap();
    assert_eq!(res["skills"].as_array().unwrap().len(), 6);
    assert_eq!(res["projects"][0]["image"], "/dashboard.png");
    assert_eq!(res["nav"][3], json!({"id": "projects", "label": "Projects"}));
}

// ─── Settings ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["tracking"]["lookahead_px"], 100.0);

    handle_method(&app, "settings.set", &json!({"key": "window.title", "value": "Folio"})).unwrap();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["window"]["title"], "Folio");

    assert!(handle_method(&app, "settings.set", &json!({"key": "window.title"})).is_err());
    assert!(handle_method(&app, "settings.set", &json!({"key": "bogus", "value": 1})).is_err());
}

#[test]
fn test_lookahead_setting_applies_to_mounted_page() {
    let (app, _tmp) = setup();
    handle_method(&app, "page.mount", &json!({"scroll_y": 0, "layout": layout()})).unwrap();
    handle_method(&app, "settings.set", &json!({"key": "tracking.lookahead_px", "value": 0})).unwrap();
    assert_eq!(app.lock().unwrap().page.lookahead(), 0.0);

    // 750 + 0 still falls inside home.
    let res = handle_method(&app, "page.scroll", &json!({"scroll_y": 750, "layout": layout()})).unwrap();
    assert_eq!(res, json!({"active_section": "home", "changed": false}));
}

#[test]
fn test_rejected_lookahead_leaves_page_unchanged() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "settings.set", &json!({"key": "tracking.lookahead_px", "value": -5})).is_err());
    assert_eq!(app.lock().unwrap().page.lookahead(), 100.0);
}

#[test]
fn test_asset_dir_setting_applies_to_asset_server() {
    use folio::services::asset_server::AssetServerTrait;

    let (app, _tmp) = setup();
    let assets = TempDir::new().unwrap();
    std::fs::write(assets.path().join("dashboard.png"), b"png").unwrap();
    let dir = assets.path().to_string_lossy().to_string();

    handle_method(&app, "settings.set", &json!({"key": "assets.dir", "value": dir})).unwrap();
    let a = app.lock().unwrap();
    assert_eq!(a.assets.root(), assets.path());
    assert_eq!(a.assets.load("/dashboard.png").unwrap().bytes, b"png".to_vec());
}
