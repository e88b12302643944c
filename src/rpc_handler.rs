//! RPC method handler for the Folio JSON-RPC protocol.
//!
//! Drives the page controller headlessly: callers supply scroll offsets and
//! section layout the way the WebView bridge would. Extracted from
//! `rpc_server.rs` so it can be unit-tested independently.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::layout::{LayoutSnapshot, RecordingScrollDriver};

fn layout_param(params: &Value) -> Result<LayoutSnapshot, String> {
    match params.get("layout") {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("invalid layout: {}", e)),
        None => Ok(LayoutSnapshot::new()),
    }
}

fn scroll_param(params: &Value) -> Result<f64, String> {
    let y = params
        .get("scroll_y")
        .and_then(|v| v.as_f64())
        .ok_or("missing scroll_y")?;
    if !y.is_finite() {
        return Err("invalid scroll_y".to_string());
    }
    Ok(y)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Page state ───
        "page.mount" => {
            let scroll_y = match params.get("scroll_y") {
                Some(_) => scroll_param(params)?,
                None => 0.0,
            };
            let layout = layout_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.page.mount(scroll_y, &layout);
            serde_json::to_value(a.page.snapshot()).map_err(|e| e.to_string())
        }
        "page.unmount" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.page.unmount();
            Ok(json!({"ok": true}))
        }
        "page.scroll" => {
            let scroll_y = scroll_param(params)?;
            let layout = layout_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let changed = a.page.handle_scroll(scroll_y, &layout);
            Ok(json!({
                "active_section": a.page.active_section(),
                "changed": changed.is_some(),
            }))
        }
        "page.navigate" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let layout = layout_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut driver = RecordingScrollDriver::new();
            a.page.handle_navigate(id, &layout, &mut driver);
            Ok(json!({
                "scrolls": driver.requests,
                "menu_open": a.page.menu_open(),
            }))
        }
        "page.toggle_menu" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let open = a.page.toggle_menu();
            Ok(json!({"menu_open": open}))
        }
        "page.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut state = serde_json::to_value(a.page.snapshot()).map_err(|e| e.to_string())?;
            state["mounted"] = json!(a.page.is_mounted());
            Ok(state)
        }
        "page.render" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"html": a.render()}))
        }

        // ─── Content ───
        "content.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut content = serde_json::to_value(a.content()).map_err(|e| e.to_string())?;
            content["nav"] = serde_json::to_value(a.content().nav_items()).map_err(|e| e.to_string())?;
            Ok(content)
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
