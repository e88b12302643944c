//! IPC message handling for the page bridge script.
//!
//! The WebView posts JSON objects of the form `{"cmd": "...", ...}`. They are
//! decoded into a `PageCommand`, applied to the `App`, and answered with the
//! scripts the WebView should evaluate. Kept separate from the WebView glue
//! so it can be unit-tested without a window.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::app::App;
use crate::services::page_renderer::PageRendererTrait;
use crate::types::errors::IpcError;
use crate::types::layout::{LayoutSnapshot, ScriptScrollDriver};

/// A decoded message from the page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PageCommand {
    /// The page finished loading and registered its scroll listener.
    Mounted {
        #[serde(rename = "scrollY", default)]
        scroll_y: f64,
        #[serde(default)]
        layout: LayoutSnapshot,
    },
    /// The viewport scrolled.
    Scroll {
        #[serde(rename = "scrollY")]
        scroll_y: f64,
        #[serde(default)]
        layout: LayoutSnapshot,
    },
    /// A navigation entry was clicked.
    Navigate {
        id: String,
        #[serde(default)]
        layout: LayoutSnapshot,
    },
    /// The mobile menu button was clicked.
    ToggleMenu,
    /// The page is going away.
    Unmount,
}

/// Decodes a raw IPC body.
pub fn parse_command(message: &str) -> Result<PageCommand, IpcError> {
    let value: serde_json::Value =
        serde_json::from_str(message).map_err(|e| IpcError::Malformed(e.to_string()))?;
    if value.get("cmd").and_then(|c| c.as_str()).is_none() {
        return Err(IpcError::MissingCommand);
    }
    serde_json::from_value(value).map_err(|e| IpcError::InvalidField(e.to_string()))
}

/// Applies a command and returns the scripts to evaluate, in order.
pub fn apply_command(app: &mut App, command: PageCommand) -> Vec<String> {
    match command {
        PageCommand::Mounted { scroll_y, layout } => {
            app.page.mount(scroll_y, &layout);
            let state = app.page.snapshot();
            vec![
                app.renderer.highlight_script(&state.active_section),
                app.renderer.menu_script(state.menu_open),
            ]
        }

        PageCommand::Scroll { scroll_y, layout } => match app.page.handle_scroll(scroll_y, &layout) {
            Some(active) => vec![app.renderer.highlight_script(&active)],
            None => Vec::new(),
        },

        PageCommand::Navigate { id, layout } => {
            let mut driver = ScriptScrollDriver::new();
            app.page.handle_navigate(&id, &layout, &mut driver);
            let mut scripts = driver.take_scripts();
            scripts.push(app.renderer.menu_script(app.page.menu_open()));
            scripts
        }

        PageCommand::ToggleMenu => {
            let open = app.page.toggle_menu();
            vec![app.renderer.menu_script(open)]
        }

        PageCommand::Unmount => {
            app.page.unmount();
            Vec::new()
        }
    }
}

/// Decodes and applies a raw IPC body. Bad messages are logged and dropped.
pub fn handle_message(app: &mut App, message: &str) -> Vec<String> {
    match parse_command(message) {
        Ok(command) => {
            debug!(?command, "ipc");
            apply_command(app, command)
        }
        Err(IpcError::InvalidField(e)) if e.contains("unknown variant") => {
            debug!(error = %e, "ignoring unknown ipc command");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "dropping ipc message");
            Vec::new()
        }
    }
}
