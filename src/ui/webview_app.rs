//! WebView-based portfolio window using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served via the `folio://` custom protocol (`/`), images
//!   under `/assets/...` from the configured asset directory.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, handled by
//!   `ipc_handler`. Replies are scripts pushed back through the event loop.
//! - Links with `target="_blank"` go through the new-window hook: http(s)
//!   opens in a new browsing context, anything else is denied.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, error, info, warn};
use wry::http::{Request, Response};
use wry::WebViewBuilder;

use crate::app::App;
use crate::ipc_handler;
use crate::services::asset_server::AssetServerTrait;
use crate::services::page_renderer::ASSET_PREFIX;
use crate::types::errors::AppError;

const PAGE_URL: &str = "folio://localhost/";

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .body(Cow::Owned(body))
        .unwrap_or_else(|_| Response::new(Cow::Borrowed(&[][..])))
}

/// Answers a `folio://` request: the page itself or a static asset.
fn serve(app: &App, request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
    let path = request.uri().path();
    if path == "/" || path == "/index.html" {
        return respond(200, "text/html; charset=utf-8", app.render().into_bytes());
    }

    let asset_path = match path.strip_prefix(ASSET_PREFIX) {
        Some(rest) => rest,
        None => {
            debug!(path, "unknown folio:// path");
            return respond(404, "text/plain", b"not found".to_vec());
        }
    };

    match app.assets.load(asset_path) {
        Ok(asset) => respond(200, asset.mime, asset.bytes),
        Err(e) => {
            warn!(error = %e, "asset request failed");
            respond(e.status_code(), "text/plain", e.to_string().into_bytes())
        }
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

// ─── Main entry point ───

pub fn run(app: App) -> Result<(), AppError> {
    app.startup();
    let window_settings = {
        use crate::services::settings_engine::SettingsEngineTrait;
        app.settings_engine.get_settings().window.clone()
    };
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&window_settings.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            window_settings.width,
            window_settings.height,
        ))
        .build(&event_loop)
        .map_err(|e| AppError::Window(e.to_string()))?;

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("folio".into(), move |_wv_id, request| {
            match protocol_state.lock() {
                Ok(app) => serve(&app, &request),
                Err(_) => respond(500, "text/plain", b"state unavailable".to_vec()),
            }
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: Request<String>| {
            let body = msg.body().as_str();
            let scripts = match ipc_state.lock() {
                Ok(mut app) => ipc_handler::handle_message(&mut app, body),
                Err(_) => {
                    error!("app state poisoned, dropping ipc message");
                    return;
                }
            };
            for js in scripts {
                let _ = ipc_proxy.send_event(UserEvent::EvalScript(js));
            }
        })
        .with_navigation_handler(|url| {
            // Keep the main window on the page; outbound links use new windows.
            let allowed = url.starts_with("folio://") || url.starts_with("http://folio.localhost");
            if !allowed {
                debug!(url = %url, "blocked in-window navigation");
            }
            allowed
        })
        .with_new_window_req_handler(|url, _features| {
            if is_external(&url) {
                info!(url = %url, "opening external link");
                wry::NewWindowResponse::Allow
            } else {
                debug!(url = %url, "denied new window");
                wry::NewWindowResponse::Deny
            }
        })
        .with_devtools(window_settings.devtools);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| AppError::Window("failed to get GTK vbox".to_string()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| AppError::Window(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|e| AppError::Window(e.to_string()))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Ok(mut app) = state.lock() {
                    app.shutdown();
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "evaluate_script failed");
                }
            }

            _ => {}
        }
    })
}
