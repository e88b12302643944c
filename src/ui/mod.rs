//! Folio UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The whole portfolio is rendered as HTML/CSS inside the WebView. The page
//! reports scroll and layout over wry IPC; Rust answers with scripts.

pub mod webview_app;
