//! Folio — a single-page personal portfolio rendered in a native WebView.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
