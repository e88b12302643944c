// Folio services
// Services provide page rendering, static asset serving and settings persistence.

pub mod asset_server;
pub mod page_renderer;
pub mod settings_engine;
