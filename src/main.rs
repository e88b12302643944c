//! Folio — a single-page personal portfolio in a native WebView window.
//!
//! With the `gui` feature the portfolio opens in a window. Without it, the
//! binary renders the page to stdout and walks a short scroll/navigation demo
//! through the page controller.

use folio::app::App;
use folio::logging;
use folio::services::settings_engine::SettingsEngineTrait;

fn load_app() -> App {
    match App::new(None) {
        Ok(app) => {
            logging::init(&app.settings_engine.get_settings().logging.filter);
            app
        }
        Err(e) => {
            logging::init("folio=info");
            tracing::error!(error = %e, "failed to initialize Folio");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "gui")]
fn main() {
    let app = load_app();
    if let Err(e) = folio::ui::webview_app::run(app) {
        tracing::error!(error = %e, "Folio exited with an error");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use folio::types::layout::{LayoutSnapshot, RecordingScrollDriver};

    let mut app = load_app();
    app.startup();

    let layout = LayoutSnapshot::new()
        .with_section("home", 0.0, 800.0)
        .with_section("about", 800.0, 600.0)
        .with_section("skills", 1400.0, 500.0)
        .with_section("projects", 1900.0, 900.0);

    app.page.mount(0.0, &layout);
    for scroll_y in [0.0, 750.0, 1350.0, 2000.0, 5000.0] {
        app.page.handle_scroll(scroll_y, &layout);
        tracing::info!(scroll_y, active = app.page.active_section(), "scrolled");
    }

    let mut driver = RecordingScrollDriver::new();
    app.page.toggle_menu();
    app.page.handle_navigate("about", &layout, &mut driver);
    tracing::info!(requests = ?driver.requests, menu_open = app.page.menu_open(), "navigated");

    println!("{}", app.render());
    app.shutdown();
}
