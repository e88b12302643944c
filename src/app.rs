//! App Core for Folio.
//!
//! Central struct holding settings, page content, the renderer, the asset
//! server and the page controller.

use serde_json::Value;
use tracing::{info, warn};

use crate::managers::page_controller::PageController;
use crate::services::asset_server::{AssetServer, AssetServerTrait};
use crate::services::page_renderer::{PageRenderer, PageRendererTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::content::PortfolioContent;
use crate::types::errors::{AppError, SettingsError};

pub struct App {
    pub settings_engine: SettingsEngine,
    pub renderer: PageRenderer,
    pub assets: AssetServer,
    pub page: PageController,
}

impl App {
    /// Loads settings (from `settings_path`, or the default location) and
    /// builds the page with the default content.
    pub fn new(settings_path: Option<String>) -> Result<Self, AppError> {
        Self::with_content(settings_path, PortfolioContent::default())
    }

    pub fn with_content(
        settings_path: Option<String>,
        content: PortfolioContent,
    ) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;
        let assets = AssetServer::new(settings_engine.asset_dir());
        let page = PageController::new(settings.tracking.lookahead_px);

        Ok(Self {
            settings_engine,
            renderer: PageRenderer::new(content),
            assets,
            page,
        })
    }

    pub fn content(&self) -> &PortfolioContent {
        self.renderer.content()
    }

    /// Renders the page for the current UI state.
    pub fn render(&self) -> String {
        self.renderer.render_page(&self.page.snapshot())
    }

    /// Updates one setting, saves it, and applies it to the running page.
    ///
    /// The page follows the engine's in-memory settings even when saving
    /// the file fails.
    pub fn set_setting(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let result = self.settings_engine.set_value(key, value);
        self.apply_settings();
        result
    }

    /// Pushes the current settings into the page controller and asset server.
    pub fn apply_settings(&mut self) {
        let lookahead = self.settings_engine.get_settings().tracking.lookahead_px;
        self.page.set_lookahead(lookahead);
        let asset_dir = self.settings_engine.asset_dir();
        if asset_dir != self.assets.root() {
            info!(assets = %asset_dir.display(), "asset directory changed");
            self.assets = AssetServer::new(asset_dir);
        }
    }

    /// Content asset paths that the asset server cannot serve.
    pub fn missing_assets(&self) -> Vec<String> {
        self.content()
            .asset_paths()
            .into_iter()
            .filter(|path| self.assets.load(path).is_err())
            .map(|path| path.to_string())
            .collect()
    }

    pub fn startup(&self) {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            config = self.settings_engine.get_config_path(),
            assets = %self.assets.root().display(),
            lookahead = self.page.lookahead(),
            "Folio starting"
        );
        for path in self.missing_assets() {
            warn!(path = %path, "asset not found; the page will show a broken image");
        }
    }

    pub fn shutdown(&mut self) {
        self.page.unmount();
        info!("Folio shut down");
    }
}
