use serde::{Deserialize, Serialize};

use super::section::DEFAULT_LOOKAHEAD_PX;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FolioSettings {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub tracking: TrackingSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub devtools: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280.0,
            height: 800.0,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Scroll tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingSettings {
    /// Pixels added to the scroll offset before matching sections.
    pub lookahead_px: f64,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            lookahead_px: DEFAULT_LOOKAHEAD_PX,
        }
    }
}

/// Static asset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetSettings {
    /// Directory holding images; `None` uses `<data dir>/assets`.
    pub dir: Option<String>,
}

/// Log filter settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "folio=info".to_string(),
        }
    }
}
