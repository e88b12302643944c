// Folio Settings Engine
// Loads, saves, updates and resets the application settings.
// Settings are stored as a JSON file at the platform-specific config path,
// or wherever `FOLIO_CONFIG` points.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::FolioSettings;

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Environment variable overriding the asset directory.
pub const ASSETS_ENV: &str = "FOLIO_ASSETS_DIR";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<FolioSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &FolioSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: FolioSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise `$FOLIO_CONFIG`, then `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => match env::var(CONFIG_ENV) {
                Ok(p) if !p.is_empty() => p,
                _ => platform::get_config_dir()
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string(),
            },
        };

        Self {
            config_path,
            settings: FolioSettings::default(),
        }
    }

    /// Directory that static assets are served from.
    ///
    /// `$FOLIO_ASSETS_DIR` wins over `assets.dir`, which wins over
    /// `<data dir>/assets`.
    pub fn asset_dir(&self) -> PathBuf {
        if let Ok(dir) = env::var(ASSETS_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        match &self.settings.assets.dir {
            Some(dir) => PathBuf::from(dir),
            None => platform::get_data_dir().join("assets"),
        }
    }

    fn validate(settings: &FolioSettings) -> Result<(), SettingsError> {
        let lookahead = settings.tracking.lookahead_px;
        if !lookahead.is_finite() || lookahead < 0.0 {
            return Err(SettingsError::InvalidValue(format!(
                "tracking.lookahead_px must be a non-negative number, got {}",
                lookahead
            )));
        }
        if settings.window.width <= 0.0 || settings.window.height <= 0.0 {
            return Err(SettingsError::InvalidValue(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<FolioSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = FolioSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: FolioSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        info!(path = %self.config_path, "settings loaded");
        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &FolioSettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path, then saves.
    ///
    /// # Examples
    /// - `"tracking.lookahead_px"` → updates `settings.tracking.lookahead_px`
    /// - `"window.title"` → updates `settings.window.title`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let mut current = &mut json_value;
            for (i, part) in parts.iter().enumerate() {
                if i == parts.len() - 1 {
                    match current {
                        serde_json::Value::Object(map) => {
                            if !map.contains_key(*part) {
                                return Err(SettingsError::InvalidKey(format!(
                                    "Key '{}' not found in settings",
                                    key
                                )));
                            }
                            map.insert(part.to_string(), value.clone());
                        }
                        _ => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Cannot navigate to key '{}': intermediate value is not an object",
                                key
                            )));
                        }
                    }
                } else {
                    current = match current.get_mut(*part) {
                        Some(v) => v,
                        None => {
                            return Err(SettingsError::InvalidKey(format!(
                                "Key '{}' not found in settings",
                                key
                            )));
                        }
                    };
                }
            }
        }

        let new_settings: FolioSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        Self::validate(&new_settings)?;

        self.settings = new_settings;
        self.save()?;
        debug!(key, "setting updated");

        Ok(())
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = FolioSettings::default();
        self.save()?;
        Ok(())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
