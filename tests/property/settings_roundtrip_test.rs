//! Property-based tests for FolioSettings serialization round-trip.
//!
//! Arbitrary valid settings must survive a JSON save/load cycle through the
//! SettingsEngine without data loss.

use folio::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use folio::types::settings::{
    AssetSettings, FolioSettings, LoggingSettings, TrackingSettings, WindowSettings,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_settings() -> impl Strategy<Value = FolioSettings> {
    (
        "[a-zA-Z0-9 ]{1,30}",
        200u32..4000,
        200u32..3000,
        any::<bool>(),
        0u32..1000,
        prop::option::of("[a-z/]{1,40}"),
        "[a-z_]{1,10}=(info|debug|warn)",
    )
        .prop_map(|(title, width, height, devtools, lookahead, dir, filter)| FolioSettings {
            window: WindowSettings {
                title,
                width: width as f64,
                height: height as f64,
                devtools,
            },
            tracking: TrackingSettings {
                lookahead_px: lookahead as f64,
            },
            assets: AssetSettings { dir },
            logging: LoggingSettings { filter },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: FolioSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn settings_file_roundtrip(settings in arb_settings()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let mut engine = SettingsEngine::new(Some(path));
        let loaded = engine.load().unwrap();
        prop_assert_eq!(loaded, settings);
    }
}
