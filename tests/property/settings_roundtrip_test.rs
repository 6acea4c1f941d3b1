//! Property-based tests for settings persistence.
//!
//! Any valid `GallerySettings` written by one `SettingsEngine` must be read
//! back unchanged by another engine pointed at the same file.

use gallerybrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use gallerybrowser::types::settings::{
    GallerySettings, LayoutSettings, LoggingSettings, ScrollTrigger, SourceSettings,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_scroll_trigger() -> impl Strategy<Value = ScrollTrigger> {
    prop_oneof![Just(ScrollTrigger::ImageLoad), Just(ScrollTrigger::FixedDelay)]
}

fn arb_source_settings() -> impl Strategy<Value = SourceSettings> {
    (
        "(https?://[a-z0-9.-]{1,20}(:[0-9]{2,5})?(/[a-z]{1,10}){0,3})?",
        proptest::option::of("[a-zA-Z0-9/._-]{1,40}"),
        proptest::option::of(1u64..=600u64),
    )
        .prop_map(|(base_url, catalog_path, request_timeout_secs)| SourceSettings {
            base_url,
            catalog_path,
            request_timeout_secs,
        })
}

fn arb_layout_settings() -> impl Strategy<Value = LayoutSettings> {
    (0usize..=20usize, arb_scroll_trigger(), 0u64..=5000u64).prop_map(
        |(row_length, scroll_trigger, scroll_delay_ms)| LayoutSettings {
            row_length,
            scroll_trigger,
            scroll_delay_ms,
        },
    )
}

fn arb_gallery_settings() -> impl Strategy<Value = GallerySettings> {
    (
        arb_source_settings(),
        arb_layout_settings(),
        prop_oneof![Just("error"), Just("warn"), Just("info"), Just("debug"), Just("trace")],
    )
        .prop_map(|(source, layout, level)| GallerySettings {
            source,
            layout,
            logging: LoggingSettings {
                level: level.to_string(),
            },
        })
}

fn engine_at(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Writing every section through dot-path updates and reloading from disk
    /// reproduces the same settings.
    #[test]
    fn settings_survive_save_and_reload(settings in arb_gallery_settings()) {
        let dir = TempDir::new().unwrap();
        let mut writer = engine_at(&dir);
        writer.load().unwrap();
        writer.set_value("source", serde_json::to_value(&settings.source).unwrap()).unwrap();
        writer.set_value("layout", serde_json::to_value(&settings.layout).unwrap()).unwrap();
        writer.set_value("logging.level", serde_json::json!(settings.logging.level)).unwrap();
        prop_assert_eq!(writer.get_settings(), &settings);

        let mut reader = engine_at(&dir);
        let reloaded = reader.load().unwrap();
        prop_assert_eq!(reloaded, settings);
    }

    /// Any row length accepted by the engine is the one the layout reports.
    #[test]
    fn row_length_updates_are_exact(row_length in 0usize..=1000usize) {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_at(&dir);
        engine.load().unwrap();
        engine.set_value("layout.row_length", serde_json::json!(row_length)).unwrap();
        prop_assert_eq!(engine.get_settings().layout.row_length, row_length);
    }
}
