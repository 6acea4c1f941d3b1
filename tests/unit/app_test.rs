//! Unit tests for `App` construction and setting updates.

use gallerybrowser::app::App;
use gallerybrowser::services::settings_engine::SettingsEngineTrait;
use tempfile::TempDir;

fn config_path(dir: &TempDir) -> String {
    dir.path().join("settings.json").to_string_lossy().to_string()
}

/// Startup logs from `App::new` need a subscriber to already be in place.
#[test]
fn test_new_installs_tracing_subscriber() {
    let dir = TempDir::new().unwrap();
    let app = App::new(Some(config_path(&dir))).unwrap();

    assert!(tracing::dispatcher::has_been_set());
    assert_eq!(app.settings_engine.get_settings().logging.level, "info");
}

#[test]
fn test_new_fails_on_missing_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        format!(
            r#"{{"source":{{"base_url":"","catalog_path":"{}"}},
                "layout":{{"row_length":5,"scroll_trigger":"ImageLoad","scroll_delay_ms":300}}}}"#,
            dir.path().join("gone.txt").to_string_lossy()
        ),
    )
    .unwrap();

    let err = App::new(Some(config_path(&dir))).err().unwrap();
    assert!(err.to_string().contains("Catalog I/O error"));
}

#[test]
fn test_update_setting_rejects_unknown_key_without_saving() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(Some(config_path(&dir))).unwrap();

    assert!(app
        .update_setting("layout.columns", serde_json::json!(3))
        .is_err());
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_update_setting_reconfigures_layout() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(Some(config_path(&dir))).unwrap();

    app.update_setting("layout.row_length", serde_json::json!(2))
        .unwrap();
    assert_eq!(app.browser.layout().row_length, 2);
    assert!(dir.path().join("settings.json").exists());
}
