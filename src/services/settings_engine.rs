// Gallery Settings Engine
// Manages gallery settings: loading, saving, updating individual values, and resetting to defaults.
// Settings are stored as a JSON file at the platform-specific config path.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::GallerySettings;

/// Environment variable naming an alternate settings file.
pub const CONFIG_ENV: &str = "GALLERY_CONFIG";
pub const BASE_URL_ENV: &str = "GALLERY_BASE_URL";
pub const CATALOG_ENV: &str = "GALLERY_CATALOG";
pub const LOG_ENV: &str = "GALLERY_LOG";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<GallerySettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &GallerySettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: GallerySettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise uses `$GALLERY_CONFIG`, falling back to `settings.json` in the
    /// platform-specific config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override.or_else(|| env::var(CONFIG_ENV).ok()) {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: GallerySettings::default(),
        }
    }

    /// Returns the current settings with the value at dot-path `key` replaced,
    /// leaving the engine untouched.
    ///
    /// The settings are round-tripped through `serde_json::Value` so the new
    /// value is validated by deserialization.
    pub fn with_value(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<GallerySettings, SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let parts: Vec<&str> = key.split('.').collect();

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        {
            let (last, parents) = parts
                .split_last()
                .ok_or_else(|| SettingsError::InvalidKey("Key cannot be empty".to_string()))?;

            let mut current = &mut json_value;
            for part in parents {
                current = current.get_mut(*part).ok_or_else(|| {
                    SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
                })?;
            }

            match current {
                serde_json::Value::Object(map) => {
                    if !map.contains_key(*last) {
                        return Err(SettingsError::InvalidKey(format!(
                            "Key '{}' not found in settings",
                            key
                        )));
                    }
                    map.insert(last.to_string(), value);
                }
                _ => {
                    return Err(SettingsError::InvalidKey(format!(
                        "Cannot navigate to key '{}': intermediate value is not an object",
                        key
                    )));
                }
            }
        }

        serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })
    }

    /// Replaces all settings and saves them.
    pub fn replace(&mut self, settings: GallerySettings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.save()
    }

    /// Applies `GALLERY_*` environment overrides to the in-memory settings.
    /// Overrides are not persisted.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    /// Applies overrides using `lookup` in place of the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            debug!(%base_url, "base url overridden from environment");
            self.settings.source.base_url = base_url;
        }
        if let Some(catalog) = lookup(CATALOG_ENV) {
            self.settings.source.catalog_path = if catalog.is_empty() {
                None
            } else {
                Some(catalog)
            };
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.settings.logging.level = level;
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<GallerySettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = GallerySettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: GallerySettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

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

    fn get_settings(&self) -> &GallerySettings {
        &self.settings
    }

    /// Updates an individual setting by dot-notation key path.
    ///
    /// The new value is validated by [`SettingsEngine::with_value`]. Saves to
    /// disk after a successful update.
    ///
    /// # Examples
    /// - `"source.base_url"` → updates `settings.source.base_url`
    /// - `"layout.row_length"` → updates `settings.layout.row_length`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let candidate = self.with_value(key, value)?;
        self.replace(candidate)
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = GallerySettings::default();
        self.save()?;
        Ok(())
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
