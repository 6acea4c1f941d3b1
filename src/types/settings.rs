use serde::{Deserialize, Serialize};

/// Top-level gallery settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GallerySettings {
    pub source: SourceSettings,
    pub layout: LayoutSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where gallery data comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSettings {
    /// Root the REST endpoints are resolved against.
    pub base_url: String,
    /// When set, data is served from this descriptor file instead of the REST API.
    /// Image sources are still built from `base_url`.
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/galerija".to_string(),
            catalog_path: None,
            request_timeout_secs: None,
        }
    }
}

/// How views are laid out on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSettings {
    /// Controls per visual row before a line break; 0 disables breaks.
    pub row_length: usize,
    pub scroll_trigger: ScrollTrigger,
    /// Delay used by [`ScrollTrigger::FixedDelay`].
    pub scroll_delay_ms: u64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            row_length: 5,
            scroll_trigger: ScrollTrigger::ImageLoad,
            scroll_delay_ms: 300,
        }
    }
}

/// When the detail view is scrolled into place after rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ScrollTrigger {
    /// Once the full-size image fires `load` (or `error`).
    ImageLoad,
    /// After `scroll_delay_ms`, regardless of image loading.
    FixedDelay,
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
