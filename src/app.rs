//! App Core for the gallery.
//!
//! Central struct holding settings, the data source, the browser state and the
//! async runtime fetches run on.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tracing::info;

use crate::managers::gallery_browser::{FetchTicket, GalleryBrowser, GalleryBrowserTrait, Navigation};
use crate::services::catalog::Catalog;
use crate::services::gallery_api::{dispatch, Endpoints, GalleryApi, HttpGalleryApi};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::GalleryError;
use crate::types::gallery::ApiResponse;
use crate::types::settings::{GallerySettings, SourceSettings};
use crate::types::view::RenderPatch;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub browser: GalleryBrowser,
    api: Arc<dyn GalleryApi>,
    // source settings `api` was built from
    source: SourceSettings,
    runtime: Runtime,
}

impl App {
    /// Creates a new App from the settings file at `config_path` (or the
    /// default location), with `GALLERY_*` environment overrides applied.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        settings_engine.apply_env_overrides();
        crate::logging::init_tracing(&settings_engine.get_settings().logging.level);

        let api = build_api(settings_engine.get_settings())?;
        Self::with_api(settings_engine, api)
    }

    /// Creates an App around an already constructed data source.
    pub fn with_api(
        settings_engine: SettingsEngine,
        api: Arc<dyn GalleryApi>,
    ) -> Result<Self, Box<dyn Error>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("gallery-fetch")
            .enable_all()
            .build()?;

        let settings = settings_engine.get_settings();
        let source = settings.source.clone();
        let browser = GalleryBrowser::new(
            Endpoints::new(&settings.source.base_url),
            settings.layout.clone(),
        );
        info!(
            base_url = %source.base_url,
            catalog = ?source.catalog_path,
            "gallery initialized"
        );

        Ok(Self {
            settings_engine,
            browser,
            api,
            source,
            runtime,
        })
    }

    pub fn api(&self) -> Arc<dyn GalleryApi> {
        Arc::clone(&self.api)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Runs the ticket's fetch on the runtime, blocking the caller until it ends.
    pub fn fetch_blocking(&self, ticket: &FetchTicket) -> Result<ApiResponse, GalleryError> {
        self.runtime
            .block_on(dispatch(self.api.as_ref(), &ticket.request))
    }

    /// Performs a navigation to completion: its immediate patches followed by
    /// whatever its fetch renders.
    pub fn navigate(&mut self, navigation: Navigation) -> Vec<RenderPatch> {
        let result = self.fetch_blocking(&navigation.ticket);
        let mut patches = navigation.patches;
        patches.extend(self.browser.complete(&navigation.ticket, result));
        patches
    }

    /// Changes one setting by dot-path `key`.
    ///
    /// A changed data source is built before anything is saved, so a value
    /// that leaves the gallery without a usable source is rejected and the
    /// stored settings stay as they were.
    pub fn update_setting(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), Box<dyn Error>> {
        let candidate = self.settings_engine.with_value(key, value)?;
        let api = if candidate.source != self.source {
            Some(build_api(&candidate)?)
        } else {
            None
        };

        self.settings_engine.replace(candidate.clone())?;
        if let Some(api) = api {
            self.api = api;
            self.source = candidate.source.clone();
            info!(base_url = %self.source.base_url, "gallery source changed");
        }
        self.browser.reconfigure(
            Endpoints::new(&candidate.source.base_url),
            candidate.layout,
        );
        Ok(())
    }
}

/// Builds the data source described by `settings`: the descriptor catalog
/// when one is configured, the REST API otherwise.
pub fn build_api(settings: &GallerySettings) -> Result<Arc<dyn GalleryApi>, Box<dyn Error>> {
    match &settings.source.catalog_path {
        Some(path) => Ok(Arc::new(Catalog::load(path)?)),
        None => {
            let timeout = settings.source.request_timeout_secs.map(Duration::from_secs);
            let api = HttpGalleryApi::new(Endpoints::new(&settings.source.base_url), timeout)?;
            Ok(Arc::new(api))
        }
    }
}
