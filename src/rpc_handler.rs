//! RPC method handler for the gallery JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the `App`, performs any fetch
//! it triggers, and returns the render patches the caller should apply.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::gallery_browser::GalleryBrowserTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::view::RenderPatch;
use crate::views::page::page_html;

const PAGE_TITLE: &str = "Gallery";

fn patches_json(patches: &[RenderPatch]) -> Result<Value, String> {
    serde_json::to_value(patches).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Gallery ───
        "gallery.page" => Ok(json!({"html": page_html(PAGE_TITLE)})),
        "gallery.tags" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let navigation = a.browser.load_tags();
            let patches = a.navigate(navigation);
            let tags = a.browser.tag_list().state().loaded().cloned().unwrap_or_default();
            Ok(json!({"tags": tags, "patches": patches_json(&patches)?}))
        }
        "gallery.select_tag" => {
            let tag = params.get("tag").and_then(|v| v.as_str()).ok_or("missing tag")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let navigation = a.browser.select_tag(tag);
            let patches = a.navigate(navigation);
            let images = a.browser.thumbnails().state().loaded().cloned().unwrap_or_default();
            Ok(json!({"tag": tag, "images": images, "patches": patches_json(&patches)?}))
        }
        "gallery.select_image" => {
            let image = params.get("image").and_then(|v| v.as_str()).ok_or("missing image")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let navigation = a.browser.select_image(image);
            let patches = a.navigate(navigation);
            let detail = a.browser.detail().state().loaded().cloned();
            Ok(json!({"image": image, "detail": detail, "patches": patches_json(&patches)?}))
        }
        "gallery.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.browser.snapshot()).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.update_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
