//! WebView-based gallery window using `wry` + `tao`.
//!
//! Architecture:
//! - The page shell is served from the `gallery://` custom protocol.
//! - IPC from JS → Rust via `window.ipc.postMessage()` carries `ui_ready`,
//!   `select_tag` and `select_image` commands.
//! - Fetches run on the App's tokio runtime. Their results come back to the
//!   event loop as `UserEvent::FetchCompleted`, so view state is only ever
//!   touched from the UI thread.
//! - Rendered patches are applied with `evaluate_script`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tracing::{debug, error, warn};
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::gallery_browser::{FetchTicket, GalleryBrowserTrait, Navigation};
use crate::services::gallery_api::dispatch;
use crate::types::errors::GalleryError;
use crate::types::gallery::ApiResponse;
use crate::types::view::RenderPatch;
use crate::views::page::{page_html, patch_script};

const WINDOW_TITLE: &str = "Gallery";

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    FetchCompleted(FetchTicket, Result<ApiResponse, GalleryError>),
}

// ─── IPC handler ───

fn handle_ipc(app: &mut App, message: &str) -> Option<Navigation> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => Some(app.browser.page_ready()),
        "select_tag" => {
            let tag = msg.get("tag")?.as_str()?;
            Some(app.browser.select_tag(tag))
        }
        "select_image" => {
            let image = msg.get("image")?.as_str()?;
            Some(app.browser.select_image(image))
        }
        _ => {
            warn!(cmd, "unknown ipc command");
            None
        }
    }
}

/// Applies a navigation's immediate patches and starts its fetch.
fn start_navigation(app: &App, navigation: Navigation, proxy: &EventLoopProxy<UserEvent>) {
    send_patches(app, &navigation.patches, proxy);

    let api = app.api();
    let proxy = proxy.clone();
    let ticket = navigation.ticket;
    app.runtime().spawn(async move {
        let result = dispatch(api.as_ref(), &ticket.request).await;
        if proxy.send_event(UserEvent::FetchCompleted(ticket, result)).is_err() {
            debug!("event loop closed before fetch completed");
        }
    });
}

fn send_patches(app: &App, patches: &[RenderPatch], proxy: &EventLoopProxy<UserEvent>) {
    let layout = app.browser.layout();
    for patch in patches {
        let _ = proxy.send_event(UserEvent::EvalScript(patch_script(patch, layout)));
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(None)?;
    let state = Arc::new(Mutex::new(app));

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(tao::dpi::LogicalSize::new(1100.0, 800.0))
        .build(&event_loop)?;

    let ipc_state = Arc::clone(&state);
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("gallery".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page_html(WINDOW_TITLE).into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url("gallery://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!(message = %body.chars().take(200).collect::<String>(), "ipc");
            let mut app = match ipc_state.lock() {
                Ok(app) => app,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(navigation) = handle_ipc(&mut app, body) {
                start_navigation(&app, navigation, &ipc_proxy);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("failed to get GTK vbox")?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    error!(error = %e, "failed to apply patch");
                }
            }

            Event::UserEvent(UserEvent::FetchCompleted(ticket, result)) => {
                let mut app = match state.lock() {
                    Ok(app) => app,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let patches = app.browser.complete(&ticket, result);
                let layout = app.browser.layout();
                for patch in &patches {
                    if let Err(e) = webview.evaluate_script(&patch_script(patch, layout)) {
                        error!(error = %e, "failed to apply patch");
                    }
                }
            }

            _ => {}
        }
    });
}
