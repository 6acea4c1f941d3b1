//! Gallery desktop UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering. The gallery page is plain
//! HTML/CSS/JS inside the WebView; the Rust side owns all state and pushes
//! rendered fragments into it.

pub mod webview_app;
