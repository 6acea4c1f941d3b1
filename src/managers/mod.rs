// Gallery state managers
// Managers handle stateful operations: navigation between views and request generations.

pub mod gallery_browser;
pub mod request_tracker;
