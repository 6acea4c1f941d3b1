// Gallery services
// Services provide data access, rendering helpers and configuration.

pub mod catalog;
pub mod gallery_api;
pub mod markup;
pub mod settings_engine;
