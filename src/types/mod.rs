// Gallery shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod gallery;
pub mod settings;
pub mod view;
