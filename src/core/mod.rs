//! Core module: catalog data, browsing state, and rendering

pub mod catalog;
pub mod config;
pub mod models;
pub mod render;
pub mod view;

/// Returns the current version of the `survey_hub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
