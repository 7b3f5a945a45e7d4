//! Library for the surveying education hub
//! Course catalog, browsing state, and page rendering shared by the CLI and site builder

pub mod core;
pub mod logger;

pub use crate::core::{catalog, config, get_version, models, render, view};
