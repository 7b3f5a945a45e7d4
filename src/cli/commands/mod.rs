//! CLI command handlers for `surveyhub`.
//!
//! Each subcommand lives in its own submodule. Handlers return
//! `Result<(), String>` with a printable `✗` message on failure.

pub mod config;
pub mod course;
pub mod courses;
pub mod site;

use std::path::{Path, PathBuf};
use survey_hub::config::Config;
use survey_hub::render::PageFormat;
use survey_hub::view::Page;
use survey_hub::{error, info};

/// Render `page` and deliver it.
///
/// With an explicit `output` the page is written there. Otherwise text goes to
/// stdout and other formats are written to the config `export_dir` as
/// `<stem>.<ext>`.
pub fn emit_page(
    page: &Page,
    format_str: &str,
    output: Option<&Path>,
    stem: &str,
    config: &Config,
) -> Result<(), String> {
    let format: PageFormat = format_str.parse().map_err(|e| format!("✗ {e}"))?;
    let renderer = format.renderer();

    let path = match output {
        Some(path) => path.to_path_buf(),
        None if format == PageFormat::Text => {
            let text = renderer.render(page).map_err(|e| {
                error!("Failed to render {stem}: {e}");
                format!("✗ Failed to render page: {e}")
            })?;
            print!("{text}");
            return Ok(());
        }
        None => PathBuf::from(&config.paths.export_dir)
            .join(format!("{stem}.{}", format.extension())),
    };

    renderer.write(page, &path).map_err(|e| {
        error!("Failed to write {}: {e}", path.display());
        format!("✗ Failed to write {}: {e}", path.display())
    })?;
    info!("Wrote {format} page to {}", path.display());
    println!("✓ Page written: {}", path.display());
    Ok(())
}
