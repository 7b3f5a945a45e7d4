//! Site command handler

use std::path::{Path, PathBuf};
use survey_hub::catalog::Catalog;
use survey_hub::config::Config;
use survey_hub::render::SiteBuilder;
use survey_hub::{error, verbose};

/// Build the static site into `out`, or the config `site_dir`
pub fn run(out: Option<&Path>, config: &Config) -> Result<(), String> {
    let out_dir = out.map_or_else(|| PathBuf::from(&config.paths.site_dir), Path::to_path_buf);

    let summary = SiteBuilder::new(&out_dir)
        .build(Catalog::global())
        .map_err(|e| {
            error!("Site build failed in {}: {e}", out_dir.display());
            format!("✗ Failed to build site in {}: {e}", out_dir.display())
        })?;

    verbose!(
        "{} category pages, {} course pages, {} tab pages, {} lesson pages",
        summary.categories,
        summary.courses,
        summary.tabs,
        summary.lessons
    );
    println!(
        "✓ Site built: {} pages in {}",
        summary.pages_written,
        summary.out_dir.display()
    );
    Ok(())
}
