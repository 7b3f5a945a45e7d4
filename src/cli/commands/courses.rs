//! Courses command handler
//!
//! Lists the catalog under a category filter and search term.

use super::emit_page;
use std::path::Path;
use survey_hub::catalog::Catalog;
use survey_hub::config::Config;
use survey_hub::view::{CategoryFilter, ViewController};
use survey_hub::{error, info};

/// Run the courses command
pub fn run(
    category: &str,
    search: &str,
    format: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let category: CategoryFilter = category.parse().map_err(|e| {
        error!("Invalid category filter: {e}");
        format!("✗ {e}")
    })?;

    let mut view = ViewController::new(Catalog::global());
    view.select_category(category);
    view.set_search_term(search);

    let visible = view.filtered_courses().len();
    info!("{visible} of {} courses match", Catalog::global().len());

    emit_page(&view.page(), format, output, "courses", config)
}
