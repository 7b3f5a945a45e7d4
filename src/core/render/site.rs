//! Static site builder
//!
//! Drives a [`ViewController`] through every screen of the catalog and writes
//! each resulting page as HTML:
//!
//! - `index.html`: the catalog with the default filter
//! - `category/<slug>.html`: the catalog narrowed to one category
//! - `course/<id>.html`: each course on the schedule tab
//! - `course/<id>/<tab>.html`: each course on its other tabs
//! - `course/<id>/lesson-<n>.html`: each course with lesson `n` selected
//! - `assets/site.css`: the shared stylesheet
//!
//! Search is not part of the static site; the `courses` command covers it.

use super::formats::html::{category_path, lesson_path, tab_path};
use super::{HtmlRenderer, PageRenderer};
use crate::core::catalog::Catalog;
use crate::core::view::{CategoryFilter, Tab, ViewController};
use crate::{debug, info};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Embedded site stylesheet
const SITE_CSS: &str = include_str!("../../../assets/site.css");

/// Stylesheet path relative to the site root
pub const STYLESHEET_PATH: &str = "assets/site.css";

/// What a site build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Output directory
    pub out_dir: PathBuf,
    /// Single-category catalog pages written
    pub categories: usize,
    /// Course pages written
    pub courses: usize,
    /// Non-schedule tab pages written
    pub tabs: usize,
    /// Lesson detail pages written
    pub lessons: usize,
    /// All HTML pages written, including the index
    pub pages_written: usize,
}

/// Writes the catalog as a static HTML site
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    out_dir: PathBuf,
}

impl SiteBuilder {
    /// Builder writing under `out_dir`
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Output directory
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Render and write every page of `catalog`
    ///
    /// # Errors
    /// Returns an error if a page fails to render, a course cannot be opened,
    /// or a file cannot be written.
    pub fn build(&self, catalog: &Catalog) -> Result<SiteSummary, Box<dyn Error>> {
        info!("Building site in {}", self.out_dir.display());

        let stylesheet = self.out_dir.join(STYLESHEET_PATH);
        if let Some(parent) = stylesheet.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&stylesheet, SITE_CSS)?;

        let mut view = ViewController::new(catalog);
        let root_renderer = HtmlRenderer::new();
        let nested_renderer = HtmlRenderer::with_root("../");
        let deep_renderer = HtmlRenderer::with_root("../../");
        let mut categories = 0;

        for category in CategoryFilter::options() {
            view.select_category(category);
            let path = self.out_dir.join(category_path(category));
            match category {
                CategoryFilter::All => root_renderer.write(&view.page(), &path)?,
                CategoryFilter::Only(_) => {
                    nested_renderer.write(&view.page(), &path)?;
                    categories += 1;
                }
            }
            debug!("Wrote {}", path.display());
        }
        view.select_category(CategoryFilter::All);

        let mut tabs = 0;
        let mut lessons = 0;

        for course in catalog.list_courses() {
            view.open_course(&course.id)?;
            for tab in Tab::ALL {
                view.select_tab(tab)?;
                let path = self.out_dir.join(tab_path(&course.id, tab));
                if tab == Tab::Schedule {
                    nested_renderer.write(&view.page(), &path)?;
                } else {
                    deep_renderer.write(&view.page(), &path)?;
                    tabs += 1;
                }
                debug!("Wrote {}", path.display());
            }
            view.select_tab(Tab::Schedule)?;

            for (number, _) in course.lessons() {
                view.select_lesson(number)?;
                let path = self.out_dir.join(lesson_path(&course.id, number));
                deep_renderer.write(&view.page(), &path)?;
                lessons += 1;
            }
            view.back();
        }

        let courses = catalog.len();
        let summary = SiteSummary {
            out_dir: self.out_dir.clone(),
            categories,
            courses,
            tabs,
            lessons,
            pages_written: 1 + categories + courses + tabs + lessons,
        };
        info!(
            "Site written: {} pages ({} categories, {} courses, {} tabs, {} lessons)",
            summary.pages_written, summary.categories, summary.courses, summary.tabs, summary.lessons
        );
        Ok(summary)
    }
}
