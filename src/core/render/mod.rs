//! Page rendering
//!
//! Turns a [`Page`] into terminal text, Markdown, or HTML, and builds the
//! static site out of HTML pages.

pub mod formats;
pub mod site;

pub use formats::{HtmlRenderer, MarkdownRenderer, PageFormat, TextRenderer};
pub use site::{SiteBuilder, SiteSummary};

use crate::core::models::Icon;
use crate::core::view::Page;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Site heading
pub const SITE_TITLE: &str = "Surveying Education Hub";

/// Site subtitle
pub const SITE_SUBTITLE: &str = "Comprehensive courses for surveying professionals and students";

/// Enrolment figure shown on the catalog page
pub const STUDENTS_ENROLLED: &str = "2,500+";

/// Instructor figure shown on the catalog page
pub const EXPERT_INSTRUCTORS: &str = "15+";

/// Glyph standing in for an icon in text and HTML output
#[must_use]
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::DraftingCompass | Icon::Compass => "🧭",
        Icon::Book => "📘",
        Icon::Clock => "🕒",
        Icon::Tools => "🛠",
        Icon::GraduationCap => "🎓",
        Icon::Gavel => "⚖",
        Icon::Map => "🗺",
        Icon::Mountain => "⛰",
        Icon::PenToSquare | Icon::Pen => "✎",
        Icon::CalendarAlt => "📅",
        Icon::Comments => "💬",
        Icon::UserCheck => "✔",
        Icon::Eye => "👁",
        Icon::Bullseye => "🎯",
        Icon::BookOpen => "📖",
        Icon::ClipboardList => "📋",
        Icon::Search => "🔍",
        Icon::ArrowRight => "→",
        Icon::ArrowLeft => "←",
    }
}

/// Trait for page renderers
pub trait PageRenderer {
    /// Render a page to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, page: &Page) -> Result<String, Box<dyn Error>>;

    /// Render a page to a file, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn write(&self, page: &Page, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(page)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
