//! Page format implementations
//!
//! Renderers for terminal text, Markdown, and HTML.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::HtmlRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use super::PageRenderer;
use std::fmt;
use std::str::FromStr;

/// Supported page formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// Markdown tables and lists
    Markdown,
    /// Standalone HTML page
    Html,
}

impl PageFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Renderer for this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            Self::Text => Box::new(TextRenderer::new()),
            Self::Markdown => Box::new(MarkdownRenderer::new()),
            Self::Html => Box::new(HtmlRenderer::new()),
        }
    }
}

impl FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown page format: {s}")),
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("MD".parse::<PageFormat>(), Ok(PageFormat::Markdown));
        assert_eq!("htm".parse::<PageFormat>(), Ok(PageFormat::Html));
        assert_eq!("txt".parse::<PageFormat>(), Ok(PageFormat::Text));
        assert!("pdf".parse::<PageFormat>().is_err());
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(PageFormat::Markdown.extension(), "md");
        assert_eq!(PageFormat::Html.to_string(), "html");
        assert_eq!(PageFormat::default(), PageFormat::Text);
    }
}
