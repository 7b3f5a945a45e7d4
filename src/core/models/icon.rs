//! Icon identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon identifier attached to courses, assessments, and page sections
///
/// The core never interprets an icon; renderers resolve it to a glyph or a
/// stylesheet class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Drafting compass (site logo, control survey)
    DraftingCompass,
    /// Closed book
    Book,
    /// Clock
    Clock,
    /// Tools
    Tools,
    /// Graduation cap
    GraduationCap,
    /// Gavel
    Gavel,
    /// Compass
    Compass,
    /// Folded map
    Map,
    /// Mountain
    Mountain,
    /// Pen on a square
    PenToSquare,
    /// Calendar
    CalendarAlt,
    /// Speech bubbles
    Comments,
    /// Pen
    Pen,
    /// User with a check mark
    UserCheck,
    /// Eye
    Eye,
    /// Bullseye
    Bullseye,
    /// Open book
    BookOpen,
    /// Clipboard with a list
    ClipboardList,
    /// Magnifying glass
    Search,
    /// Arrow pointing right
    ArrowRight,
    /// Arrow pointing left
    ArrowLeft,
}

impl Icon {
    /// Kebab-case identifier, as written in course data
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DraftingCompass => "drafting-compass",
            Self::Book => "book",
            Self::Clock => "clock",
            Self::Tools => "tools",
            Self::GraduationCap => "graduation-cap",
            Self::Gavel => "gavel",
            Self::Compass => "compass",
            Self::Map => "map",
            Self::Mountain => "mountain",
            Self::PenToSquare => "pen-to-square",
            Self::CalendarAlt => "calendar-alt",
            Self::Comments => "comments",
            Self::Pen => "pen",
            Self::UserCheck => "user-check",
            Self::Eye => "eye",
            Self::Bullseye => "bullseye",
            Self::BookOpen => "book-open",
            Self::ClipboardList => "clipboard-list",
            Self::Search => "search",
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        icon: Icon,
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let holder: Holder = toml::from_str("icon = \"pen-to-square\"").unwrap();
        assert_eq!(holder.icon, Icon::PenToSquare);
    }

    #[test]
    fn test_name_matches_serialized_form() {
        let holder: Holder = toml::from_str("icon = \"clipboard-list\"").unwrap();
        assert_eq!(holder.icon.name(), "clipboard-list");
        assert_eq!(Icon::DraftingCompass.to_string(), "drafting-compass");
    }

    #[test]
    fn test_unknown_icon_rejected() {
        assert!(toml::from_str::<Holder>("icon = \"rocket\"").is_err());
    }
}
