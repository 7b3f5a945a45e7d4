//! View state tags and user events

use super::filter::CategoryFilter;
use crate::core::models::Course;
use std::fmt;
use std::str::FromStr;

/// Course page tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Week-grouped lesson table
    #[default]
    Schedule,
    /// Instruments overview
    Instruments,
    /// Assessment methods
    Assessment,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Self; 3] = [Self::Schedule, Self::Instruments, Self::Assessment];

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Schedule => "Course Schedule",
            Self::Instruments => "Instruments Overview",
            Self::Assessment => "Assessment Methods",
        }
    }

    /// Short key used on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Instruments => "instruments",
            Self::Assessment => "assessment",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tab: '{s}'. Use: schedule, instruments, or assessment"))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Week selector state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekFilter {
    /// "All"
    #[default]
    All,
    /// A single week, from 1
    Week(u32),
}

impl WeekFilter {
    /// Selector buttons for `course`: "All" then weeks `1..=course.weeks`
    #[must_use]
    pub fn options(course: &Course) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain((1..=course.weeks).map(Self::Week))
            .collect()
    }

    /// Button label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Week(week) => week.to_string(),
        }
    }
}

impl FromStr for WeekFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match trimmed.parse::<u32>() {
            Ok(week) if week > 0 => Ok(Self::Week(week)),
            _ => Err(format!("Invalid week: '{s}'. Use 'all' or a week number from 1")),
        }
    }
}

impl fmt::Display for WeekFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Screen currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Course catalog
    #[default]
    Catalog,
    /// Course page for the given id
    Course(String),
    /// Navigation to an id that is not in the catalog
    CourseNotFound(String),
}

/// User interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Search box text changed
    SearchChanged(String),
    /// Category button clicked
    CategorySelected(CategoryFilter),
    /// Course card clicked (or course route entered)
    CourseOpened(String),
    /// "Back to Courses" clicked
    BackToCatalog,
    /// Tab button clicked
    TabSelected(Tab),
    /// Week button clicked
    WeekSelected(WeekFilter),
    /// "View Details" clicked for a lesson
    LessonSelected(u32),
    /// Detail panel closed
    DetailClosed,
}
