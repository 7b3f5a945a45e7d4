//! Catalog filtering by category and search text

use crate::core::models::{Category, Course};
use std::fmt;
use std::str::FromStr;

/// Label of the catch-all category button
pub const ALL_COURSES: &str = "All Courses";

/// Category button state: every course, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// "All Courses"
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => ALL_COURSES,
            Self::Only(category) => category.label(),
        }
    }

    /// Kebab-case key ("all" for every course)
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    /// Whether a course in `category` passes this filter
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Accepts "all", "All Courses", or anything [`Category`] parses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case(ALL_COURSES) {
            return Ok(Self::All);
        }
        trimmed.parse::<Category>().map(Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog filter state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseFilter {
    /// Active category button
    pub category: CategoryFilter,
    /// Search box contents, matched as typed
    pub search_term: String,
}

impl CourseFilter {
    /// Create a filter
    #[must_use]
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// Whether `course` is visible under this filter
    ///
    /// Both predicates must hold: the category admits the course, and the
    /// search term occurs (case-insensitively) in its title or description.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        self.category.admits(course.category) && course.matches_search(&self.search_term)
    }

    /// Whether this filter is the catalog's initial state
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search_term.is_empty()
    }
}

/// Visible subset of `courses`, in their original order
#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    courses.iter().filter(|course| filter.matches(course)).collect()
}
