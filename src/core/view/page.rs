//! Render-ready pages derived from view state

use super::detail::DetailPanel;
use super::filter::CategoryFilter;
use super::schedule::Schedule;
use super::state::{Tab, WeekFilter};
use crate::core::catalog::CatalogSummary;
use crate::core::models::Course;

/// Shown on the not-found page
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Shown when the catalog filter leaves no courses
pub const NO_MATCHING_COURSES: &str = "No courses match your search";

/// A selectable button and whether it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<T> {
    /// Value the button selects
    pub value: T,
    /// Whether it is the current selection
    pub active: bool,
}

impl<T: PartialEq + Copy> Choice<T> {
    /// Mark each option active if it equals `current`
    #[must_use]
    pub fn mark(options: impl IntoIterator<Item = T>, current: T) -> Vec<Self> {
        options
            .into_iter()
            .map(|value| Self {
                value,
                active: value == current,
            })
            .collect()
    }
}

/// Catalog screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage<'a> {
    /// Header totals
    pub summary: CatalogSummary,
    /// Category buttons
    pub categories: Vec<Choice<CategoryFilter>>,
    /// Search box contents
    pub search_term: String,
    /// Visible courses in catalog order
    pub courses: Vec<&'a Course>,
}

/// Course screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePage<'a> {
    /// The open course
    pub course: &'a Course,
    /// Tab buttons
    pub tabs: Vec<Choice<Tab>>,
    /// Week selector buttons
    pub weeks: Vec<Choice<WeekFilter>>,
    /// Schedule table, present only on the schedule tab
    pub schedule: Option<Schedule<'a>>,
    /// Detail panel, present only while a lesson is selected
    pub detail: Option<DetailPanel<'a>>,
}

/// Whatever the current screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    /// Catalog listing
    Catalog(CatalogPage<'a>),
    /// Course page
    Course(CoursePage<'a>),
    /// Fallback for an unknown course id
    NotFound {
        /// Requested id
        id: String,
    },
}

impl Page<'_> {
    /// Document title
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Catalog(_) => "Surveying Education Hub".to_string(),
            Self::Course(page) => page.course.name.clone(),
            Self::NotFound { .. } => COURSE_NOT_FOUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_marks_current() {
        let choices = Choice::mark(Tab::ALL, Tab::Instruments);
        let active: Vec<Tab> = choices.iter().filter(|c| c.active).map(|c| c.value).collect();
        assert_eq!(active, vec![Tab::Instruments]);
        assert_eq!(choices.len(), 3);
    }

    #[test]
    fn test_not_found_title() {
        let page = Page::NotFound {
            id: "x".to_string(),
        };
        assert_eq!(page.title(), COURSE_NOT_FOUND);
    }
}
