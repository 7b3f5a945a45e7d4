//! Course model

use super::{Icon, Lesson};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Course grouping used by the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// First module of the programme
    #[serde(rename = "Module One")]
    ModuleOne,
    /// Second module of the programme
    #[serde(rename = "Module Two")]
    ModuleTwo,
    /// Third module of the programme
    #[serde(rename = "Module Three")]
    ModuleThree,
    /// Fourth module of the programme
    #[serde(rename = "Module Four")]
    ModuleFour,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 4] = [
        Self::ModuleOne,
        Self::ModuleTwo,
        Self::ModuleThree,
        Self::ModuleFour,
    ];

    /// Display label (e.g., "Module One")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ModuleOne => "Module One",
            Self::ModuleTwo => "Module Two",
            Self::ModuleThree => "Module Three",
            Self::ModuleFour => "Module Four",
        }
    }

    /// URL/CLI friendly slug (e.g., "module-one")
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ModuleOne => "module-one",
            Self::ModuleTwo => "module-two",
            Self::ModuleThree => "module-three",
            Self::ModuleFour => "module-four",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the label or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: '{s}'"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary figures shown in the course page header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseStats {
    /// Number of classes
    pub classes: u32,
    /// Number of weeks
    pub weeks: u32,
    /// Number of instrument categories covered
    pub categories: u32,
    /// Practical exercise count, preformatted (e.g., "12+")
    pub exercises: String,
}

/// One course in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Stable identifier used for lookup and routing (e.g., "gis")
    pub id: String,

    /// Listing title (e.g., "GIS")
    pub title: String,

    /// Course page heading (e.g., "Geographic Information Systems")
    pub name: String,

    /// Description shown on the card and the course page
    pub description: String,

    /// Number of lesson modules
    pub modules: u32,

    /// Total instructional hours
    pub hours: u32,

    /// Catalog grouping
    pub category: Category,

    /// Number of weeks the course spans
    pub weeks: u32,

    /// Course icon
    pub icon: Icon,

    /// CSS background for the course card icon
    pub gradient: String,

    /// Header figures
    pub stats: CourseStats,

    /// Lessons keyed by 1-based sequence number; keys are always contiguous
    lessons: BTreeMap<u32, Lesson>,
}

impl Course {
    /// Create a course with no lessons
    ///
    /// # Arguments
    /// * `id` - Stable identifier
    /// * `title` - Listing title, also used as the page heading
    /// * `category` - Catalog grouping
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            name: title.clone(),
            title,
            description: String::new(),
            modules: 0,
            hours: 0,
            category,
            weeks: 0,
            icon: Icon::Book,
            gradient: String::new(),
            stats: CourseStats::default(),
            lessons: BTreeMap::new(),
        }
    }

    /// Append a lesson after the last one
    ///
    /// # Returns
    /// The sequence number assigned to the lesson
    pub fn add_lesson(&mut self, lesson: Lesson) -> u32 {
        let number = self.lessons.keys().next_back().map_or(1, |last| last + 1);
        self.lessons.insert(number, lesson);
        number
    }

    /// Get a lesson by its sequence number
    #[must_use]
    pub fn lesson(&self, number: u32) -> Option<&Lesson> {
        self.lessons.get(&number)
    }

    /// Iterate lessons in ascending sequence order
    pub fn lessons(&self) -> impl Iterator<Item = (u32, &Lesson)> + '_ {
        self.lessons.iter().map(|(number, lesson)| (*number, lesson))
    }

    /// Number of lessons
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Route of the course page (e.g., "/course/gis")
    #[must_use]
    pub fn route(&self) -> String {
        format!("/course/{}", self.id)
    }

    /// Case-insensitive substring match against title and description
    ///
    /// The term is not trimmed; an empty term matches every course.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::LessonType;

    fn sample() -> Course {
        let mut course = Course::new("gis", "GIS", Category::ModuleFour);
        course.description = "Spatial analysis and database management.".to_string();
        course
    }

    #[test]
    fn test_course_creation() {
        let course = sample();

        assert_eq!(course.id, "gis");
        assert_eq!(course.title, "GIS");
        assert_eq!(course.name, "GIS");
        assert_eq!(course.category, Category::ModuleFour);
        assert_eq!(course.lesson_count(), 0);
        assert_eq!(course.route(), "/course/gis");
    }

    #[test]
    fn test_add_lesson_numbers_from_one() {
        let mut course = sample();

        assert_eq!(course.add_lesson(Lesson::new("Class 1", LessonType::Theory)), 1);
        assert_eq!(course.add_lesson(Lesson::new("Class 2", LessonType::Practical)), 2);

        let numbers: Vec<u32> = course.lessons().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(course.lesson(2).map(|l| l.title.as_str()), Some("Class 2"));
        assert!(course.lesson(3).is_none());
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        let course = sample();

        assert!(course.matches_search("gis"));
        assert!(course.matches_search("DATABASE"));
        assert!(course.matches_search(""));
        assert!(!course.matches_search("survey"));
    }

    #[test]
    fn test_matches_search_does_not_trim() {
        let course = sample();

        // " analysis" occurs with its leading space; "  analysis" does not
        assert!(course.matches_search(" analysis"));
        assert!(!course.matches_search("  analysis"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Module One".parse::<Category>(), Ok(Category::ModuleOne));
        assert_eq!("module three".parse::<Category>(), Ok(Category::ModuleThree));
        assert_eq!("module-four".parse::<Category>(), Ok(Category::ModuleFour));
        assert!("Module Five".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::ModuleTwo.to_string(), "Module Two");
        assert_eq!(Category::ModuleTwo.slug(), "module-two");
    }
}
