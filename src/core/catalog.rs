//! Course catalog store
//!
//! The catalog is compiled into the binary as one TOML document per course,
//! parsed and validated once on first access, and never mutated afterwards.

use crate::core::models::{Assessment, Category, Course, CourseStats, Icon, Lesson, LessonType};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Course documents in catalog declaration order
const COURSE_SOURCES: [&str; 8] = [
    include_str!("../../assets/courses/survey_instruments.toml"),
    include_str!("../../assets/courses/cartography.toml"),
    include_str!("../../assets/courses/topographical_survey.toml"),
    include_str!("../../assets/courses/engineering_survey_1.toml"),
    include_str!("../../assets/courses/control_survey.toml"),
    include_str!("../../assets/courses/land_laws_1.toml"),
    include_str!("../../assets/courses/cadastral_survey.toml"),
    include_str!("../../assets/courses/gis.toml"),
];

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_sources(&COURSE_SOURCES).expect("Failed to load compiled-in course catalog")
});

/// Errors raised by catalog loading and lookup
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No course with the requested id exists
    #[error("Course not found: '{id}'")]
    NotFound {
        /// Requested id
        id: String,
    },
    /// A course document is not valid TOML or does not match the schema
    #[error("Failed to parse course data: {0}")]
    Parse(#[from] toml::de::Error),
    /// A course document parsed but breaks a catalog invariant
    #[error("Invalid course '{course}': {reason}")]
    Invalid {
        /// Offending course id
        course: String,
        /// What is wrong
        reason: String,
    },
}

/// Lesson entry as written in a course document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LessonRecord {
    number: u32,
    title: String,
    #[serde(default)]
    title1: Option<String>,
    #[serde(rename = "type")]
    kind: LessonType,
    #[serde(default)]
    objectives: Vec<String>,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    practical: String,
    #[serde(default)]
    assessments: Vec<Assessment>,
}

impl From<LessonRecord> for Lesson {
    fn from(record: LessonRecord) -> Self {
        let mut lesson = Self::new(record.title, record.kind);
        lesson.title1 = record.title1;
        lesson.objectives = record.objectives;
        lesson.content = record.content;
        lesson.practical = record.practical;
        lesson.assessments = record.assessments;
        lesson
    }
}

/// Course document layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseRecord {
    id: String,
    title: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    modules: u32,
    #[serde(default)]
    hours: u32,
    category: Category,
    #[serde(default)]
    weeks: u32,
    icon: Icon,
    #[serde(default)]
    gradient: String,
    #[serde(default)]
    stats: CourseStats,
    #[serde(default)]
    lessons: Vec<LessonRecord>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = CatalogError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(CatalogError::Invalid {
                course: record.title,
                reason: "empty id".to_string(),
            });
        }

        let mut lessons = record.lessons;
        lessons.sort_by_key(|l| l.number);
        for (expected, entry) in (1..).zip(&lessons) {
            if entry.number != expected {
                return Err(CatalogError::Invalid {
                    course: record.id,
                    reason: format!(
                        "lesson numbers must be contiguous from 1; expected {expected}, found {}",
                        entry.number
                    ),
                });
            }
        }

        let mut course = Self::new(record.id, record.title, record.category);
        if let Some(name) = record.name {
            course.name = name;
        }
        course.description = record.description;
        course.modules = record.modules;
        course.hours = record.hours;
        course.weeks = record.weeks;
        course.icon = record.icon;
        course.gradient = record.gradient;
        course.stats = record.stats;
        for entry in lessons {
            course.add_lesson(entry.into());
        }
        Ok(course)
    }
}

/// Totals shown on the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Number of courses
    pub course_count: usize,
    /// Sum of module counts across courses
    pub total_modules: u32,
    /// Sum of instructional hours across courses
    pub total_hours: u32,
}

/// Immutable, ordered collection of courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// The compiled-in catalog
    ///
    /// # Panics
    /// Panics on first access if the embedded course data is invalid. The data
    /// is compiled into the binary and covered by tests.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Build a catalog from already-constructed courses
    ///
    /// # Errors
    /// Returns `CatalogError::Invalid` if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::Invalid {
                    course: course.id.clone(),
                    reason: "duplicate course id".to_string(),
                });
            }
        }
        Ok(Self { courses })
    }

    /// Parse and validate course documents, keeping their order
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` for malformed documents and
    /// `CatalogError::Invalid` for duplicate ids or non-contiguous lesson numbers.
    pub fn from_sources(sources: &[&str]) -> Result<Self, CatalogError> {
        let courses = sources
            .iter()
            .map(|source| {
                let record: CourseRecord = toml::from_str(source)?;
                Course::try_from(record)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(courses)
    }

    /// All courses in declaration order
    #[must_use]
    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` if no course has that id.
    pub fn get_course_by_id(&self, id: &str) -> Result<&Course, CatalogError> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Totals across the catalog
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            course_count: self.courses.len(),
            total_modules: self.courses.iter().map(|c| c.modules).sum(),
            total_hours: self.courses.iter().map(|c| c.hours).sum(),
        }
    }
}
