//! Lesson model

use super::Icon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of class a lesson is, shown as a badge in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    /// Classroom theory
    Theory,
    /// Hands-on field or lab work
    Practical,
    /// Examination or graded project
    Assessment,
}

impl LessonType {
    /// Badge label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Practical => "Practical",
            Self::Assessment => "Assessment",
        }
    }

    /// Lowercase tag, as written in course data
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practical => "practical",
            Self::Assessment => "assessment",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One way a lesson is evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assessment {
    /// Icon shown next to the label
    pub icon: Icon,
    /// Description (e.g., "Short quiz")
    pub label: String,
}

impl Assessment {
    /// Create a new assessment method
    #[must_use]
    pub fn new(icon: Icon, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

/// One schedule entry within a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lesson {
    /// Short label (e.g., "Class 1")
    pub title: String,

    /// Detailed title (e.g., "Introduction to Surveying Instruments")
    #[serde(default)]
    pub title1: Option<String>,

    /// Learning objectives, in order
    #[serde(default)]
    pub objectives: Vec<String>,

    /// Content covered, in order; the first entry previews the lesson
    #[serde(default)]
    pub content: Vec<String>,

    /// Hands-on activity
    #[serde(default)]
    pub practical: String,

    /// Assessment methods; may be empty
    #[serde(default)]
    pub assessments: Vec<Assessment>,

    /// Badge tag
    #[serde(rename = "type")]
    pub kind: LessonType,
}

impl Lesson {
    /// Create a lesson with a title and kind and no content
    #[must_use]
    pub fn new(title: impl Into<String>, kind: LessonType) -> Self {
        Self {
            title: title.into(),
            title1: None,
            objectives: Vec::new(),
            content: Vec::new(),
            practical: String::new(),
            assessments: Vec::new(),
            kind,
        }
    }

    /// Detailed title, falling back to the short title
    #[must_use]
    pub fn detailed_title(&self) -> &str {
        self.title1.as_deref().unwrap_or(&self.title)
    }

    /// First content entry, or an empty string
    #[must_use]
    pub fn content_preview(&self) -> &str {
        self.content.first().map_or("", String::as_str)
    }

    /// Whether any assessment methods are listed
    #[must_use]
    pub fn has_assessments(&self) -> bool {
        !self.assessments.is_empty()
    }
}
