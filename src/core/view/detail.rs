//! Lesson detail panel and selection notifications

use crate::core::models::{Assessment, Lesson};

/// Shown in place of an empty assessment list
pub const NO_ASSESSMENTS: &str = "No assessments available";

/// Assessment section of the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentsView<'a> {
    /// At least one method
    Methods(&'a [Assessment]),
    /// No methods; render [`NO_ASSESSMENTS`]
    Empty,
}

/// Expanded view of the selected lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPanel<'a> {
    /// Lesson sequence number
    pub number: u32,
    /// The selected lesson
    pub lesson: &'a Lesson,
}

impl<'a> DetailPanel<'a> {
    /// Panel for `lesson`
    #[must_use]
    pub const fn new(number: u32, lesson: &'a Lesson) -> Self {
        Self { number, lesson }
    }

    /// Panel heading
    #[must_use]
    pub fn title(&self) -> &'a str {
        self.lesson.detailed_title()
    }

    /// Learning objectives
    #[must_use]
    pub fn objectives(&self) -> &'a [String] {
        &self.lesson.objectives
    }

    /// Full content list
    #[must_use]
    pub fn content(&self) -> &'a [String] {
        &self.lesson.content
    }

    /// Practical activity text
    #[must_use]
    pub fn practical(&self) -> &'a str {
        &self.lesson.practical
    }

    /// Assessment methods, or the empty marker
    #[must_use]
    pub fn assessments(&self) -> AssessmentsView<'a> {
        if self.lesson.assessments.is_empty() {
            AssessmentsView::Empty
        } else {
            AssessmentsView::Methods(&self.lesson.assessments)
        }
    }
}

/// Notification sent to selection subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Course the selection belongs to
    pub course_id: String,
    /// Previously selected lesson number
    pub previous: Option<u32>,
    /// Newly selected lesson number; `None` when the panel closed
    pub current: Option<u32>,
}

impl SelectionChange {
    /// Whether a lesson is now selected (the view should bring the panel into view)
    #[must_use]
    pub const fn opened(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Icon, LessonType};

    #[test]
    fn test_empty_assessments_fall_back() {
        let lesson = Lesson::new("Class 4", LessonType::Theory);
        let panel = DetailPanel::new(4, &lesson);

        assert_eq!(panel.assessments(), AssessmentsView::Empty);
        assert_eq!(panel.title(), "Class 4");
        assert!(panel.objectives().is_empty());
    }

    #[test]
    fn test_assessment_methods_exposed() {
        let mut lesson = Lesson::new("Class 1", LessonType::Assessment);
        lesson.assessments = vec![Assessment::new(Icon::Pen, "Written examination")];
        let panel = DetailPanel::new(1, &lesson);

        match panel.assessments() {
            AssessmentsView::Methods(methods) => assert_eq!(methods[0].label, "Written examination"),
            AssessmentsView::Empty => panic!("expected assessment methods"),
        }
    }

    #[test]
    fn test_selection_change_opened() {
        let change = SelectionChange {
            course_id: "gis".to_string(),
            previous: Some(1),
            current: None,
        };
        assert!(!change.opened());
    }
}
