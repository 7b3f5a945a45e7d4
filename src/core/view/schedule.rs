//! Week-grouped lesson schedule
//!
//! Lessons are paired into weeks in sequence order: the lesson at 0-based
//! index `i` belongs to week `i / 2 + 1`. The first lesson of each pair carries
//! the week label; a trailing odd lesson forms a one-row week.

use crate::core::models::{Assessment, Course, Lesson, LessonType};

/// Lessons grouped under one week label
pub const LESSONS_PER_WEEK: usize = 2;

/// Week number of the lesson at 0-based `index`
#[must_use]
pub fn week_for_index(index: usize) -> u32 {
    u32::try_from(index / LESSONS_PER_WEEK + 1).unwrap_or(u32::MAX)
}

/// Week label cell, present on the first row of each week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekLabel {
    /// Week number, from 1
    pub week: u32,
    /// Rows covered by the label cell (2, or 1 for a trailing odd lesson)
    pub row_span: usize,
}

impl WeekLabel {
    /// Display text (e.g., "Week 3")
    #[must_use]
    pub fn text(&self) -> String {
        format!("Week {}", self.week)
    }
}

/// One row of the schedule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow<'a> {
    /// Lesson sequence number
    pub number: u32,
    /// Week the lesson belongs to
    pub week: u32,
    /// Week label cell, only on the first row of a week
    pub week_label: Option<WeekLabel>,
    /// The lesson shown in this row
    pub lesson: &'a Lesson,
}

impl<'a> ScheduleRow<'a> {
    /// Class column text
    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.lesson.title
    }

    /// Bold heading of the content column
    #[must_use]
    pub fn detailed_title(&self) -> &'a str {
        self.lesson.detailed_title()
    }

    /// First content entry
    #[must_use]
    pub fn preview(&self) -> &'a str {
        self.lesson.content_preview()
    }

    /// Badge tag
    #[must_use]
    pub const fn kind(&self) -> LessonType {
        self.lesson.kind
    }

    /// Assessment column entries
    #[must_use]
    pub fn assessments(&self) -> &'a [Assessment] {
        &self.lesson.assessments
    }
}

/// Schedule table derived from a course's lessons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule<'a> {
    rows: Vec<ScheduleRow<'a>>,
}

impl<'a> Schedule<'a> {
    /// Derive the schedule of `course`; empty when it has no lessons
    #[must_use]
    pub fn from_course(course: &'a Course) -> Self {
        let total = course.lesson_count();
        let rows = course
            .lessons()
            .enumerate()
            .map(|(index, (number, lesson))| {
                let week = week_for_index(index);
                let week_label = (index % LESSONS_PER_WEEK == 0).then(|| WeekLabel {
                    week,
                    row_span: LESSONS_PER_WEEK.min(total - index),
                });
                ScheduleRow {
                    number,
                    week,
                    week_label,
                    lesson,
                }
            })
            .collect();
        Self { rows }
    }

    /// Rows in lesson order
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow<'a>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the schedule has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Week labels in order
    pub fn week_labels(&self) -> impl Iterator<Item = WeekLabel> + '_ {
        self.rows.iter().filter_map(|row| row.week_label)
    }

    /// Number of week groups
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.week_labels().count()
    }

    /// Rows belonging to `week`
    pub fn rows_in_week(&self, week: u32) -> impl Iterator<Item = &ScheduleRow<'a>> + '_ {
        self.rows.iter().filter(move |row| row.week == week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Category;

    fn course_with(lessons: usize) -> Course {
        let mut course = Course::new("demo", "Demo", Category::ModuleOne);
        for i in 0..lessons {
            course.add_lesson(Lesson::new(format!("Class {}", i + 1), LessonType::Theory));
        }
        course
    }

    #[test]
    fn test_week_for_index() {
        assert_eq!(week_for_index(0), 1);
        assert_eq!(week_for_index(1), 1);
        assert_eq!(week_for_index(2), 2);
        assert_eq!(week_for_index(5), 3);
    }

    #[test]
    fn test_empty_course_has_empty_schedule() {
        let course = course_with(0);
        let schedule = Schedule::from_course(&course);
        assert!(schedule.is_empty());
        assert_eq!(schedule.week_count(), 0);
    }

    #[test]
    fn test_even_lessons_pair_into_weeks() {
        let course = course_with(6);
        let schedule = Schedule::from_course(&course);

        let labels: Vec<WeekLabel> = schedule.week_labels().collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|label| label.row_span == 2));
        assert_eq!(labels[2].text(), "Week 3");

        let rows = schedule.rows();
        assert!(rows[0].week_label.is_some());
        assert!(rows[1].week_label.is_none());
        assert_eq!(rows[1].week, 1);
        assert_eq!(rows[2].week, 2);
    }

    #[test]
    fn test_odd_lessons_end_with_single_row_week() {
        let course = course_with(5);
        let schedule = Schedule::from_course(&course);

        let labels: Vec<WeekLabel> = schedule.week_labels().collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].row_span, 2);
        assert_eq!(labels[1].row_span, 2);
        assert_eq!(labels[2], WeekLabel { week: 3, row_span: 1 });
        assert_eq!(schedule.rows_in_week(3).count(), 1);
    }

    #[test]
    fn test_single_lesson() {
        let course = course_with(1);
        let schedule = Schedule::from_course(&course);

        assert_eq!(schedule.len(), 1);
        assert_eq!(
            schedule.rows()[0].week_label,
            Some(WeekLabel { week: 1, row_span: 1 })
        );
    }

    #[test]
    fn test_row_accessors() {
        let mut course = course_with(0);
        let mut lesson = Lesson::new("Class 1", LessonType::Practical);
        lesson.title1 = Some("Levelling".to_string());
        lesson.content = vec!["Rise and fall".to_string(), "Misclosure".to_string()];
        course.add_lesson(lesson);

        let schedule = Schedule::from_course(&course);
        let row = &schedule.rows()[0];
        assert_eq!(row.number, 1);
        assert_eq!(row.title(), "Class 1");
        assert_eq!(row.detailed_title(), "Levelling");
        assert_eq!(row.preview(), "Rise and fall");
        assert_eq!(row.kind(), LessonType::Practical);
        assert!(row.assessments().is_empty());
    }
}
