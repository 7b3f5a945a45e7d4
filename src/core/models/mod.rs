//! Data models for `SurveyHub`

pub mod course;
pub mod icon;
pub mod lesson;

pub use course::{Category, Course, CourseStats};
pub use icon::Icon;
pub use lesson::{Assessment, Lesson, LessonType};
