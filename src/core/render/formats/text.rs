//! Terminal text renderer

use crate::core::models::{Assessment, Icon};
use crate::core::render::{
    icon_glyph, PageRenderer, EXPERT_INSTRUCTORS, SITE_SUBTITLE, SITE_TITLE, STUDENTS_ENROLLED,
};
use crate::core::view::{
    AssessmentsView, CatalogPage, Choice, CoursePage, DetailPanel, Page, Schedule, COURSE_NOT_FOUND,
    NO_ASSESSMENTS, NO_MATCHING_COURSES,
};
use std::error::Error;
use std::fmt::Write;

/// Width of the week column in the schedule table
const WEEK_WIDTH: usize = 8;
/// Width of the class column in the schedule table
const CLASS_WIDTH: usize = 10;
/// Width of the badge column in the schedule table
const TYPE_WIDTH: usize = 12;

/// Plain text renderer for terminal output
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn choices<T: Copy>(choices: &[Choice<T>], label: impl Fn(T) -> String) -> String {
        choices
            .iter()
            .map(|choice| {
                if choice.active {
                    format!("[{}]", label(choice.value))
                } else {
                    label(choice.value)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn assessments_inline(assessments: &[Assessment]) -> String {
        assessments
            .iter()
            .map(|a| format!("{} {}", icon_glyph(a.icon), a.label))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_catalog(page: &CatalogPage) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {SITE_TITLE}", icon_glyph(Icon::DraftingCompass));
        let _ = writeln!(out, "{SITE_SUBTITLE}\n");
        let _ = writeln!(
            out,
            "  {}+ Specialized Courses | {}+ Learning Modules | {STUDENTS_ENROLLED} Students Enrolled | {EXPERT_INSTRUCTORS} Expert Instructors\n",
            page.summary.course_count, page.summary.total_modules
        );

        if !page.search_term.is_empty() {
            let _ = writeln!(out, "Search: \"{}\"", page.search_term);
        }
        let _ = writeln!(
            out,
            "Categories: {}\n",
            Self::choices(&page.categories, |c| c.label().to_string())
        );

        if page.courses.is_empty() {
            let _ = writeln!(out, "{NO_MATCHING_COURSES}");
            return out;
        }

        for course in &page.courses {
            let _ = writeln!(
                out,
                "{} {} ({}) - {}",
                icon_glyph(course.icon),
                course.title,
                course.id,
                course.category
            );
            let _ = writeln!(out, "   {}", course.description);
            let _ = writeln!(out, "   {} Modules · {} Hours\n", course.modules, course.hours);
        }
        out
    }

    fn render_schedule(out: &mut String, schedule: &Schedule) {
        if schedule.is_empty() {
            let _ = writeln!(out, "(no lessons scheduled)");
            return;
        }

        let _ = writeln!(
            out,
            "{:<WEEK_WIDTH$}{:<CLASS_WIDTH$}{:<TYPE_WIDTH$}Content / Assessment",
            "Week", "Class", "Type"
        );
        for row in schedule.rows() {
            let week = row.week_label.map(|label| label.text()).unwrap_or_default();
            let _ = writeln!(
                out,
                "{week:<WEEK_WIDTH$}{:<CLASS_WIDTH$}{:<TYPE_WIDTH$}{}",
                row.title(),
                row.kind().label(),
                row.detailed_title()
            );
            let indent = WEEK_WIDTH + CLASS_WIDTH + TYPE_WIDTH;
            if !row.preview().is_empty() {
                let _ = writeln!(out, "{:indent$}{}", "", row.preview());
            }
            if !row.assessments().is_empty() {
                let _ = writeln!(
                    out,
                    "{:indent$}{}",
                    "",
                    Self::assessments_inline(row.assessments())
                );
            }
        }
    }

    fn render_detail(out: &mut String, detail: &DetailPanel) {
        let _ = writeln!(out, "\n=== Lesson {}: {} ===", detail.number, detail.title());

        let _ = writeln!(out, "\nLearning Objectives");
        for objective in detail.objectives() {
            let _ = writeln!(out, "  • {objective}");
        }

        let _ = writeln!(out, "\nContent Covered");
        for item in detail.content() {
            let _ = writeln!(out, "  • {item}");
        }

        let _ = writeln!(out, "\nPractical Activities");
        let _ = writeln!(out, "  {}", detail.practical());

        let _ = writeln!(out, "\nAssessment");
        match detail.assessments() {
            AssessmentsView::Methods(methods) => {
                for method in methods {
                    let _ = writeln!(out, "  {} {}", icon_glyph(method.icon), method.label);
                }
            }
            AssessmentsView::Empty => {
                let _ = writeln!(out, "  {NO_ASSESSMENTS}");
            }
        }
    }

    fn render_course(page: &CoursePage) -> String {
        let mut out = String::new();
        let course = page.course;

        let _ = writeln!(out, "← Back to Courses\n");
        let _ = writeln!(out, "{} {}", icon_glyph(course.icon), course.name);
        let _ = writeln!(out, "{}\n", course.description);
        let _ = writeln!(
            out,
            "  {} Classes | {} Weeks | {} Instrument Categories | {} Practical Exercises\n",
            course.stats.classes, course.stats.weeks, course.stats.categories, course.stats.exercises
        );

        let _ = writeln!(
            out,
            "Tabs:  {}",
            Self::choices(&page.tabs, |t| t.label().to_string())
        );
        let _ = writeln!(out, "Weeks: {}\n", Self::choices(&page.weeks, |w| w.label()));

        if let Some(schedule) = &page.schedule {
            Self::render_schedule(&mut out, schedule);
        }

        if let Some(detail) = &page.detail {
            Self::render_detail(&mut out, detail);
        }

        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for TextRenderer {
    fn render(&self, page: &Page) -> Result<String, Box<dyn Error>> {
        Ok(match page {
            Page::Catalog(catalog) => Self::render_catalog(catalog),
            Page::Course(course) => Self::render_course(course),
            Page::NotFound { id } => format!("{COURSE_NOT_FOUND}: '{id}'\n← Back to Courses\n"),
        })
    }
}
