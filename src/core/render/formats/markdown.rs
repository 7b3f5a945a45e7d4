//! Markdown page renderer
//!
//! Renders pages through embedded templates, filling `{{placeholder}}` slots
//! with generated tables and lists. Links use the site routes (`/` and
//! `/course/<id>`).

use crate::core::models::Assessment;
use crate::core::render::{
    PageRenderer, EXPERT_INSTRUCTORS, SITE_SUBTITLE, SITE_TITLE, STUDENTS_ENROLLED,
};
use crate::core::view::{
    AssessmentsView, CatalogPage, Choice, CoursePage, DetailPanel, Page, Schedule, COURSE_NOT_FOUND,
    NO_ASSESSMENTS, NO_MATCHING_COURSES,
};
use std::error::Error;
use std::fmt::Write;

/// Embedded catalog page template
const CATALOG_TEMPLATE: &str = include_str!("../templates/catalog.md");

/// Embedded course page template
const COURSE_TEMPLATE: &str = include_str!("../templates/course.md");

/// Markdown page renderer
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Button row with the active choice in bold
    fn choices<T: Copy>(choices: &[Choice<T>], label: impl Fn(T) -> String) -> String {
        choices
            .iter()
            .map(|choice| {
                if choice.active {
                    format!("**{}**", label(choice.value))
                } else {
                    label(choice.value)
                }
            })
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Escape pipes so text stays inside its table cell
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn assessment_list(assessments: &[Assessment]) -> String {
        assessments
            .iter()
            .map(|a| a.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn render_catalog(page: &CatalogPage) -> String {
        let mut output = CATALOG_TEMPLATE.to_string();

        output = output.replace("{{site_title}}", SITE_TITLE);
        output = output.replace("{{site_subtitle}}", SITE_SUBTITLE);
        output = output.replace("{{course_count}}", &page.summary.course_count.to_string());
        output = output.replace(
            "{{total_modules}}",
            &page.summary.total_modules.to_string(),
        );
        output = output.replace("{{students}}", STUDENTS_ENROLLED);
        output = output.replace("{{instructors}}", EXPERT_INSTRUCTORS);
        output = output.replace(
            "{{categories}}",
            &Self::choices(&page.categories, |c| c.label().to_string()),
        );

        output = output.replace("{{course_list}}", &Self::generate_course_list(page));

        // User input goes in last so it is never scanned for placeholders
        let search_line = if page.search_term.is_empty() {
            String::new()
        } else {
            format!("**Search:** {}", Self::code_span(&page.search_term))
        };
        output.replace("{{search_line}}", &search_line)
    }

    /// Inline code span whose fence is longer than any backtick run in `text`
    fn code_span(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);
        if longest_run == 0 {
            format!("{fence}{text}{fence}")
        } else {
            format!("{fence} {text} {fence}")
        }
    }

    fn generate_course_list(page: &CatalogPage) -> String {
        if page.courses.is_empty() {
            return format!("_{NO_MATCHING_COURSES}_\n");
        }

        let mut list = String::new();
        for course in &page.courses {
            let _ = writeln!(list, "### [{}]({})\n", course.title, course.route());
            let _ = writeln!(list, "_{}_\n", course.category);
            let _ = writeln!(list, "{}\n", course.description);
            let _ = writeln!(
                list,
                "{} Modules · {} Hours\n",
                course.modules, course.hours
            );
        }
        list
    }

    fn generate_schedule_table(schedule: &Schedule) -> String {
        let mut table = String::new();
        table.push_str("| Week | Class | Type | Content | Assessment |\n");
        table.push_str("|---|---|---|---|---|\n");

        for row in schedule.rows() {
            let week = row.week_label.map(|label| label.text()).unwrap_or_default();
            let content = if row.preview().is_empty() {
                format!("**{}**", Self::cell(row.detailed_title()))
            } else {
                format!(
                    "**{}**<br>{}",
                    Self::cell(row.detailed_title()),
                    Self::cell(row.preview())
                )
            };
            let _ = writeln!(
                table,
                "| {week} | {} | {} | {content} | {} |",
                Self::cell(row.title()),
                row.kind().label(),
                Self::cell(&Self::assessment_list(row.assessments()))
            );
        }
        table
    }

    fn generate_detail(detail: &DetailPanel) -> String {
        let mut section = String::new();
        let _ = writeln!(section, "## Lesson {}: {}\n", detail.number, detail.title());

        section.push_str("### Learning Objectives\n\n");
        for objective in detail.objectives() {
            let _ = writeln!(section, "- {objective}");
        }

        section.push_str("\n### Content Covered\n\n");
        for item in detail.content() {
            let _ = writeln!(section, "- {item}");
        }

        section.push_str("\n### Practical Activities\n\n");
        let _ = writeln!(section, "{}", detail.practical());

        section.push_str("\n### Assessment\n\n");
        match detail.assessments() {
            AssessmentsView::Methods(methods) => {
                for method in methods {
                    let _ = writeln!(section, "- {}", method.label);
                }
            }
            AssessmentsView::Empty => {
                let _ = writeln!(section, "_{NO_ASSESSMENTS}_");
            }
        }
        section
    }

    fn render_course(page: &CoursePage) -> String {
        let course = page.course;
        let mut output = COURSE_TEMPLATE.to_string();

        output = output.replace("{{back_link}}", "/");
        output = output.replace("{{course_name}}", &course.name);
        output = output.replace("{{description}}", &course.description);
        output = output.replace("{{classes}}", &course.stats.classes.to_string());
        output = output.replace("{{weeks}}", &course.stats.weeks.to_string());
        output = output.replace("{{categories}}", &course.stats.categories.to_string());
        output = output.replace("{{exercises}}", &course.stats.exercises);
        output = output.replace(
            "{{tabs}}",
            &Self::choices(&page.tabs, |t| t.label().to_string()),
        );
        output = output.replace(
            "{{week_buttons}}",
            &Self::choices(&page.weeks, |w| w.label()),
        );

        let schedule = page
            .schedule
            .as_ref()
            .map(Self::generate_schedule_table)
            .unwrap_or_default();
        output = output.replace("{{schedule}}", &schedule);

        let detail = page
            .detail
            .as_ref()
            .map(Self::generate_detail)
            .unwrap_or_default();
        output = output.replace("{{detail}}", &detail);

        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for MarkdownRenderer {
    fn render(&self, page: &Page) -> Result<String, Box<dyn Error>> {
        Ok(match page {
            Page::Catalog(catalog) => Self::render_catalog(catalog),
            Page::Course(course) => Self::render_course(course),
            Page::NotFound { id } => {
                format!("# {COURSE_NOT_FOUND}\n\nNo course with id `{id}`.\n\n[← Back to Courses](/)\n")
            }
        })
    }
}
