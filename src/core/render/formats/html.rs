//! HTML page renderer
//!
//! Pages are rendered with askama templates from `templates/`. Template
//! structs hold flat, pre-formatted view models so the templates only loop
//! and branch on plain fields. Every link is prefixed with `root`, the
//! relative path from the written page back to the site root.

use crate::core::models::{Assessment, Course};
use crate::core::render::{
    icon_glyph, PageRenderer, EXPERT_INSTRUCTORS, SITE_SUBTITLE, SITE_TITLE, STUDENTS_ENROLLED,
};
use crate::core::view::{
    AssessmentsView, CatalogPage, CategoryFilter, Choice, CoursePage, DetailPanel, Page, Schedule,
    Tab, COURSE_NOT_FOUND, NO_ASSESSMENTS, NO_MATCHING_COURSES,
};
use askama::Template;
use std::error::Error;

/// Anchor of the lesson detail panel
pub const DETAIL_ANCHOR: &str = "lesson-details";

/// Path of a course page relative to the site root
#[must_use]
pub fn course_path(id: &str) -> String {
    format!("course/{id}.html")
}

/// Path of a filtered catalog page relative to the site root
///
/// "All Courses" is the index page.
#[must_use]
pub fn category_path(category: CategoryFilter) -> String {
    match category {
        CategoryFilter::All => "index.html".to_string(),
        CategoryFilter::Only(_) => format!("category/{}.html", category.slug()),
    }
}

/// Path of a course page with `tab` active, relative to the site root
///
/// The schedule tab is the course page itself.
#[must_use]
pub fn tab_path(id: &str, tab: Tab) -> String {
    match tab {
        Tab::Schedule => course_path(id),
        Tab::Instruments | Tab::Assessment => format!("course/{id}/{}.html", tab.key()),
    }
}

/// Path of a lesson detail page relative to the site root
#[must_use]
pub fn lesson_path(id: &str, number: u32) -> String {
    format!("course/{id}/lesson-{number}.html")
}

struct ChoiceView {
    label: String,
    active: bool,
    href: Option<String>,
}

impl ChoiceView {
    fn from_choices<T: Copy>(
        choices: &[Choice<T>],
        label: impl Fn(T) -> String,
        href: impl Fn(T) -> Option<String>,
    ) -> Vec<Self> {
        choices
            .iter()
            .map(|choice| Self {
                label: label(choice.value),
                active: choice.active,
                href: href(choice.value),
            })
            .collect()
    }
}

struct AssessmentView {
    glyph: &'static str,
    label: String,
}

impl AssessmentView {
    fn from_assessments(assessments: &[Assessment]) -> Vec<Self> {
        assessments
            .iter()
            .map(|a| Self {
                glyph: icon_glyph(a.icon),
                label: a.label.clone(),
            })
            .collect()
    }
}

struct CourseCard {
    title: String,
    category: &'static str,
    category_slug: &'static str,
    description: String,
    modules: u32,
    hours: u32,
    glyph: &'static str,
    gradient: String,
    href: String,
}

struct RowView {
    first_of_week: bool,
    week_text: String,
    row_span: usize,
    title: String,
    kind_label: &'static str,
    kind_tag: &'static str,
    detailed_title: String,
    preview: String,
    assessments: Vec<AssessmentView>,
    href: String,
    selected: bool,
}

#[derive(Default)]
struct DetailView {
    number: u32,
    heading: String,
    objectives: Vec<String>,
    content: Vec<String>,
    practical: String,
    assessments: Vec<AssessmentView>,
    empty_message: &'static str,
    close_href: String,
}

#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogTemplate<'a> {
    root: &'a str,
    title: String,
    site_title: &'static str,
    site_subtitle: &'static str,
    course_count: usize,
    total_modules: u32,
    students: &'static str,
    instructors: &'static str,
    search_term: &'a str,
    categories: Vec<ChoiceView>,
    cards: Vec<CourseCard>,
    empty_message: &'static str,
}

#[derive(Template)]
#[template(path = "course.html")]
struct CourseTemplate<'a> {
    root: &'a str,
    title: String,
    site_title: &'static str,
    back_href: String,
    name: &'a str,
    description: &'a str,
    glyph: &'static str,
    gradient: &'a str,
    classes: u32,
    weeks: u32,
    categories: u32,
    exercises: &'a str,
    tabs: Vec<ChoiceView>,
    week_buttons: Vec<ChoiceView>,
    has_schedule: bool,
    rows: Vec<RowView>,
    has_detail: bool,
    detail: DetailView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    root: &'a str,
    title: &'static str,
    site_title: &'static str,
    id: &'a str,
}

/// HTML page renderer
pub struct HtmlRenderer {
    root: String,
}

impl HtmlRenderer {
    /// Renderer for a page written at the site root
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: String::new(),
        }
    }

    /// Renderer for a page written below the site root
    ///
    /// `root` is the relative path back to the root, such as `"../"`.
    #[must_use]
    pub fn with_root(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    fn link(&self, path: &str) -> String {
        format!("{}{path}", self.root)
    }

    fn course_card(&self, course: &Course) -> CourseCard {
        CourseCard {
            title: course.title.clone(),
            category: course.category.label(),
            category_slug: course.category.slug(),
            description: course.description.clone(),
            modules: course.modules,
            hours: course.hours,
            glyph: icon_glyph(course.icon),
            gradient: course.gradient.clone(),
            href: self.link(&course_path(&course.id)),
        }
    }

    fn rows(&self, course: &Course, schedule: &Schedule, selected: Option<u32>) -> Vec<RowView> {
        schedule
            .rows()
            .iter()
            .map(|row| RowView {
                first_of_week: row.week_label.is_some(),
                week_text: row.week_label.map(|label| label.text()).unwrap_or_default(),
                row_span: row.week_label.map_or(1, |label| label.row_span),
                title: row.title().to_string(),
                kind_label: row.kind().label(),
                kind_tag: row.kind().tag(),
                detailed_title: row.detailed_title().to_string(),
                preview: row.preview().to_string(),
                assessments: AssessmentView::from_assessments(row.assessments()),
                href: format!(
                    "{}#{DETAIL_ANCHOR}",
                    self.link(&lesson_path(&course.id, row.number))
                ),
                selected: selected == Some(row.number),
            })
            .collect()
    }

    fn detail(&self, course: &Course, detail: &DetailPanel) -> DetailView {
        let assessments = match detail.assessments() {
            AssessmentsView::Methods(methods) => AssessmentView::from_assessments(methods),
            AssessmentsView::Empty => Vec::new(),
        };
        DetailView {
            number: detail.number,
            heading: detail.title().to_string(),
            objectives: detail.objectives().to_vec(),
            content: detail.content().to_vec(),
            practical: detail.practical().to_string(),
            assessments,
            empty_message: NO_ASSESSMENTS,
            close_href: self.link(&course_path(&course.id)),
        }
    }

    fn render_catalog(&self, page: &CatalogPage) -> Result<String, askama::Error> {
        CatalogTemplate {
            root: &self.root,
            title: SITE_TITLE.to_string(),
            site_title: SITE_TITLE,
            site_subtitle: SITE_SUBTITLE,
            course_count: page.summary.course_count,
            total_modules: page.summary.total_modules,
            students: STUDENTS_ENROLLED,
            instructors: EXPERT_INSTRUCTORS,
            search_term: &page.search_term,
            categories: ChoiceView::from_choices(
                &page.categories,
                |c| c.label().to_string(),
                |c| Some(self.link(&category_path(c))),
            ),
            cards: page.courses.iter().map(|c| self.course_card(c)).collect(),
            empty_message: NO_MATCHING_COURSES,
        }
        .render()
    }

    fn render_course(&self, page: &CoursePage) -> Result<String, askama::Error> {
        let course = page.course;
        let selected = page.detail.as_ref().map(|d| d.number);
        let rows = page
            .schedule
            .as_ref()
            .map(|schedule| self.rows(course, schedule, selected))
            .unwrap_or_default();
        let detail = page
            .detail
            .as_ref()
            .map(|detail| self.detail(course, detail))
            .unwrap_or_default();

        CourseTemplate {
            root: &self.root,
            title: format!("{} | {SITE_TITLE}", course.name),
            site_title: SITE_TITLE,
            back_href: self.link("index.html"),
            name: &course.name,
            description: &course.description,
            glyph: icon_glyph(course.icon),
            gradient: &course.gradient,
            classes: course.stats.classes,
            weeks: course.stats.weeks,
            categories: course.stats.categories,
            exercises: &course.stats.exercises,
            tabs: ChoiceView::from_choices(
                &page.tabs,
                |t| t.label().to_string(),
                |t| Some(self.link(&tab_path(&course.id, t))),
            ),
            week_buttons: ChoiceView::from_choices(&page.weeks, |w| w.label(), |_| None),
            has_schedule: page.schedule.is_some(),
            rows,
            has_detail: page.detail.is_some(),
            detail,
        }
        .render()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> Result<String, Box<dyn Error>> {
        let html = match page {
            Page::Catalog(catalog) => self.render_catalog(catalog)?,
            Page::Course(course) => self.render_course(course)?,
            Page::NotFound { id } => NotFoundTemplate {
                root: &self.root,
                title: COURSE_NOT_FOUND,
                site_title: SITE_TITLE,
                id,
            }
            .render()?,
        };
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{Category, Icon, Lesson, LessonType};
    use crate::core::view::ViewController;

    fn catalog() -> Catalog {
        let mut setting_out = Course::new("setting-out", "Setting Out", Category::ModuleTwo);
        setting_out.description = "Pegging <works> on site".to_string();
        setting_out.gradient = "linear-gradient(135deg, #3498db, #1a5276)".to_string();
        setting_out.weeks = 2;
        for i in 1..=3 {
            let mut lesson = Lesson::new(format!("Class {i}"), LessonType::Practical);
            lesson.objectives = vec![format!("Objective {i}")];
            if i == 2 {
                lesson.assessments = vec![Assessment::new(Icon::Eye, "Field observation")];
            }
            setting_out.add_lesson(lesson);
        }
        Catalog::new(vec![setting_out]).unwrap()
    }

    #[test]
    fn test_catalog_cards_link_to_course_pages() {
        let catalog = catalog();
        let view = ViewController::new(&catalog);
        let html = HtmlRenderer::new().render(&view.page()).unwrap();

        assert!(html.contains("href=\"course/setting-out.html\""));
        assert!(html.contains("href=\"assets/site.css\""));
        assert!(html.contains("class=\"category active\" href=\"index.html\">All Courses"));
        assert!(html.contains("href=\"category/module-two.html\">Module Two"));
        assert!(!html.contains("<input"));
        assert!(html.contains("Pegging &lt;works&gt; on site"));
    }

    #[test]
    fn test_course_page_week_cells() {
        let catalog = catalog();
        let mut view = ViewController::new(&catalog);
        view.open_course("setting-out").unwrap();
        let html = HtmlRenderer::with_root("../").render(&view.page()).unwrap();

        assert!(html.contains("rowspan=\"2\">Week 1</td>"));
        assert!(html.contains("rowspan=\"1\">Week 2</td>"));
        assert!(html.contains("href=\"../course/setting-out/lesson-2.html#lesson-details\""));
        assert!(html.contains("href=\"../index.html\""));
        assert!(!html.contains("id=\"lesson-details\""));
        assert!(html.contains("class=\"tab active\" href=\"../course/setting-out.html\""));
        assert!(html.contains("href=\"../course/setting-out/instruments.html\">Instruments Overview"));
        assert!(html.contains("<span class=\"week active\">All</span>"));
    }

    #[test]
    fn test_detail_panel_rendered_for_selection() {
        let catalog = catalog();
        let mut view = ViewController::new(&catalog);
        view.open_course("setting-out").unwrap();
        view.select_lesson(1).unwrap();
        let html = HtmlRenderer::with_root("../../").render(&view.page()).unwrap();

        assert!(html.contains("id=\"lesson-details\""));
        assert!(html.contains("Lesson 1: Class 1"));
        assert!(html.contains("<li>Objective 1</li>"));
        assert!(html.contains(NO_ASSESSMENTS));
        assert!(html.contains("<tr class=\"selected\">"));
    }

    #[test]
    fn test_not_found_page() {
        let page = Page::NotFound {
            id: "astronomy".to_string(),
        };
        let html = HtmlRenderer::new().render(&page).unwrap();
        assert!(html.contains("<code>astronomy</code>"));
        assert!(html.contains(COURSE_NOT_FOUND));
    }

    #[test]
    fn test_paths() {
        assert_eq!(course_path("gis"), "course/gis.html");
        assert_eq!(lesson_path("gis", 3), "course/gis/lesson-3.html");
        assert_eq!(category_path(CategoryFilter::All), "index.html");
        assert_eq!(
            category_path(CategoryFilter::Only(Category::ModuleFour)),
            "category/module-four.html"
        );
        assert_eq!(tab_path("gis", Tab::Schedule), "course/gis.html");
        assert_eq!(tab_path("gis", Tab::Assessment), "course/gis/assessment.html");
    }
}
