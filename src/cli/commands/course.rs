//! Course command handler
//!
//! Opens one course page, applies the tab, week, and lesson selections in the
//! order a visitor would click them, and renders the resulting page.

use super::emit_page;
use std::path::Path;
use survey_hub::catalog::Catalog;
use survey_hub::config::Config;
use survey_hub::view::{Tab, ViewController, ViewEvent, WeekFilter};
use survey_hub::{error, verbose};

/// Arguments of the course command
pub struct CourseArgs<'a> {
    /// Course id
    pub id: &'a str,
    /// Tab key
    pub tab: &'a str,
    /// Week button ("all" or a number)
    pub week: &'a str,
    /// Lesson to open in the detail panel
    pub lesson: Option<u32>,
    /// Output format name
    pub format: &'a str,
    /// Explicit output path
    pub output: Option<&'a Path>,
}

/// Run the course command
pub fn run(args: &CourseArgs, config: &Config) -> Result<(), String> {
    let tab: Tab = args.tab.parse().map_err(|e| format!("✗ {e}"))?;
    let week: WeekFilter = args.week.parse().map_err(|e| format!("✗ {e}"))?;

    let mut view = ViewController::new(Catalog::global());
    view.subscribe(|change| {
        if let Some(number) = change.current {
            verbose!("Lesson {number} of '{}' opened", change.course_id);
        }
    });

    let mut events = vec![
        ViewEvent::CourseOpened(args.id.to_string()),
        ViewEvent::TabSelected(tab),
        ViewEvent::WeekSelected(week),
    ];
    if let Some(number) = args.lesson {
        events.push(ViewEvent::LessonSelected(number));
    }

    for event in events {
        if let Err(e) = view.apply(event) {
            error!("Course '{}': {e}", args.id);
            return Err(format!("✗ {e}"));
        }
    }

    let stem = args
        .lesson
        .map_or_else(|| args.id.to_string(), |n| format!("{}-lesson-{n}", args.id));
    emit_page(&view.page(), args.format, args.output, &stem, config)
}
