//! Integration tests for browsing state over the compiled-in catalog

use std::cell::RefCell;
use std::rc::Rc;
use survey_hub::catalog::Catalog;
use survey_hub::models::Course;
use survey_hub::view::{
    filter_courses, CategoryFilter, CourseFilter, Page, Schedule, Screen, Tab, ViewController,
    ViewError, ViewEvent, WeekFilter,
};

const TERMS: [&str; 7] = ["", "survey", "SURVEY", "map", "gis", "land", "no such course"];

#[test]
fn test_filter_is_ordered_subset_matching_both_predicates() {
    let courses = Catalog::global().list_courses();

    for category in CategoryFilter::options() {
        for term in TERMS {
            let filter = CourseFilter::new(category, term);
            let visible = filter_courses(courses, &filter);

            let expected: Vec<&Course> = courses
                .iter()
                .filter(|c| {
                    category.admits(c.category)
                        && (c.title.to_lowercase().contains(&term.to_lowercase())
                            || c.description.to_lowercase().contains(&term.to_lowercase()))
                })
                .collect();
            assert_eq!(visible, expected, "category {category}, term {term:?}");
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let courses = Catalog::global().list_courses();
    let filter = CourseFilter::new(CategoryFilter::All, "survey");

    let once: Vec<Course> = filter_courses(courses, &filter).into_iter().cloned().collect();
    let twice = filter_courses(&once, &filter);
    assert_eq!(twice.len(), once.len());
    assert!(twice.iter().zip(&once).all(|(a, b)| a.id == b.id));
}

#[test]
fn test_unchanged_state_derives_the_same_view() {
    let mut view = ViewController::new(Catalog::global());
    view.select_category(CategoryFilter::All);
    view.set_search_term("survey");

    let first = view.filtered_courses();
    assert_eq!(view.filtered_courses(), first);
    assert_eq!(view.page(), view.page());

    view.open_course("gis").unwrap();
    view.select_lesson(2).unwrap();
    assert_eq!(view.page(), view.page());
}

#[test]
fn test_default_filter_shows_everything() {
    let view = ViewController::new(Catalog::global());
    assert_eq!(view.filtered_courses().len(), Catalog::global().len());
}

#[test]
fn test_select_then_clear_restores_page() {
    let mut view = ViewController::new(Catalog::global());
    view.open_course("cartography").unwrap();
    let before = view.page();

    view.apply(ViewEvent::LessonSelected(3)).unwrap();
    assert_ne!(view.page(), before);
    view.apply(ViewEvent::DetailClosed).unwrap();

    assert_eq!(view.page(), before);
}

#[test]
fn test_weeks_group_lessons_in_pairs() {
    for course in Catalog::global().list_courses() {
        let schedule = Schedule::from_course(course);
        for (index, row) in schedule.rows().iter().enumerate() {
            let expected_week = u32::try_from(index / 2 + 1).unwrap();
            assert_eq!(row.week, expected_week, "{} row {index}", course.id);
            assert_eq!(row.week_label.is_some(), index % 2 == 0);
        }
    }
}

#[test]
fn test_odd_lesson_count_ends_with_single_row_week() {
    let course = Catalog::global().get_course_by_id("land-laws-1").unwrap();
    let schedule = Schedule::from_course(course);

    let spans: Vec<usize> = schedule.week_labels().map(|label| label.row_span).collect();
    assert_eq!(spans, vec![2, 2, 1]);
}

#[test]
fn test_no_selection_means_no_detail() {
    let mut view = ViewController::new(Catalog::global());
    view.open_course("gis").unwrap();

    assert!(view.detail_panel().is_none());
    let Page::Course(page) = view.page() else {
        panic!("expected course page");
    };
    assert!(page.detail.is_none());
    assert_eq!(page.weeks.len(), 5);
    assert!(page.weeks[0].active && page.weeks[0].value == WeekFilter::All);
}

#[test]
fn test_full_browsing_session() {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let mut view = ViewController::new(Catalog::global());
    let sink = Rc::clone(&opened);
    view.subscribe(move |change| {
        if change.opened() {
            sink.borrow_mut().push(change.current);
        }
    });

    view.apply(ViewEvent::SearchChanged("survey".to_string())).unwrap();
    view.apply(ViewEvent::CategorySelected("Module Two".parse().unwrap()))
        .unwrap();
    let visible: Vec<&str> = view.filtered_courses().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(visible, vec!["engineering-survey-1", "control-survey"]);

    view.apply(ViewEvent::CourseOpened("control-survey".to_string()))
        .unwrap();
    view.apply(ViewEvent::TabSelected(Tab::Instruments)).unwrap();
    view.apply(ViewEvent::WeekSelected(WeekFilter::Week(2))).unwrap();
    view.apply(ViewEvent::LessonSelected(4)).unwrap();
    assert_eq!(view.detail_panel().map(|d| d.number), Some(4));

    let err = view.apply(ViewEvent::LessonSelected(40)).unwrap_err();
    assert!(matches!(err, ViewError::LessonNotFound { number: 40, .. }));
    assert_eq!(view.selected_lesson(), Some(4));

    view.apply(ViewEvent::BackToCatalog).unwrap();
    assert_eq!(view.screen(), &Screen::Catalog);
    assert_eq!(view.filtered_courses().len(), 8);
    assert_eq!(*opened.borrow(), vec![Some(4)]);
}
