//! View controller: filter and selection state over the catalog
//!
//! All state changes come from [`ViewEvent`]s applied one at a time. Derived
//! data (visible courses, schedule, detail panel, page) is recomputed from the
//! state and the immutable catalog on every call.

pub mod detail;
pub mod filter;
pub mod page;
pub mod schedule;
pub mod state;

pub use detail::{AssessmentsView, DetailPanel, SelectionChange, NO_ASSESSMENTS};
pub use filter::{filter_courses, CategoryFilter, CourseFilter, ALL_COURSES};
pub use page::{CatalogPage, Choice, CoursePage, Page, COURSE_NOT_FOUND, NO_MATCHING_COURSES};
pub use schedule::{Schedule, ScheduleRow, WeekLabel};
pub use state::{Screen, Tab, ViewEvent, WeekFilter};

use crate::core::catalog::{Catalog, CatalogError};
use crate::core::models::Course;
use crate::debug;
use std::fmt;
use thiserror::Error;

/// Errors raised while applying a view event
#[derive(Debug, Error)]
pub enum ViewError {
    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The event needs an open course page
    #[error("No course is open")]
    NoCourseOpen,
    /// The open course has no lesson with that number
    #[error("Course '{course}' has no lesson {number}")]
    LessonNotFound {
        /// Open course id
        course: String,
        /// Requested lesson number
        number: u32,
    },
    /// The open course does not span that week
    #[error("Course '{course}' has {weeks} weeks; week {week} is out of range")]
    WeekOutOfRange {
        /// Open course id
        course: String,
        /// Requested week
        week: u32,
        /// Weeks the course spans
        weeks: u32,
    },
}

type SelectionSubscriber<'a> = Box<dyn FnMut(&SelectionChange) + 'a>;

/// Owns the filter/selection state for one browsing session
pub struct ViewController<'a> {
    catalog: &'a Catalog,
    screen: Screen,
    course: Option<&'a Course>,
    filter: CourseFilter,
    active_tab: Tab,
    active_week: WeekFilter,
    selected_lesson: Option<u32>,
    subscribers: Vec<SelectionSubscriber<'a>>,
}

impl fmt::Debug for ViewController<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewController")
            .field("screen", &self.screen)
            .field("filter", &self.filter)
            .field("active_tab", &self.active_tab)
            .field("active_week", &self.active_week)
            .field("selected_lesson", &self.selected_lesson)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<'a> ViewController<'a> {
    /// Start on the catalog screen with the default filter
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Catalog,
            course: None,
            filter: CourseFilter::default(),
            active_tab: Tab::default(),
            active_week: WeekFilter::default(),
            selected_lesson: None,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback for selection changes
    ///
    /// Called whenever the selected lesson changes, including when it is
    /// cleared by closing the panel or by navigation. A view layer uses this to
    /// scroll the detail panel into view.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SelectionChange) + 'a) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one user event
    ///
    /// # Errors
    /// Returns `ViewError` when the event refers to an unknown course, lesson,
    /// or week, or needs a course page while none is open. State is left
    /// unchanged on error, except that an unknown course id moves to the
    /// not-found screen.
    pub fn apply(&mut self, event: ViewEvent) -> Result<(), ViewError> {
        debug!("view event: {event:?}");
        match event {
            ViewEvent::SearchChanged(term) => self.set_search_term(term),
            ViewEvent::CategorySelected(category) => self.select_category(category),
            ViewEvent::CourseOpened(id) => {
                self.open_course(&id)?;
            }
            ViewEvent::BackToCatalog => self.back(),
            ViewEvent::TabSelected(tab) => self.select_tab(tab)?,
            ViewEvent::WeekSelected(week) => self.select_week(week)?,
            ViewEvent::LessonSelected(number) => self.select_lesson(number)?,
            ViewEvent::DetailClosed => self.clear_selection(),
        }
        Ok(())
    }

    /// Replace the search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Activate a category button
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Navigate to a course page
    ///
    /// Tab, week, and selection start fresh on every course page.
    ///
    /// # Errors
    /// Returns `ViewError::Catalog(CatalogError::NotFound)` for an unknown id;
    /// the screen then shows the not-found fallback.
    pub fn open_course(&mut self, id: &str) -> Result<&'a Course, ViewError> {
        self.set_selection(None);
        self.active_tab = Tab::default();
        self.active_week = WeekFilter::default();

        match self.catalog.get_course_by_id(id) {
            Ok(course) => {
                self.course = Some(course);
                self.screen = Screen::Course(course.id.clone());
                Ok(course)
            }
            Err(err) => {
                self.course = None;
                self.screen = Screen::CourseNotFound(id.to_string());
                Err(err.into())
            }
        }
    }

    /// Return to the catalog; the catalog filter starts fresh
    pub fn back(&mut self) {
        self.set_selection(None);
        self.course = None;
        self.screen = Screen::Catalog;
        self.filter = CourseFilter::default();
    }

    /// Activate a tab on the course page
    ///
    /// # Errors
    /// Returns `ViewError::NoCourseOpen` outside a course page.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), ViewError> {
        self.require_course()?;
        self.active_tab = tab;
        Ok(())
    }

    /// Activate a week button on the course page
    ///
    /// The schedule table is not narrowed by the active week.
    ///
    /// # Errors
    /// Returns `ViewError::NoCourseOpen` outside a course page and
    /// `ViewError::WeekOutOfRange` for a week the course does not span.
    pub fn select_week(&mut self, week: WeekFilter) -> Result<(), ViewError> {
        let course = self.require_course()?;
        if let WeekFilter::Week(number) = week {
            if number == 0 || number > course.weeks {
                return Err(ViewError::WeekOutOfRange {
                    course: course.id.clone(),
                    week: number,
                    weeks: course.weeks,
                });
            }
        }
        self.active_week = week;
        Ok(())
    }

    /// Select a lesson, replacing any previous selection
    ///
    /// # Errors
    /// Returns `ViewError::NoCourseOpen` outside a course page and
    /// `ViewError::LessonNotFound` for an unknown lesson number.
    pub fn select_lesson(&mut self, number: u32) -> Result<(), ViewError> {
        let course = self.require_course()?;
        if course.lesson(number).is_none() {
            return Err(ViewError::LessonNotFound {
                course: course.id.clone(),
                number,
            });
        }
        self.set_selection(Some(number));
        Ok(())
    }

    /// Close the detail panel
    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    /// The catalog being browsed
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Current screen
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Catalog filter state
    #[must_use]
    pub const fn filter(&self) -> &CourseFilter {
        &self.filter
    }

    /// Active tab
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Active week button
    #[must_use]
    pub const fn active_week(&self) -> WeekFilter {
        self.active_week
    }

    /// Selected lesson number
    #[must_use]
    pub const fn selected_lesson(&self) -> Option<u32> {
        self.selected_lesson
    }

    /// Open course, if on a course page
    #[must_use]
    pub const fn current_course(&self) -> Option<&'a Course> {
        self.course
    }

    /// Courses visible under the current filter, in catalog order
    #[must_use]
    pub fn filtered_courses(&self) -> Vec<&'a Course> {
        filter_courses(self.catalog.list_courses(), &self.filter)
    }

    /// Schedule of the open course
    #[must_use]
    pub fn schedule(&self) -> Option<Schedule<'a>> {
        self.course.map(Schedule::from_course)
    }

    /// Detail panel of the selected lesson
    #[must_use]
    pub fn detail_panel(&self) -> Option<DetailPanel<'a>> {
        let course = self.course?;
        let number = self.selected_lesson?;
        course
            .lesson(number)
            .map(|lesson| DetailPanel::new(number, lesson))
    }

    /// Page for the current screen
    #[must_use]
    pub fn page(&self) -> Page<'a> {
        if let Some(course) = self.course {
            let schedule = match self.active_tab {
                Tab::Schedule => Some(Schedule::from_course(course)),
                Tab::Instruments | Tab::Assessment => None,
            };
            return Page::Course(CoursePage {
                course,
                tabs: Choice::mark(Tab::ALL, self.active_tab),
                weeks: Choice::mark(WeekFilter::options(course), self.active_week),
                schedule,
                detail: self.detail_panel(),
            });
        }

        if let Screen::CourseNotFound(id) = &self.screen {
            return Page::NotFound { id: id.clone() };
        }

        Page::Catalog(CatalogPage {
            summary: self.catalog.summary(),
            categories: Choice::mark(CategoryFilter::options(), self.filter.category),
            search_term: self.filter.search_term.clone(),
            courses: self.filtered_courses(),
        })
    }

    fn require_course(&self) -> Result<&'a Course, ViewError> {
        self.course.ok_or(ViewError::NoCourseOpen)
    }

    fn set_selection(&mut self, next: Option<u32>) {
        let previous = self.selected_lesson;
        if previous == next {
            return;
        }
        self.selected_lesson = next;

        let Some(course) = self.course else {
            return;
        };
        let change = SelectionChange {
            course_id: course.id.clone(),
            previous,
            current: next,
        };
        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
    }
}
