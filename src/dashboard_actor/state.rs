use tracing::error;

use super::SaveAction;
use crate::domain::{Course, StudentRecord};
use crate::error::TransportError;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch students. Please try again.";
pub const COURSES_FAILED_MESSAGE: &str = "Failed to load courses. Please try again.";

/// Everything the presentation layer needs to draw the dashboard.
///
/// Only the dashboard actor mutates this; everyone else sees snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    records: Vec<StudentRecord>,
    total_count: usize,
    loading: bool,
    error: Option<String>,
    editing: Option<StudentRecord>,
    form_visible: bool,
    form_submitting: bool,
    courses: Vec<Course>,
    courses_loading: bool,
    courses_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
            // The first load starts as soon as the dashboard comes up.
            loading: true,
            error: None,
            editing: None,
            form_visible: false,
            form_submitting: false,
            courses: Vec::new(),
            courses_loading: false,
            courses_error: None,
        }
    }
}

impl DashboardState {
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&StudentRecord> {
        self.editing.as_ref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn is_form_submitting(&self) -> bool {
        self.form_submitting
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_courses_loading(&self) -> bool {
        self.courses_loading
    }

    pub fn courses_error(&self) -> Option<&str> {
        self.courses_error.as_deref()
    }

    pub fn find_record(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    // --- Transitions ---

    fn set_records(&mut self, records: Vec<StudentRecord>) {
        self.total_count = records.len();
        self.records = records;
    }

    pub(crate) fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a finished student list fetch. Failures keep the last known records.
    pub(crate) fn finish_loading(&mut self, result: Result<Vec<StudentRecord>, TransportError>) {
        match result {
            Ok(records) => self.set_records(records),
            Err(e) => {
                error!(error = %e, "Error in load_students");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub(crate) fn begin_add(&mut self) {
        self.editing = None;
        self.form_visible = true;
    }

    pub(crate) fn begin_edit(&mut self, record: StudentRecord) {
        self.editing = Some(record);
        self.form_visible = true;
    }

    /// Marks a save as in flight and decides whether it creates or replaces.
    pub(crate) fn start_save(&mut self) -> SaveAction {
        self.form_submitting = true;
        self.error = None;
        match &self.editing {
            Some(record) => SaveAction::Update(record.id.clone()),
            None => SaveAction::Add,
        }
    }

    /// Applies a finished save. Returns true when the list must be reloaded.
    pub(crate) fn finish_save<T>(&mut self, action: &SaveAction, result: Result<T, TransportError>) -> bool {
        self.form_submitting = false;
        match result {
            Ok(_) => {
                self.form_visible = false;
                self.editing = None;
                true
            }
            Err(e) => {
                error!(error = %e, "Error saving student");
                self.error = Some(format!("Failed to {} student: {}", action.verb(), e));
                false
            }
        }
    }

    pub(crate) fn start_delete(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a finished delete. Returns true when the list must be reloaded.
    pub(crate) fn finish_delete(&mut self, result: Result<(), TransportError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Error deleting student");
                self.error = Some(format!("Failed to delete student: {}", e));
                false
            }
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.form_visible = false;
        self.editing = None;
        self.error = None;
    }

    pub(crate) fn start_courses_loading(&mut self) {
        self.courses_loading = true;
        self.courses_error = None;
    }

    pub(crate) fn finish_courses_loading(&mut self, result: Result<Vec<Course>, TransportError>) {
        match result {
            Ok(courses) => self.courses = courses,
            Err(e) => {
                error!(error = %e, "Error fetching courses for the form");
                self.courses_error = Some(COURSES_FAILED_MESSAGE.to_string());
            }
        }
        self.courses_loading = false;
    }
}
