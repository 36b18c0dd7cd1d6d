use std::fmt::Write;

use crate::dashboard_actor::DashboardState;
use crate::domain::StudentRecord;
use crate::form::StudentForm;
use crate::validation::StudentField;

/// Draws the whole dashboard. The form replaces the list while it is visible.
pub fn render_dashboard(state: &DashboardState, form: Option<&StudentForm>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Student Management Dashboard");
    let _ = writeln!(out, "Total Students: {}", state.total_count());

    if let Some(error) = state.error() {
        let _ = writeln!(out, "! {}", error);
    }

    match form {
        Some(form) if state.is_form_visible() => out.push_str(&render_form(state, form)),
        _ => out.push_str(&render_list(state)),
    }
    out
}

pub fn render_list(state: &DashboardState) -> String {
    if state.is_loading() {
        return "Loading...\n".to_string();
    }
    if let Some(error) = state.error() {
        return format!("Error loading students: {}\n", error);
    }
    if state.records().is_empty() {
        return "No students added yet. Add a new student!\n".to_string();
    }

    let mut out = String::from("Our Students\n");
    for record in state.records() {
        out.push_str(&render_card(record));
    }
    out
}

fn render_card(record: &StudentRecord) -> String {
    format!(
        "- {} [{}]\n    Email: {}\n    Course: {}\n    Image: {}\n",
        record.name,
        record.id,
        record.email,
        record.enrolled_course,
        record.display_image()
    )
}

pub fn render_form(state: &DashboardState, form: &StudentForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", form.title());

    for field in StudentField::ALL {
        let _ = writeln!(out, "{}: {}", label(field), form.value(field));
        if field == StudentField::EnrolledCourse {
            let _ = writeln!(out, "  {}", course_options(state));
        }
        if let Some(error) = form.errors().get(field) {
            let _ = writeln!(out, "  ! {}", error);
        }
    }

    if state.is_form_submitting() {
        let _ = writeln!(out, "Saving...");
    }
    out
}

fn label(field: StudentField) -> &'static str {
    match field {
        StudentField::Name => "Name",
        StudentField::Email => "Email",
        StudentField::EnrolledCourse => "Enrolled Course",
        StudentField::ProfileImage => "Profile Image URL",
    }
}

fn course_options(state: &DashboardState) -> String {
    if state.is_courses_loading() {
        return "Loading courses...".to_string();
    }
    if let Some(error) = state.courses_error() {
        return error.to_string();
    }
    let names: Vec<&str> = state.courses().iter().map(|c| c.name.as_str()).collect();
    format!("options: {}", names.join(", "))
}
