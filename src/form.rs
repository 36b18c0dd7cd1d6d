//! The add/edit form draft shown while the dashboard form is visible.

use crate::domain::{Course, StudentCandidate, StudentRecord};
use crate::validation::{validate, StudentField, ValidationErrors};

/// Field values and inline errors of the form being filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    editing: bool,
    values: StudentCandidate,
    errors: ValidationErrors,
}

impl StudentForm {
    /// Starts empty for an add, or pre-filled from the record being edited.
    pub fn new(current: Option<&StudentRecord>) -> Self {
        let values = match current {
            Some(record) => StudentCandidate::from(record),
            None => StudentCandidate::new("", "", ""),
        };
        Self {
            editing: current.is_some(),
            values,
            errors: ValidationErrors::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Edit Student"
        } else {
            "Add New Student"
        }
    }

    pub fn values(&self) -> &StudentCandidate {
        &self.values
    }

    pub fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.values.name,
            StudentField::Email => &self.values.email,
            StudentField::EnrolledCourse => &self.values.enrolled_course,
            StudentField::ProfileImage => &self.values.profile_image,
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Changes one field. Any error shown for that field goes away.
    pub fn set_field(&mut self, field: StudentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            StudentField::Name => self.values.name = value,
            StudentField::Email => self.values.email = value,
            StudentField::EnrolledCourse => self.values.enrolled_course = value,
            StudentField::ProfileImage => self.values.profile_image = value,
        }
        self.errors.clear_field(field);
    }

    /// Picks the enrolled course, which must be one of the loaded `courses`.
    /// An empty name goes back to "no course selected".
    pub fn select_course(&mut self, name: &str, courses: &[Course]) -> Result<(), String> {
        if !name.is_empty() && !courses.iter().any(|course| course.name == name) {
            if courses.is_empty() {
                return Err("No courses loaded; use `courses` to reload".to_string());
            }
            let options: Vec<&str> = courses.iter().map(|course| course.name.as_str()).collect();
            return Err(format!("Unknown course: {} (options: {})", name, options.join(", ")));
        }
        self.set_field(StudentField::EnrolledCourse, name);
        Ok(())
    }

    /// Validates the draft. Yields the candidate only when nothing is wrong.
    pub fn submit(&mut self) -> Option<StudentCandidate> {
        self.errors = validate(&self.values);
        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PLACEHOLDER_IMAGE;

    #[test]
    fn test_new_form_starts_with_placeholder_image() {
        let form = StudentForm::new(None);
        assert_eq!(form.title(), "Add New Student");
        assert_eq!(form.value(StudentField::ProfileImage), PLACEHOLDER_IMAGE);
        assert_eq!(form.value(StudentField::Name), "");
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let record = StudentRecord::from_candidate("s1", StudentCandidate::new("Ada", "ada@example.com", "Math"));
        let form = StudentForm::new(Some(&record));
        assert_eq!(form.title(), "Edit Student");
        assert_eq!(form.values(), &StudentCandidate::from(&record));
    }

    #[test]
    fn test_submit_reports_errors_and_typing_clears_them() {
        let mut form = StudentForm::new(None);
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 3);

        form.set_field(StudentField::Name, "Ada");
        assert_eq!(form.errors().get(StudentField::Name), None);
        assert_eq!(form.errors().len(), 2);

        form.set_field(StudentField::Email, "ada@example.com");
        form.set_field(StudentField::EnrolledCourse, "Math");
        let candidate = form.submit().expect("valid form");
        assert_eq!(candidate.name, "Ada");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_select_course_rejects_unknown_names() {
        let courses = vec![Course::new("c1", "Math"), Course::new("c2", "Art")];
        let mut form = StudentForm::new(None);

        let err = form.select_course("History", &courses).unwrap_err();
        assert_eq!(err, "Unknown course: History (options: Math, Art)");
        assert_eq!(form.value(StudentField::EnrolledCourse), "");

        assert!(form.select_course("Math", &[]).is_err());
        assert_eq!(form.value(StudentField::EnrolledCourse), "");
    }

    #[test]
    fn test_select_course_accepts_loaded_name() {
        let courses = vec![Course::new("c1", "Math"), Course::new("c2", "Art")];
        let mut form = StudentForm::new(None);
        assert!(form.submit().is_none());

        form.select_course("Art", &courses).unwrap();
        assert_eq!(form.value(StudentField::EnrolledCourse), "Art");
        assert_eq!(form.errors().get(StudentField::EnrolledCourse), None);

        form.select_course("", &courses).unwrap();
        assert_eq!(form.value(StudentField::EnrolledCourse), "");
    }
}
