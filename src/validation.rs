//! Field validation for student form input.
//!
//! Validation never fails: it returns a [`ValidationErrors`] map that is empty
//! when the candidate may be submitted.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::StudentCandidate;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// An editable field of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    Name,
    Email,
    EnrolledCourse,
    ProfileImage,
}

impl StudentField {
    pub const ALL: [StudentField; 4] = [
        StudentField::Name,
        StudentField::Email,
        StudentField::EnrolledCourse,
        StudentField::ProfileImage,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::EnrolledCourse => "enrolledCourse",
            StudentField::ProfileImage => "profileImage",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(StudentField::Name),
            "email" => Ok(StudentField::Email),
            "enrolledCourse" | "course" => Ok(StudentField::EnrolledCourse),
            "profileImage" | "image" => Ok(StudentField::ProfileImage),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Per-field error messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<StudentField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: StudentField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: StudentField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: StudentField) {
        self.errors.remove(&field);
    }
}

/// Checks a candidate against the form rules.
pub fn validate(candidate: &StudentCandidate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if candidate.name.trim().is_empty() {
        errors.insert(StudentField::Name, "Name is required");
    }

    if candidate.email.trim().is_empty() {
        errors.insert(StudentField::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&candidate.email) {
        errors.insert(StudentField::Email, "Email format is invalid");
    }

    if candidate.enrolled_course.trim().is_empty() {
        errors.insert(StudentField::EnrolledCourse, "Enrolled Course is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str, course: &str) -> StudentCandidate {
        StudentCandidate {
            name: name.to_string(),
            email: email.to_string(),
            enrolled_course: course.to_string(),
            profile_image: String::new(),
        }
    }

    #[test]
    fn test_valid_candidate_has_no_errors() {
        let errors = validate(&candidate("A", "a@b.com", "C"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_bad_email_format() {
        let errors = validate(&candidate("A", "bad", "C"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(StudentField::Email), Some("Email format is invalid"));
    }

    #[test]
    fn test_blank_name_only_flags_name() {
        for name in ["", " ", "\t\n  "] {
            let errors = validate(&candidate(name, "a@b.com", "C"));
            assert_eq!(errors.len(), 1, "name {:?}", name);
            assert_eq!(errors.get(StudentField::Name), Some("Name is required"));
        }
    }

    #[test]
    fn test_blank_email_is_required_not_invalid() {
        let errors = validate(&candidate("A", "   ", "C"));
        assert_eq!(errors.get(StudentField::Email), Some("Email is required"));
    }

    #[test]
    fn test_email_needs_dot_after_at() {
        assert!(validate(&candidate("A", "a@b", "C")).get(StudentField::Email).is_some());
        assert!(validate(&candidate("A", "a b@c.d", "C")).is_empty());
    }

    #[test]
    fn test_all_required_fields_missing() {
        let errors = validate(&candidate("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(StudentField::EnrolledCourse), Some("Enrolled Course is required"));
        assert_eq!(errors.get(StudentField::ProfileImage), None);
    }

    #[test]
    fn test_field_parsing_accepts_short_names() {
        assert_eq!("course".parse::<StudentField>(), Ok(StudentField::EnrolledCourse));
        assert_eq!("profileImage".parse::<StudentField>(), Ok(StudentField::ProfileImage));
        assert!("age".parse::<StudentField>().is_err());
    }
}
