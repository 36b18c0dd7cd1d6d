use serde::{Deserialize, Serialize};

/// Image shown for students without a profile picture.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

fn default_profile_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// A student as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub enrolled_course: String,
    #[serde(default = "default_profile_image")]
    pub profile_image: String,
}

/// Fields of a student as entered in the form, before the backend knows about it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentCandidate {
    pub name: String,
    pub email: String,
    pub enrolled_course: String,
    pub profile_image: String,
}

impl StudentRecord {
    /// Combines an id with candidate fields into the full wire shape.
    pub fn from_candidate(id: impl Into<String>, candidate: StudentCandidate) -> Self {
        Self {
            id: id.into(),
            name: candidate.name,
            email: candidate.email,
            enrolled_course: candidate.enrolled_course,
            profile_image: candidate.profile_image,
        }
    }

    /// Image to display; falls back to the placeholder when empty.
    pub fn display_image(&self) -> &str {
        if self.profile_image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.profile_image
        }
    }
}

impl StudentCandidate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        enrolled_course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            enrolled_course: enrolled_course.into(),
            profile_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Normalization applied before a create is transmitted.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.to_lowercase();
        self
    }
}

impl From<&StudentRecord> for StudentCandidate {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            enrolled_course: record.enrolled_course.clone(),
            profile_image: record.profile_image.clone(),
        }
    }
}
