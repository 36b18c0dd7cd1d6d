use serde::{Deserialize, Serialize};

/// A course offered for enrollment. Read-only from the dashboard's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

#[allow(dead_code)]
impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
