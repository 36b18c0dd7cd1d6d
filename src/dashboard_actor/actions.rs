/// The mutation a form save turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    /// Creates a new student.
    Add,
    /// Replaces the student with the given id.
    Update(String),
}

impl SaveAction {
    /// Verb used in user-facing failure messages.
    pub fn verb(&self) -> &'static str {
        match self {
            SaveAction::Add => "add",
            SaveAction::Update(_) => "update",
        }
    }
}
