use async_trait::async_trait;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Asks the user to approve a delete before anything happens.
#[async_trait]
pub trait DeleteConfirmation: Send + Sync + 'static {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Gives the same answer to every prompt.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl DeleteConfirmation for FixedAnswer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
