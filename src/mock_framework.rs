//! # Mock Framework
//!
//! Utilities for testing the dashboard actor without a backend.
//!
//! Use [`create_mock_repository`] to get a repository and a receiver.
//! Then use helpers like [`expect_list_students`] or [`expect_update_student`]
//! to assert each call and decide how it resolves.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::clients::DashboardClient;
use crate::dashboard_actor::{DashboardActor, FixedAnswer};
use crate::domain::{Course, StudentCandidate, StudentRecord};
use crate::error::TransportError;
use crate::repository::StudentRepository;

pub type Reply<T> = oneshot::Sender<Result<T, TransportError>>;

/// A repository call captured by [`MockRepository`].
#[derive(Debug)]
pub enum RepositoryCall {
    ListStudents { respond_to: Reply<Vec<StudentRecord>> },
    CreateStudent { candidate: StudentCandidate, respond_to: Reply<StudentRecord> },
    UpdateStudent { id: String, candidate: StudentCandidate, respond_to: Reply<StudentRecord> },
    DeleteStudent { id: String, respond_to: Reply<()> },
    ListCourses { respond_to: Reply<Vec<Course>> },
}

/// Forwards every call to a channel the test controls.
///
/// # Testing Strategy
/// The test plays the backend: it receives each call, asserts on its
/// arguments and sends back whatever result the scenario needs. Calls stay
/// pending until answered, which makes in-flight states observable.
#[derive(Clone)]
pub struct MockRepository {
    sender: mpsc::UnboundedSender<RepositoryCall>,
}

pub fn create_mock_repository() -> (MockRepository, mpsc::UnboundedReceiver<RepositoryCall>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (MockRepository { sender }, receiver)
}

impl MockRepository {
    async fn call<T>(&self, make: impl FnOnce(Reply<T>) -> RepositoryCall) -> Result<T, TransportError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .map_err(|_| TransportError::Network("mock backend gone".to_string()))?;
        response
            .await
            .map_err(|_| TransportError::Network("mock backend dropped the call".to_string()))?
    }
}

#[async_trait]
impl StudentRepository for MockRepository {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, TransportError> {
        self.call(|respond_to| RepositoryCall::ListStudents { respond_to }).await
    }

    async fn create_student(&self, candidate: StudentCandidate) -> Result<StudentRecord, TransportError> {
        self.call(|respond_to| RepositoryCall::CreateStudent { candidate, respond_to }).await
    }

    async fn update_student(&self, id: String, candidate: StudentCandidate) -> Result<StudentRecord, TransportError> {
        self.call(|respond_to| RepositoryCall::UpdateStudent { id, candidate, respond_to }).await
    }

    async fn delete_student(&self, id: String) -> Result<(), TransportError> {
        self.call(|respond_to| RepositoryCall::DeleteStudent { id, respond_to }).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, TransportError> {
        self.call(|respond_to| RepositoryCall::ListCourses { respond_to }).await
    }
}

/// Spawns a dashboard actor over a mock repository.
pub fn spawn_dashboard(confirm_deletes: bool) -> (DashboardClient, mpsc::UnboundedReceiver<RepositoryCall>) {
    let (repository, calls) = create_mock_repository();
    let (actor, client) = DashboardActor::new(16, Arc::new(repository), Arc::new(FixedAnswer(confirm_deletes)));
    tokio::spawn(actor.run());
    (client, calls)
}

/// Helper to verify that the next call is a student list fetch
pub async fn expect_list_students(receiver: &mut mpsc::UnboundedReceiver<RepositoryCall>) -> Option<Reply<Vec<StudentRecord>>> {
    match receiver.recv().await {
        Some(RepositoryCall::ListStudents { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next call is a create
pub async fn expect_create_student(
    receiver: &mut mpsc::UnboundedReceiver<RepositoryCall>,
) -> Option<(StudentCandidate, Reply<StudentRecord>)> {
    match receiver.recv().await {
        Some(RepositoryCall::CreateStudent { candidate, respond_to }) => Some((candidate, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is an update
pub async fn expect_update_student(
    receiver: &mut mpsc::UnboundedReceiver<RepositoryCall>,
) -> Option<(String, StudentCandidate, Reply<StudentRecord>)> {
    match receiver.recv().await {
        Some(RepositoryCall::UpdateStudent { id, candidate, respond_to }) => Some((id, candidate, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a delete
pub async fn expect_delete_student(receiver: &mut mpsc::UnboundedReceiver<RepositoryCall>) -> Option<(String, Reply<()>)> {
    match receiver.recv().await {
        Some(RepositoryCall::DeleteStudent { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is a course lookup
pub async fn expect_list_courses(receiver: &mut mpsc::UnboundedReceiver<RepositoryCall>) -> Option<Reply<Vec<Course>>> {
    match receiver.recv().await {
        Some(RepositoryCall::ListCourses { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository() {
        let (repository, mut receiver) = create_mock_repository();

        let update_task = tokio::spawn(async move {
            let candidate = StudentCandidate::new("Test", "test@example.com", "Math");
            repository.update_student("s1".to_string(), candidate).await
        });

        let (id, candidate, responder) = expect_update_student(&mut receiver).await.expect("Expected Update call");
        assert_eq!(id, "s1");
        assert_eq!(candidate.name, "Test");
        responder.send(Err(TransportError::Status(404))).unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(TransportError::Status(404)));
    }
}
