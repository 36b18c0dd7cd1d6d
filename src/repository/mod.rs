//! Remote access to students and courses.

pub mod http;

pub use http::*;

use async_trait::async_trait;

use crate::domain::{Course, StudentCandidate, StudentRecord};
use crate::error::TransportError;

/// Operations the dashboard performs against its backend.
///
/// Implementations do no caching and no retrying; every failure surfaces as a
/// [`TransportError`].
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, TransportError>;

    /// Assigns a fresh id, lowercases the email and stores the candidate.
    async fn create_student(&self, candidate: StudentCandidate) -> Result<StudentRecord, TransportError>;

    /// Full replace of the non-id fields of `id`.
    async fn update_student(&self, id: String, candidate: StudentCandidate) -> Result<StudentRecord, TransportError>;

    async fn delete_student(&self, id: String) -> Result<(), TransportError>;

    async fn list_courses(&self) -> Result<Vec<Course>, TransportError>;
}
