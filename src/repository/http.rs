use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::StudentRepository;
use crate::app_system::ApiConfig;
use crate::domain::{Course, StudentCandidate, StudentRecord};
use crate::error::TransportError;

/// [`StudentRepository`] backed by the REST endpoints under a base URL.
#[derive(Clone)]
pub struct HttpStudentRepository {
    http: Client,
    base_url: String,
    courses_delay: Duration,
}

impl HttpStudentRepository {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            courses_delay: config.courses_delay,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and rejects any non-success status.
    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl StudentRepository for HttpStudentRepository {
    #[instrument(skip(self))]
    async fn list_students(&self) -> Result<Vec<StudentRecord>, TransportError> {
        debug!("Sending request");
        let result = async {
            let response = self.send(self.http.get(self.url("/students"))).await?;
            Ok::<_, TransportError>(response.json::<Vec<StudentRecord>>().await?)
        }
        .await;

        match &result {
            Ok(students) => info!(count = students.len(), "Students fetched"),
            Err(e) => error!(error = %e, "Error fetching students"),
        }
        result
    }

    #[instrument(skip(self, candidate))]
    async fn create_student(&self, candidate: StudentCandidate) -> Result<StudentRecord, TransportError> {
        debug!("Sending request");
        let body = StudentRecord::from_candidate(Uuid::new_v4().to_string(), candidate.normalized());
        let result = async {
            let response = self
                .send(self.http.post(self.url("/students")).json(&body))
                .await?;
            Ok::<_, TransportError>(response.json::<StudentRecord>().await?)
        }
        .await;

        match &result {
            Ok(student) => info!(student_id = %student.id, "Student added"),
            Err(e) => error!(error = %e, "Error adding student"),
        }
        result
    }

    #[instrument(skip(self, candidate))]
    async fn update_student(&self, id: String, candidate: StudentCandidate) -> Result<StudentRecord, TransportError> {
        debug!("Sending request");
        let url = self.url(&format!("/students/{}", id));
        let body = StudentRecord::from_candidate(id, candidate);
        let result = async {
            let response = self.send(self.http.put(url).json(&body)).await?;
            Ok::<_, TransportError>(response.json::<StudentRecord>().await?)
        }
        .await;

        match &result {
            Ok(student) => info!(student_id = %student.id, "Student updated"),
            Err(e) => error!(student_id = %body.id, error = %e, "Error updating student"),
        }
        result
    }

    #[instrument(skip(self))]
    async fn delete_student(&self, id: String) -> Result<(), TransportError> {
        debug!("Sending request");
        let result = self
            .send(self.http.delete(self.url(&format!("/students/{}", id))))
            .await
            .map(|_| ());

        match &result {
            Ok(()) => info!("Student deleted successfully"),
            Err(e) => error!(error = %e, "Error deleting student"),
        }
        result
    }

    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<Course>, TransportError> {
        // Simulated latency ahead of the lookup.
        if !self.courses_delay.is_zero() {
            sleep(self.courses_delay).await;
        }

        debug!("Sending request");
        let result = async {
            let response = self.send(self.http.get(self.url("/courses"))).await?;
            Ok::<_, TransportError>(response.json::<Vec<Course>>().await?)
        }
        .await;

        match &result {
            Ok(courses) => info!(count = courses.len(), "Courses fetched"),
            Err(e) => error!(error = %e, "Error fetching courses"),
        }
        result
    }
}
