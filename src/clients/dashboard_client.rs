use std::time::Duration;

use tokio::sync::mpsc;

use crate::dashboard_actor::DashboardState;
use crate::domain::{StudentCandidate, StudentRecord};
use crate::error::DashboardError;
use crate::messages::DashboardRequest;

/// Client for interacting with the dashboard actor.
///
/// Each method resolves to the dashboard state once the intent has settled.
/// Repository failures never surface here; they land in
/// [`DashboardState::error`] instead.
#[derive(Clone)]
pub struct DashboardClient {
    sender: mpsc::Sender<DashboardRequest>,
}

const SETTLE_POLL: Duration = Duration::from_millis(20);

impl DashboardClient {
    pub fn new(sender: mpsc::Sender<DashboardRequest>) -> Self {
        Self { sender }
    }

    /// Waits until no student load, save or course lookup is in flight.
    ///
    /// Used to pick up the result of the load the actor starts on its own.
    pub async fn settled(&self) -> Result<DashboardState, DashboardError> {
        loop {
            let state = self.snapshot().await?;
            if !state.is_loading() && !state.is_form_submitting() && !state.is_courses_loading() {
                return Ok(state);
            }
            tokio::time::sleep(SETTLE_POLL).await;
        }
    }
}

client_method!(DashboardClient => fn load_students() -> DashboardState as DashboardRequest::LoadStudents);
client_method!(DashboardClient => fn begin_add() -> DashboardState as DashboardRequest::BeginAdd);
client_method!(DashboardClient => fn begin_edit(record: StudentRecord) -> DashboardState as DashboardRequest::BeginEdit);
client_method!(DashboardClient => fn save(candidate: StudentCandidate) -> DashboardState as DashboardRequest::Save);
client_method!(DashboardClient => fn delete(id: String) -> DashboardState as DashboardRequest::Delete);
client_method!(DashboardClient => fn cancel() -> DashboardState as DashboardRequest::Cancel);
client_method!(DashboardClient => fn load_courses() -> DashboardState as DashboardRequest::LoadCourses);
client_method!(DashboardClient => fn snapshot() -> DashboardState as DashboardRequest::Snapshot);
