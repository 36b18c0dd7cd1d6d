use tokio::sync::oneshot;

use crate::dashboard_actor::{DashboardState, SaveAction};
use crate::domain::{Course, StudentCandidate, StudentRecord};
use crate::error::TransportError;

/// Every intent is answered with the state as it stands once the intent has settled.
pub type Responder = oneshot::Sender<DashboardState>;

/// User intents sent to the dashboard actor.
#[derive(Debug)]
pub enum DashboardRequest {
    LoadStudents {
        respond_to: Responder,
    },
    BeginAdd {
        respond_to: Responder,
    },
    BeginEdit {
        record: StudentRecord,
        respond_to: Responder,
    },
    Save {
        candidate: StudentCandidate,
        respond_to: Responder,
    },
    Delete {
        id: String,
        respond_to: Responder,
    },
    Cancel {
        respond_to: Responder,
    },
    LoadCourses {
        respond_to: Responder,
    },
    Snapshot {
        respond_to: Responder,
    },
}

/// Results of background work, fed back into the actor's loop.
#[derive(Debug)]
pub enum Completion {
    StudentsLoaded {
        result: Result<Vec<StudentRecord>, TransportError>,
        /// `None` for the load the actor starts on its own.
        respond_to: Option<Responder>,
    },
    Saved {
        action: SaveAction,
        result: Result<StudentRecord, TransportError>,
        respond_to: Responder,
    },
    DeleteConfirmed {
        id: String,
        respond_to: Responder,
    },
    DeleteDeclined {
        respond_to: Responder,
    },
    Deleted {
        result: Result<(), TransportError>,
        respond_to: Responder,
    },
    CoursesLoaded {
        result: Result<Vec<Course>, TransportError>,
        respond_to: Responder,
    },
}
