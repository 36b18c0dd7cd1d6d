use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, Instrument};

use super::{DashboardState, DeleteConfirmation, SaveAction, DELETE_PROMPT};
use crate::clients::DashboardClient;
use crate::domain::{StudentCandidate, StudentRecord};
use crate::messages::{Completion, DashboardRequest, Responder};
use crate::repository::StudentRepository;

/// Owns the dashboard state and runs the load/save/delete workflow.
///
/// Repository calls run on spawned tasks and report back as [`Completion`]s,
/// so intents keep flowing while requests are in flight. Nothing is cancelled
/// or queued: when two loads overlap, whichever finishes last wins.
pub struct DashboardActor {
    receiver: mpsc::Receiver<DashboardRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_sender: mpsc::UnboundedSender<Completion>,
    repository: Arc<dyn StudentRepository>,
    confirmation: Arc<dyn DeleteConfirmation>,
    state: DashboardState,
}

impl DashboardActor {
    pub fn new(
        buffer_size: usize,
        repository: Arc<dyn StudentRepository>,
        confirmation: Arc<dyn DeleteConfirmation>,
    ) -> (Self, DashboardClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            repository,
            confirmation,
            state: DashboardState::default(),
        };
        (actor, DashboardClient::new(sender))
    }

    /// Starts the initial student load, then runs until every client handle has been dropped.
    #[instrument(name = "dashboard_actor", skip(self))]
    pub async fn run(mut self) {
        info!("DashboardActor starting");
        self.handle_load_students(None);
        loop {
            tokio::select! {
                Some(completion) = self.completions.recv() => self.handle_completion(completion),
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle_request(request),
                    None => break,
                },
            }
        }
        info!("DashboardActor stopped");
    }

    fn handle_request(&mut self, request: DashboardRequest) {
        match request {
            DashboardRequest::LoadStudents { respond_to } => self.handle_load_students(Some(respond_to)),
            DashboardRequest::BeginAdd { respond_to } => {
                self.state.begin_add();
                self.respond(respond_to);
            }
            DashboardRequest::BeginEdit { record, respond_to } => self.handle_begin_edit(record, respond_to),
            DashboardRequest::Save { candidate, respond_to } => self.handle_save(candidate, respond_to),
            DashboardRequest::Delete { id, respond_to } => self.handle_delete(id, respond_to),
            DashboardRequest::Cancel { respond_to } => {
                self.state.cancel();
                self.respond(respond_to);
            }
            DashboardRequest::LoadCourses { respond_to } => self.handle_load_courses(respond_to),
            DashboardRequest::Snapshot { respond_to } => self.respond(respond_to),
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::StudentsLoaded { result, respond_to } => {
                self.state.finish_loading(result);
                info!(total = self.state.total_count(), "Student list refreshed");
                if let Some(respond_to) = respond_to {
                    self.respond(respond_to);
                }
            }
            Completion::Saved { action, result, respond_to } => {
                if self.state.finish_save(&action, result) {
                    info!(action = action.verb(), "Student saved, reloading list");
                    self.handle_load_students(Some(respond_to));
                } else {
                    self.respond(respond_to);
                }
            }
            Completion::DeleteConfirmed { id, respond_to } => self.handle_confirmed_delete(id, respond_to),
            Completion::DeleteDeclined { respond_to } => {
                debug!("Delete declined");
                self.respond(respond_to);
            }
            Completion::Deleted { result, respond_to } => {
                if self.state.finish_delete(result) {
                    self.handle_load_students(Some(respond_to));
                } else {
                    self.respond(respond_to);
                }
            }
            Completion::CoursesLoaded { result, respond_to } => {
                self.state.finish_courses_loading(result);
                self.respond(respond_to);
            }
        }
    }

    #[instrument(skip(self, respond_to))]
    fn handle_load_students(&mut self, respond_to: Option<Responder>) {
        debug!("Processing load_students request");
        self.state.start_loading();
        let repository = self.repository.clone();
        self.spawn_completion(async move {
            let result = repository.list_students().await;
            Completion::StudentsLoaded { result, respond_to }
        });
    }

    #[instrument(fields(student_id = %record.id), skip(self, record, respond_to))]
    fn handle_begin_edit(&mut self, record: StudentRecord, respond_to: Responder) {
        debug!("Processing begin_edit request");
        self.state.begin_edit(record);
        self.respond(respond_to);
    }

    #[instrument(skip(self, candidate, respond_to))]
    fn handle_save(&mut self, candidate: StudentCandidate, respond_to: Responder) {
        let action = self.state.start_save();
        debug!(action = action.verb(), "Processing save request");
        let repository = self.repository.clone();
        self.spawn_completion(async move {
            let result = match &action {
                SaveAction::Add => repository.create_student(candidate).await,
                SaveAction::Update(id) => repository.update_student(id.clone(), candidate).await,
            };
            Completion::Saved { action, result, respond_to }
        });
    }

    /// Nothing changes until the confirmation collaborator approves.
    #[instrument(skip(self, respond_to))]
    fn handle_delete(&mut self, id: String, respond_to: Responder) {
        debug!("Processing delete request");
        let confirmation = self.confirmation.clone();
        self.spawn_completion(async move {
            if confirmation.confirm(DELETE_PROMPT).await {
                Completion::DeleteConfirmed { id, respond_to }
            } else {
                Completion::DeleteDeclined { respond_to }
            }
        });
    }

    #[instrument(skip(self, respond_to))]
    fn handle_confirmed_delete(&mut self, id: String, respond_to: Responder) {
        debug!("Delete confirmed");
        self.state.start_delete();
        let repository = self.repository.clone();
        self.spawn_completion(async move {
            let result = repository.delete_student(id).await;
            Completion::Deleted { result, respond_to }
        });
    }

    #[instrument(skip(self, respond_to))]
    fn handle_load_courses(&mut self, respond_to: Responder) {
        debug!("Processing load_courses request");
        self.state.start_courses_loading();
        let repository = self.repository.clone();
        self.spawn_completion(async move {
            let result = repository.list_courses().await;
            Completion::CoursesLoaded { result, respond_to }
        });
    }

    fn spawn_completion<F>(&self, work: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let completions = self.completion_sender.clone();
        tokio::spawn(
            async move {
                let _ = completions.send(work.await);
            }
            .in_current_span(),
        );
    }

    fn respond(&self, respond_to: Responder) {
        let _ = respond_to.send(self.state.clone());
    }
}
