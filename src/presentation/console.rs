use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::render_dashboard;
use crate::clients::DashboardClient;
use crate::dashboard_actor::{DashboardState, DeleteConfirmation};
use crate::error::DashboardError;
use crate::form::StudentForm;
use crate::validation::StudentField;

const HELP: &str = "\
commands:
  list                  reload students
  add                   open an empty form
  edit <id>             open the form for a student
  set <field> <value>   fill a form field (name, email, course, image)
  save                  submit the form
  cancel                close the form
  delete <id>           delete a student
  courses               reload the course list
  quit";

/// Stdin shared between the command loop and the delete prompt.
pub type InputLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> InputLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Asks on the terminal; only `y` or `yes` confirms.
pub struct ConsoleConfirmation {
    input: InputLines,
}

impl ConsoleConfirmation {
    pub fn new(input: InputLines) -> Self {
        Self { input }
    }
}

#[async_trait]
impl DeleteConfirmation for ConsoleConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = tokio::io::stdout();
        let _ = stdout.write_all(format!("{} [y/N] ", prompt).as_bytes()).await;
        let _ = stdout.flush().await;

        match self.input.lock().await.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Add,
    Edit(String),
    Set(StudentField, String),
    Save,
    Cancel,
    Delete(String),
    Courses,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let required = |what: &str| {
        if rest.is_empty() {
            Err(format!("usage: {} <{}>", word, what))
        } else {
            Ok(rest.to_string())
        }
    };

    match word {
        "list" | "refresh" => Ok(Command::List),
        "add" => Ok(Command::Add),
        "edit" => required("id").map(Command::Edit),
        "delete" => required("id").map(Command::Delete),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<StudentField>()?;
            Ok(Command::Set(field, value.trim().to_string()))
        }
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "courses" => Ok(Command::Courses),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

/// Command loop driving the dashboard from the terminal.
pub struct Console {
    client: DashboardClient,
    input: InputLines,
    state: DashboardState,
    form: Option<StudentForm>,
}

impl Console {
    pub fn new(client: DashboardClient, input: InputLines) -> Self {
        Self {
            client,
            input,
            state: DashboardState::default(),
            form: None,
        }
    }

    /// Waits for the startup load, then reads commands until `quit` or end of input.
    pub async fn run(mut self) -> Result<(), DashboardError> {
        println!("{}", HELP);
        self.state = self.client.settled().await?;
        self.draw();

        loop {
            let line = match self.input.lock().await.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read from stdin");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => println!("{}", HELP),
                Ok(command) => {
                    self.execute(command).await?;
                    self.draw();
                }
                Err(message) => println!("{}", message),
            }
        }

        info!("Console closed");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), DashboardError> {
        match command {
            Command::List => self.state = self.client.load_students().await?,
            Command::Add => {
                self.state = self.client.begin_add().await?;
                self.form = Some(StudentForm::new(None));
                self.state = self.client.load_courses().await?;
            }
            Command::Edit(id) => {
                let Some(record) = self.state.find_record(&id).cloned() else {
                    println!("No student with id {}", id);
                    return Ok(());
                };
                self.form = Some(StudentForm::new(Some(&record)));
                self.state = self.client.begin_edit(record).await?;
                self.state = self.client.load_courses().await?;
            }
            Command::Set(field, value) => {
                let Some(form) = self.form.as_mut() else {
                    println!("No form open; use `add` or `edit <id>` first");
                    return Ok(());
                };
                if field == StudentField::EnrolledCourse {
                    if let Err(message) = form.select_course(&value, self.state.courses()) {
                        println!("{}", message);
                    }
                } else {
                    form.set_field(field, value);
                }
            }
            Command::Save => self.save().await?,
            Command::Cancel => {
                self.state = self.client.cancel().await?;
                self.form = None;
            }
            Command::Delete(id) => self.state = self.client.delete(id).await?,
            Command::Courses => self.state = self.client.load_courses().await?,
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    async fn save(&mut self) -> Result<(), DashboardError> {
        // The local copy can be stale; ask the actor whether a save is in flight.
        self.state = self.client.snapshot().await?;
        if self.state.is_form_submitting() {
            println!("A save is already in progress");
            return Ok(());
        }
        let Some(form) = self.form.as_mut() else {
            println!("No form open; use `add` or `edit <id>` first");
            return Ok(());
        };
        let Some(candidate) = form.submit() else {
            return Ok(());
        };

        self.state = self.client.save(candidate).await?;
        if !self.state.is_form_visible() {
            self.form = None;
        }
        Ok(())
    }

    fn draw(&self) {
        println!("{}", render_dashboard(&self.state, self.form.as_ref()));
    }
}
