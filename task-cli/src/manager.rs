use crate::command::Command;
use crate::error::Error;
use crate::repository::TaskRepository;
use crate::task::{Status, Task};
use chrono::Utc;
use tracing::info;

pub type Reply = String;

/// Result of a listing; the caller decides how to print it.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
    Tasks(Vec<Task>),
    Empty,
    NoneWithStatus(String),
}

/// Applies one command to the stored collection: load everything, change at most one task,
/// save everything.
pub struct TaskManager<'a, REPO: TaskRepository> {
    repository: &'a REPO,
}

impl<'a, REPO: TaskRepository> TaskManager<'a, REPO> {
    pub fn new(repository: &'a REPO) -> Self {
        Self { repository }
    }

    /// Adds a `todo` task and returns its ID, one past the largest existing ID.
    pub fn add(&self, description: String) -> Result<u32, Error> {
        let mut tasks = self.repository.load_all();
        let largest = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        let id = largest.checked_add(1).ok_or(Error::IdsExhausted(largest))?;
        tasks.push(Task::new(id, description, Utc::now()));
        self.repository.save_all(&tasks)?;
        info!("Added task {}", id);
        Ok(id)
    }

    pub fn update(&self, id: u32, description: String) -> Result<(), Error> {
        self.modify(id, |task| task.description = description)?;
        info!("Updated task {}", id);
        Ok(())
    }

    pub fn delete(&self, id: u32) -> Result<(), Error> {
        let mut tasks = self.repository.load_all();
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        tasks.remove(index);
        self.repository.save_all(&tasks)?;
        info!("Deleted task {}", id);
        Ok(())
    }

    /// Sets the status unconditionally; any status may follow any other.
    pub fn change_status(&self, id: u32, status: Status) -> Result<(), Error> {
        self.modify(id, |task| task.status = status)
            .map_err(|e| match e {
                Error::NotFound(id) => Error::StatusTargetNotFound(id),
                other => other,
            })?;
        info!("Task {} is now {}", id, status);
        Ok(())
    }

    /// Lists tasks in stored order. A filter that is not a known status matches nothing.
    pub fn list(&self, status: Option<&str>) -> Listing {
        let tasks = self.repository.load_all();
        match status {
            Some(filter) => {
                let matching: Vec<Task> = match filter.parse::<Status>() {
                    Ok(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
                    Err(_) => Vec::new(),
                };
                if matching.is_empty() {
                    Listing::NoneWithStatus(filter.to_string())
                } else {
                    Listing::Tasks(matching)
                }
            }
            None if tasks.is_empty() => Listing::Empty,
            None => Listing::Tasks(tasks),
        }
    }

    /// Runs a parsed command and renders the message to print.
    pub fn execute(&self, command: Command) -> Result<Reply, Error> {
        match command {
            Command::Add { description } => {
                let id = self.add(description)?;
                Ok(format!("Task added successfully (ID: {})", id))
            }
            Command::Update { id, description } => {
                self.update(id, description)?;
                Ok(format!("Task updated successfully (ID: {})", id))
            }
            Command::Delete { id } => {
                self.delete(id)?;
                Ok(format!("Task deleted successfully (ID: {})", id))
            }
            Command::ChangeStatus { id, status } => {
                self.change_status(id, status)?;
                Ok(format!("Task {} marked as {}.", id, status))
            }
            Command::List { status } => Ok(match self.list(status.as_deref()) {
                // Entries already end in a newline; the blank line separates them.
                Listing::Tasks(tasks) => tasks
                    .iter()
                    .map(Task::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
                Listing::Empty => "No tasks.".to_string(),
                Listing::NoneWithStatus(status) => {
                    format!("No tasks with status \"{}\".", status)
                }
            }),
        }
    }

    fn modify(&self, id: u32, change: impl FnOnce(&mut Task)) -> Result<(), Error> {
        let mut tasks = self.repository.load_all();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        change(task);
        task.touch(Utc::now());
        self.repository.save_all(&tasks)?;
        Ok(())
    }
}
