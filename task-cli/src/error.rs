use crate::repository::RepositoryError;

/// Everything that can stop a command. The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid ID")]
    InvalidId,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Task not found")]
    NotFound(u32),

    /// Status changes report a missing task with a trailing period.
    #[error("Task not found.")]
    StatusTargetNotFound(u32),

    #[error("No task IDs left after {0}")]
    IdsExhausted(u32),

    #[error("Error saving tasks: {0}")]
    Persistence(#[from] RepositoryError),
}
