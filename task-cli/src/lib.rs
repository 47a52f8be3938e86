pub mod command;
pub mod config;
pub mod error;
pub mod manager;
pub mod repository;
pub mod task;

pub use command::{Cli, Command};
pub use error::Error;
pub use manager::{Reply, TaskManager};
pub use repository::{JsonFileRepository, TaskRepository};
pub use task::{Status, Task};
