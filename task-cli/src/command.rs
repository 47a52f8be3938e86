use crate::error::Error;
use crate::task::Status;
use clap::{Parser, Subcommand};

pub const USAGE: &str = "Usage: task-cli [command] [arguments]";

/// Track short tasks in a local JSON file
#[derive(Parser, Debug)]
#[command(name = "task-cli", version, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Arguments are collected raw so that counting and ID parsing produce the program's own
// messages instead of clap's.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "DESCRIPTION")]
        args: Vec<String>,
    },
    /// Change the description of a task
    Update {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ID DESCRIPTION")]
        args: Vec<String>,
    },
    /// Delete a task
    Delete {
        #[arg(allow_hyphen_values = true, value_name = "ID")]
        args: Vec<String>,
    },
    /// Mark a task as in progress
    MarkInProgress {
        #[arg(allow_hyphen_values = true, value_name = "ID")]
        args: Vec<String>,
    },
    /// Mark a task as done
    MarkDone {
        #[arg(allow_hyphen_values = true, value_name = "ID")]
        args: Vec<String>,
    },
    /// List tasks, optionally only those with the given status
    List {
        #[arg(allow_hyphen_values = true, value_name = "STATUS")]
        args: Vec<String>,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Add { description: String },
    Update { id: u32, description: String },
    Delete { id: u32 },
    ChangeStatus { id: u32, status: Status },
    List { status: Option<String> },
}

fn parse_id(token: &str) -> Result<u32, Error> {
    token.parse().map_err(|_| Error::InvalidId)
}

impl TryFrom<Option<Commands>> for Command {
    type Error = Error;

    fn try_from(command: Option<Commands>) -> Result<Self, Self::Error> {
        let Some(command) = command else {
            return Err(Error::Usage(USAGE));
        };

        match command {
            Commands::Add { args } => {
                if args.is_empty() {
                    return Err(Error::Usage("Usage: task-cli add \"task name\""));
                }
                Ok(Command::Add {
                    description: args.join(" "),
                })
            }
            Commands::Update { args } => match args.split_first() {
                Some((id, description)) if !description.is_empty() => Ok(Command::Update {
                    id: parse_id(id)?,
                    description: description.join(" "),
                }),
                _ => Err(Error::Usage(
                    "Usage: task-cli update [id] \"description\"",
                )),
            },
            Commands::Delete { args } => match args.first() {
                Some(id) => Ok(Command::Delete { id: parse_id(id)? }),
                None => Err(Error::Usage("Usage: task-cli delete [id]")),
            },
            Commands::MarkInProgress { args } => match args.first() {
                Some(id) => Ok(Command::ChangeStatus {
                    id: parse_id(id)?,
                    status: Status::InProgress,
                }),
                None => Err(Error::Usage("Usage: task-cli mark-in-progress [id]")),
            },
            Commands::MarkDone { args } => match args.first() {
                Some(id) => Ok(Command::ChangeStatus {
                    id: parse_id(id)?,
                    status: Status::Done,
                }),
                None => Err(Error::Usage("Usage: task-cli mark-done [id]")),
            },
            // Only a single token filters; anything else lists everything.
            Commands::List { mut args } => Ok(Command::List {
                status: if args.len() == 1 { args.pop() } else { None },
            }),
            Commands::External(args) => Err(Error::UnknownCommand(
                args.into_iter().next().unwrap_or_default(),
            )),
        }
    }
}
