use clap::Parser;
use task_cli::config::Config;
use task_cli::{Cli, Command, JsonFileRepository, TaskManager};
use tracing::{debug, warn};

const TASK_FILE: &str = "tasks.json";

fn main() {
    let args = Cli::parse();

    let (config, config_error) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level())
        .init();
    if let Some(e) = config_error {
        warn!("Invalid configuration, using defaults: {}", e);
    }

    let repository = JsonFileRepository::new(TASK_FILE);
    debug!("Using task file {}", repository.path().display());
    let manager = TaskManager::new(&repository);

    // Failures are reported as text; the exit status stays 0.
    let reply = Command::try_from(args.command)
        .and_then(|command| manager.execute(command))
        .unwrap_or_else(|e| e.to_string());
    println!("{}", reply);
}
