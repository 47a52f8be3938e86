use serde::Deserialize;

/// Diagnostics settings only; the task file location is fixed.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from `TASK_CLI_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("TASK_CLI"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
