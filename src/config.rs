//! Configuration management for the library console

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// When set, logs go to `library.log` in this directory instead of stderr
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub title: String,
    pub pause_after_action: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&run_mode)?
            // Add environment variables, e.g. LIBRARY_CONSOLE__PAUSE_AFTER_ACTION=true
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Defaults layered under the optional `config/default` and `config/{run_mode}` files
    fn builder(run_mode: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let logging = LoggingConfig::default();
        let console = ConsoleConfig::default();

        Ok(Config::builder()
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .set_default("console.title", console.title)?
            .set_default("console.pause_after_action", console.pause_after_action)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false)))
    }
}

impl LoggingConfig {
    /// Whether log lines should be emitted as JSON
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            title: "Library System".to_string(),
            pause_after_action: false,
        }
    }
}
