//! CLI module graph.

pub mod command;
pub mod diagnostic;
pub mod find;
pub mod output;
pub mod validate;

use self::command::Cli;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

/// Effective logging settings: `--log-level` beats `-v`, which only ever
/// makes the config file's level more verbose. `--json-logs` forces JSON
/// formatting.
#[must_use]
pub fn logging_config(cli: &Cli, config: &Config) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if let Some(level) = LoggingConfig::level_for_verbosity(cli.verbose) {
        logging.raise_to(level);
    }
    if let Some(level) = cli.log_level {
        logging.level = level.as_str().to_string();
    }
    if cli.json_logs {
        logging.format = crate::infrastructure::config::logging::FORMAT_JSON.to_string();
    }
    logging
}
