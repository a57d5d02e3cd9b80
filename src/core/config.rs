//! Declarative logger configuration
//!
//! ```
//! use rust_leveled_logger::{Level, LoggerConfig};
//!
//! let config: LoggerConfig =
//!     serde_json::from_str(r#"{ "name": "api", "level": "DEBUG", "target": "stdout" }"#).unwrap();
//! let logger = config.build();
//! assert_eq!(logger.level(), Level::Debug);
//! ```

use super::{handler::Handler, level::Level, logger::Logger, record::process_name};
use crate::handlers::WriterHandler;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Standard stream a configured logger writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logger name shown in every record; defaults to the executable name
    pub name: String,
    /// Threshold applied to both the logger and its handler
    pub level: Level,
    pub target: Target,
    pub colorize: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: process_name().to_string(),
            level: Level::default(),
            target: Target::default(),
            colorize: true,
        }
    }
}

impl LoggerConfig {
    /// Build a logger with its own stream handler (not the shared one)
    pub fn build(&self) -> Logger {
        let handler: Arc<dyn Handler> = match self.target {
            Target::Stdout => Arc::new(WriterHandler::stdout().with_colors(self.colorize)),
            Target::Stderr => Arc::new(WriterHandler::stderr().with_colors(self.colorize)),
        };
        handler.set_level(self.level);

        Logger::builder(self.name.as_str())
            .level(self.level)
            .handler(handler)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, process_name());
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.target, Target::Stderr);
        assert!(config.colorize);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{ "level": "WARNING" }"#).unwrap();
        assert_eq!(config.level, Level::Warning);
        assert_eq!(config.target, Target::Stderr);
        assert!(config.colorize);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result: Result<LoggerConfig, _> = serde_json::from_str(r#"{ "level": "LOUD" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_applies_level_to_logger_and_handler() {
        let config = LoggerConfig {
            name: "api".to_string(),
            level: Level::Debug,
            target: Target::Stdout,
            colorize: false,
        };
        let logger = config.build();
        assert_eq!(logger.name(), "api");
        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(logger.handler().level(), Level::Debug);
    }
}
