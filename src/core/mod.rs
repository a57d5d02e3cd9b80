//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod global;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod template;

pub use config::{LoggerConfig, Target};
pub use error::{LoggerError, Result};
pub use formatter::{formatter_fn, DefaultFormatter, FnFormatter, Formatter, JsonFormatter};
pub use global::{
    default_logger, reset_default_logger, set_default_logger, stderr_handler, stdout_handler,
};
pub use handler::{Handler, HandlerBase};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use record::{process_name, Arg, Record};
