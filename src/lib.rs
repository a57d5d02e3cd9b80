//! # Rust Leveled Logger
//!
//! Leveled logging with pluggable formatters and sinks.
//!
//! ## Features
//!
//! - **Six Levels**: CRITICAL, ERROR, WARNING, NOTICE, INFO, DEBUG
//! - **Two Gates**: each logger and each handler carries its own threshold
//! - **Multiple Sinks**: streams, the system log, or concurrent fan-out to several
//! - **Zero Setup**: free functions log through a lazily created default logger
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let logger = Logger::new("svc");
//! info!(logger, "request id=%d", 42);
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        formatter_fn, Arg, DefaultFormatter, Formatter, Handler, HandlerBase, JsonFormatter,
        Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, Record, Result, Target,
    };
    pub use crate::handlers::{MultiHandler, SyslogHandler, SyslogTransport, WriterHandler};
}

pub use crate::core::global::{
    critical, debug, error, fatal, info, notice, panic, set_handler, set_level, warning,
};
pub use crate::core::{
    default_logger, formatter_fn, process_name, reset_default_logger, set_default_logger,
    stderr_handler, stdout_handler, Arg, DefaultFormatter, FnFormatter, Formatter, Handler,
    HandlerBase, JsonFormatter, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError, Record,
    Result, Target,
};
pub use handlers::{MultiHandler, SyslogHandler, SyslogTransport, WriterHandler};
