//! Process-wide default logger
//!
//! The default logger is created on first use, named after the running
//! executable, set to INFO and wired to the shared stderr handler. The free
//! functions in this module forward to it, for call sites that do not carry a
//! [`Logger`] of their own.
//!
//! ```
//! use rust_leveled_logger as log;
//!
//! log::info("listening on port %d", &[8080.into()]);
//! log::debug("not shown at the default INFO level", &[]);
//! ```

use super::{
    formatter::DefaultFormatter,
    handler::Handler,
    level::Level,
    logger::Logger,
    record::{process_name, Arg},
};
use crate::handlers::WriterHandler;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::io::{Stderr, Stdout};
use std::sync::Arc;

static STDOUT_HANDLER: Lazy<Arc<WriterHandler<Stdout>>> =
    Lazy::new(|| Arc::new(WriterHandler::stdout()));

static STDERR_HANDLER: Lazy<Arc<WriterHandler<Stderr>>> =
    Lazy::new(|| Arc::new(WriterHandler::stderr()));

static DEFAULT_LOGGER: Lazy<RwLock<Arc<Logger>>> =
    Lazy::new(|| RwLock::new(Arc::new(Logger::new(process_name()))));

/// Shared colorized handler on standard output
pub fn stdout_handler() -> Arc<WriterHandler<Stdout>> {
    Arc::clone(&STDOUT_HANDLER)
}

/// Shared colorized handler on standard error; the default for new loggers
pub fn stderr_handler() -> Arc<WriterHandler<Stderr>> {
    Arc::clone(&STDERR_HANDLER)
}

pub fn default_logger() -> Arc<Logger> {
    Arc::clone(&DEFAULT_LOGGER.read())
}

/// Install `logger` as the default, returning the one it replaces
pub fn set_default_logger(logger: Logger) -> Arc<Logger> {
    std::mem::replace(&mut *DEFAULT_LOGGER.write(), Arc::new(logger))
}

/// Put the default logger and the shared standard handlers back in their
/// initial state. Meant for test teardown.
pub fn reset_default_logger() {
    let shared: [Arc<dyn Handler>; 2] = [stdout_handler(), stderr_handler()];
    for handler in shared {
        handler.set_level(Level::default());
        handler.set_formatter(Arc::new(DefaultFormatter));
    }
    STDOUT_HANDLER.set_colorize(true);
    STDERR_HANDLER.set_colorize(true);
    set_default_logger(Logger::new(process_name()));
}

/// Set the default logger's threshold
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

/// Replace the default logger's handler
pub fn set_handler(handler: Arc<dyn Handler>) {
    default_logger().set_handler(handler);
}

#[track_caller]
pub fn critical(template: &str, args: &[Arg]) {
    default_logger().critical(template, args);
}

#[track_caller]
pub fn error(template: &str, args: &[Arg]) {
    default_logger().error(template, args);
}

#[track_caller]
pub fn warning(template: &str, args: &[Arg]) {
    default_logger().warning(template, args);
}

#[track_caller]
pub fn notice(template: &str, args: &[Arg]) {
    default_logger().notice(template, args);
}

#[track_caller]
pub fn info(template: &str, args: &[Arg]) {
    default_logger().info(template, args);
}

#[track_caller]
pub fn debug(template: &str, args: &[Arg]) {
    default_logger().debug(template, args);
}

#[track_caller]
pub fn fatal(template: &str, args: &[Arg]) -> ! {
    default_logger().fatal(template, args)
}

#[track_caller]
pub fn panic(template: &str, args: &[Arg]) -> ! {
    default_logger().panic(template, args)
}
