//! Main logger implementation

use super::{
    error::Result,
    global,
    handler::{absorb, guarded, Handler},
    level::Level,
    record::{Arg, Record},
    template::render as render_template,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Named facade combining a level threshold with exactly one handler.
///
/// Logging runs on the caller's thread: the record is built, handed to the
/// handler and fully processed before the logging method returns. Two calls
/// from the same thread therefore reach the handler in call order.
///
/// A call is delivered only if it passes both the logger's threshold and
/// the handler's own threshold. The logger check happens first and skips
/// building the record altogether.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder("svc")
///     .level(Level::Debug)
///     .handler(Arc::new(WriterHandler::new(Vec::new())))
///     .build();
///
/// logger.info("request id=%d", &[42.into()]);
/// logger.debug("suppressed by the handler's INFO threshold", &[]);
/// ```
pub struct Logger {
    name: String,
    level: RwLock<Level>,
    handler: RwLock<Arc<dyn Handler>>,
}

impl Logger {
    /// Logger at the default level, writing to the shared stderr handler
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_handler(name, global::stderr_handler())
    }

    #[must_use]
    pub fn with_handler(name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(Level::default()),
            handler: RwLock::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Replace the handler; records already being handled are unaffected
    pub fn set_handler(&self, handler: Arc<dyn Handler>) {
        *self.handler.write() = handler;
    }

    pub fn handler(&self) -> Arc<dyn Handler> {
        Arc::clone(&self.handler.read())
    }

    /// Whether a call at `level` would get past this logger's threshold
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    #[track_caller]
    pub fn log(&self, level: Level, template: &str, args: &[Arg]) {
        if !self.enabled(level) {
            return;
        }

        let mut template = template.to_string();
        if !template.ends_with('\n') {
            template.push('\n');
        }

        let record = Record::new(self.name.as_str(), level, template, args.to_vec());
        let handler = self.handler();
        absorb(0, handler.as_ref(), "handle", guarded(|| handler.handle(&record)));
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, template: &str, args: &[Arg]) {
        self.log(Level::Critical, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, template: &str, args: &[Arg]) {
        self.log(Level::Error, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, template: &str, args: &[Arg]) {
        self.log(Level::Warning, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, template: &str, args: &[Arg]) {
        self.log(Level::Notice, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, template: &str, args: &[Arg]) {
        self.log(Level::Info, template, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, template: &str, args: &[Arg]) {
        self.log(Level::Debug, template, args);
    }

    /// Log at CRITICAL, close the handler, then exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, template: &str, args: &[Arg]) -> ! {
        self.critical(template, args);
        self.close_quietly();
        std::process::exit(1)
    }

    /// Log at CRITICAL, close the handler, then panic with the rendered message
    #[track_caller]
    pub fn panic(&self, template: &str, args: &[Arg]) -> ! {
        self.critical(template, args);
        self.close_quietly();
        panic!("{}", render_template(template, args))
    }

    /// Release the handler's resources (e.g. a system log connection)
    pub fn close(&self) -> Result<()> {
        self.handler().close()
    }

    fn close_quietly(&self) {
        let handler = self.handler();
        absorb(0, handler.as_ref(), "close", guarded(|| handler.close()));
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .level(Level::Warning)
///     .build();
/// assert_eq!(logger.level(), Level::Warning);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Level,
    handler: Option<Arc<dyn Handler>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::default(),
            handler: None,
        }
    }

    /// Set the logger's threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the handler; defaults to the shared stderr handler
    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn build(self) -> Logger {
        let logger = match self.handler {
            Some(handler) => Logger::with_handler(self.name, handler),
            None => Logger::new(self.name),
        };
        logger.set_level(self.level);
        logger
    }
}

impl Logger {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
