//! Handler trait for log output destinations

use super::{
    error::{LoggerError, Result},
    formatter::{DefaultFormatter, Formatter},
    level::Level,
    record::Record,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// A sink with its own level threshold and formatter.
///
/// Handlers are shared (`Arc<dyn Handler>`) between loggers and multi-handlers,
/// so every method takes `&self`. Errors returned from `handle` and `close`
/// stay below the logger: callers of the logging methods never see them.
pub trait Handler: Send + Sync {
    fn set_level(&self, level: Level);
    fn level(&self) -> Level;
    fn set_formatter(&self, formatter: Arc<dyn Formatter>);
    fn handle(&self, record: &Record) -> Result<()>;
    fn close(&self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Level filter and formatter shared by every concrete handler
pub struct HandlerBase {
    level: RwLock<Level>,
    formatter: RwLock<Arc<dyn Formatter>>,
}

impl HandlerBase {
    pub fn new() -> Self {
        Self {
            level: RwLock::new(Level::default()),
            formatter: RwLock::new(Arc::new(DefaultFormatter)),
        }
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        *self.formatter.write() = formatter;
    }

    pub fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&self.formatter.read())
    }

    /// Render `record` if this handler's threshold lets it through.
    ///
    /// `None` means "suppressed": the caller must not write anything. An
    /// empty rendering is treated the same way.
    pub fn filter_and_format(&self, record: &Record) -> Option<String> {
        if !self.level().allows(record.level()) {
            return None;
        }
        let formatter = self.formatter();
        let message = formatter.format(record);
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

impl Default for HandlerBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one guarded handler call: the panic payload, or the handler's own result
pub(crate) type Outcome = std::thread::Result<Result<()>>;

/// Run `f`, turning a panic into an `Err` outcome
pub(crate) fn guarded<F: FnOnce() -> Result<()>>(f: F) -> Outcome {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
}

/// Report a failed delivery on stderr and drop it
pub(crate) fn absorb(index: usize, handler: &dyn Handler, operation: &str, outcome: Outcome) {
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            eprintln!(
                "[LOGGER ERROR] Handler #{} ({}) {} failed: {}",
                index,
                handler.name(),
                operation,
                e
            );
        }
        Err(panic_info) => {
            eprintln!(
                "[LOGGER CRITICAL] {} during {}. Other handlers continue to function.",
                LoggerError::handler_panicked(index, panic_info.as_ref()),
                operation
            );
        }
    }
}
