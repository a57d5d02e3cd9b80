//! Fan-out handler
//!
//! Sends each record to every child handler concurrently and waits for all of
//! them before returning, so one log call costs as much as the slowest child
//! rather than the sum of all children. Failures (errors or panics) in one
//! child are reported on stderr and never reach the others or the caller.
//!
//! There is no timeout: a child that blocks forever blocks the fan-out.

use crate::core::handler::{absorb, guarded, Outcome};
use crate::core::{Formatter, Handler, Level, Record, Result};
use std::sync::Arc;
use std::thread;

/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let console = Arc::new(WriterHandler::new(Vec::new()));
/// let audit = Arc::new(WriterHandler::new(Vec::new()));
/// audit.set_level(Level::Warning);
///
/// let logger = Logger::new("svc");
/// logger.set_handler(Arc::new(MultiHandler::new(vec![console, audit])));
/// logger.info("only the console sees this", &[]);
/// logger.error("both sinks see this", &[]);
/// ```
pub struct MultiHandler {
    handlers: Vec<Arc<dyn Handler>>,
}

impl MultiHandler {
    pub fn new(handlers: Vec<Arc<dyn Handler>>) -> Self {
        Self { handlers }
    }

    pub fn handlers(&self) -> &[Arc<dyn Handler>] {
        &self.handlers
    }

    fn fan_out<F>(&self, operation: &str, f: F)
    where
        F: Fn(&dyn Handler) -> Result<()> + Sync,
    {
        match self.handlers.as_slice() {
            [] => {}
            // Nothing to overlap with, stay on the caller's thread
            [only] => absorb(0, only.as_ref(), operation, guarded(|| f(only.as_ref()))),
            handlers => {
                let f = &f;
                thread::scope(|scope| {
                    let pending: Vec<_> = handlers
                        .iter()
                        .map(|handler| {
                            let spawned = thread::Builder::new()
                                .name(format!("log-{}", handler.name()))
                                .spawn_scoped(scope, move || f(handler.as_ref()));
                            (handler, spawned)
                        })
                        .collect();

                    for (idx, (handler, spawned)) in pending.into_iter().enumerate() {
                        let outcome: Outcome = match spawned {
                            Ok(join) => join.join(),
                            // Could not get a thread: deliver inline instead of dropping
                            Err(_) => guarded(|| f(handler.as_ref())),
                        };
                        absorb(idx, handler.as_ref(), operation, outcome);
                    }
                });
            }
        }
    }
}

impl Handler for MultiHandler {
    /// Overwrites every child's threshold
    fn set_level(&self, level: Level) {
        for handler in &self.handlers {
            handler.set_level(level);
        }
    }

    /// The most verbose child threshold
    fn level(&self) -> Level {
        self.handlers
            .iter()
            .map(|h| h.level())
            .max()
            .unwrap_or_default()
    }

    /// Overwrites every child's formatter
    fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        for handler in &self.handlers {
            handler.set_formatter(Arc::clone(&formatter));
        }
    }

    fn handle(&self, record: &Record) -> Result<()> {
        self.fan_out("handle", |handler| handler.handle(record));
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.fan_out("close", |handler| handler.close());
        Ok(())
    }

    fn name(&self) -> &str {
        "multi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{formatter_fn, LoggerError};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every delivery; optionally fails or panics
    struct Spy {
        base: crate::core::HandlerBase,
        seen: Mutex<Vec<String>>,
        closed: AtomicUsize,
        mode: Mode,
    }

    #[derive(Clone, Copy)]
    enum Mode {
        Ok,
        Fail,
        Panic,
    }

    impl Spy {
        fn new(mode: Mode) -> Arc<Self> {
            Arc::new(Self {
                base: crate::core::HandlerBase::new(),
                seen: Mutex::new(Vec::new()),
                closed: AtomicUsize::new(0),
                mode,
            })
        }
    }

    impl Handler for Spy {
        fn set_level(&self, level: Level) {
            self.base.set_level(level);
        }
        fn level(&self) -> Level {
            self.base.level()
        }
        fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
            self.base.set_formatter(formatter);
        }
        fn handle(&self, record: &Record) -> Result<()> {
            match self.mode {
                Mode::Panic => panic!("spy exploded"),
                Mode::Fail => Err(LoggerError::transport("writing", "spy failure")),
                Mode::Ok => {
                    if let Some(msg) = self.base.filter_and_format(record) {
                        self.seen.lock().push(msg);
                    }
                    Ok(())
                }
            }
        }
        fn close(&self) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            if let Mode::Panic = self.mode {
                panic!("spy exploded on close");
            }
            Ok(())
        }
        fn name(&self) -> &str {
            "spy"
        }
    }

    fn as_children(spies: &[Arc<Spy>]) -> Vec<Arc<dyn Handler>> {
        spies
            .iter()
            .map(|s| Arc::clone(s) as Arc<dyn Handler>)
            .collect()
    }

    #[test]
    fn test_every_child_receives_the_record() {
        let spies = vec![Spy::new(Mode::Ok), Spy::new(Mode::Ok), Spy::new(Mode::Ok)];
        let multi = MultiHandler::new(as_children(&spies));

        multi
            .handle(&Record::new("svc", Level::Info, "hello\n", vec![]))
            .unwrap();

        for spy in &spies {
            assert_eq!(spy.seen.lock().len(), 1);
        }
    }

    #[test]
    fn test_failing_and_panicking_children_are_isolated() {
        let spies = vec![
            Spy::new(Mode::Ok),
            Spy::new(Mode::Panic),
            Spy::new(Mode::Fail),
            Spy::new(Mode::Ok),
        ];
        let multi = MultiHandler::new(as_children(&spies));

        assert!(multi
            .handle(&Record::new("svc", Level::Error, "boom\n", vec![]))
            .is_ok());

        assert_eq!(spies[0].seen.lock().len(), 1);
        assert_eq!(spies[3].seen.lock().len(), 1);
    }

    #[test]
    fn test_single_panicking_child_is_contained() {
        let spy = Spy::new(Mode::Panic);
        let multi = MultiHandler::new(as_children(&[spy]));
        assert!(multi
            .handle(&Record::new("svc", Level::Error, "x", vec![]))
            .is_ok());
    }

    #[test]
    fn test_set_level_cascades_and_overwrites() {
        let spies = vec![Spy::new(Mode::Ok), Spy::new(Mode::Ok), Spy::new(Mode::Ok)];
        spies[0].set_level(Level::Debug);
        spies[1].set_level(Level::Critical);
        let multi = MultiHandler::new(as_children(&spies));

        multi.set_level(Level::Warning);

        for spy in &spies {
            assert_eq!(spy.level(), Level::Warning);
        }
        assert_eq!(multi.level(), Level::Warning);
    }

    #[test]
    fn test_set_formatter_cascades() {
        let spies = vec![Spy::new(Mode::Ok), Spy::new(Mode::Ok)];
        let multi = MultiHandler::new(as_children(&spies));
        multi.set_formatter(Arc::new(formatter_fn(|r: &Record| format!("<{}>", r.message()))));

        multi
            .handle(&Record::new("svc", Level::Info, "m", vec![]))
            .unwrap();

        for spy in &spies {
            assert_eq!(spy.seen.lock().as_slice(), ["<m>"]);
        }
    }

    #[test]
    fn test_per_child_thresholds() {
        let spies = vec![Spy::new(Mode::Ok), Spy::new(Mode::Ok)];
        spies[0].set_level(Level::Info);
        spies[1].set_level(Level::Warning);
        let multi = MultiHandler::new(as_children(&spies));

        multi
            .handle(&Record::new("svc", Level::Notice, "n", vec![]))
            .unwrap();
        multi
            .handle(&Record::new("svc", Level::Error, "e", vec![]))
            .unwrap();

        assert_eq!(spies[0].seen.lock().len(), 2);
        assert_eq!(spies[1].seen.lock().len(), 1);
        assert_eq!(multi.level(), Level::Info);
    }

    #[test]
    fn test_close_reaches_every_child() {
        let spies = vec![Spy::new(Mode::Ok), Spy::new(Mode::Panic), Spy::new(Mode::Ok)];
        let multi = MultiHandler::new(as_children(&spies));

        assert!(multi.close().is_ok());

        for spy in &spies {
            assert_eq!(spy.closed.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_empty_multi_handler() {
        let multi = MultiHandler::new(Vec::new());
        assert!(multi
            .handle(&Record::new("svc", Level::Info, "x", vec![]))
            .is_ok());
        assert!(multi.close().is_ok());
        assert_eq!(multi.level(), Level::Info);
    }
}
