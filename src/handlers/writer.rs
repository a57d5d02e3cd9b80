//! Stream handler implementation (console, files, in-memory buffers)

use crate::core::{Formatter, Handler, HandlerBase, Level, Record, Result};
use parking_lot::Mutex;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const COLOR_RESET: &str = "\x1b[0m";

/// Writes each rendered record to an [`io::Write`] stream.
///
/// The stream's lifecycle belongs to whoever created it: `close` does not
/// close it. Write failures are returned from `handle` and never retried.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let handler = Arc::new(WriterHandler::new(Vec::new()).with_colors(false));
/// let logger = Logger::new("svc");
/// logger.set_handler(handler);
/// logger.info("request id=%d", &[42.into()]);
/// ```
pub struct WriterHandler<W: Write + Send> {
    base: HandlerBase,
    writer: Mutex<W>,
    colorize: AtomicBool,
}

impl<W: Write + Send> WriterHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            base: HandlerBase::new(),
            writer: Mutex::new(writer),
            colorize: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_colors(self, colorize: bool) -> Self {
        self.set_colorize(colorize);
        self
    }

    pub fn set_colorize(&self, colorize: bool) {
        self.colorize.store(colorize, Ordering::Relaxed);
    }

    pub fn colorize(&self) -> bool {
        self.colorize.load(Ordering::Relaxed)
    }

    /// Run `f` against the underlying stream
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    fn highlight(level: Level, message: &str) -> String {
        format!(
            "\x1b[{}m{}{}",
            level.color_code().to_fg_str(),
            message,
            COLOR_RESET
        )
    }
}

impl WriterHandler<Stdout> {
    /// Colorized handler on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_colors(true)
    }
}

impl WriterHandler<Stderr> {
    /// Colorized handler on standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr()).with_colors(true)
    }
}

impl<W: Write + Send> Handler for WriterHandler<W> {
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
        let Some(message) = self.base.filter_and_format(record) else {
            return Ok(());
        };

        let output = if self.colorize() {
            Self::highlight(record.level(), &message)
        } else {
            message
        };

        let mut writer = self.writer.lock();
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(handler: &WriterHandler<Vec<u8>>) -> String {
        handler.with_writer(|buf| String::from_utf8_lossy(buf).into_owned())
    }

    #[test]
    fn test_writes_formatted_record() {
        let handler = WriterHandler::new(Vec::new());
        handler
            .handle(&Record::new("svc", Level::Info, "hello\n", vec![]))
            .unwrap();

        let out = output(&handler);
        assert!(out.ends_with(" [svc] INFO     hello\n"), "{:?}", out);
    }

    #[test]
    fn test_filtered_record_writes_nothing() {
        let handler = WriterHandler::new(Vec::new());
        handler
            .handle(&Record::new("svc", Level::Debug, "noise\n", vec![]))
            .unwrap();
        assert!(output(&handler).is_empty());
    }

    #[test]
    fn test_colorized_output_is_wrapped() {
        let handler = WriterHandler::new(Vec::new()).with_colors(true);
        handler
            .handle(&Record::new("svc", Level::Error, "bad\n", vec![]))
            .unwrap();

        let out = output(&handler);
        assert!(out.starts_with("\x1b[31m"), "{:?}", out);
        assert!(out.ends_with("bad\n\x1b[0m"), "{:?}", out);
    }

    #[test]
    fn test_each_level_uses_its_color() {
        let handler = WriterHandler::new(Vec::new()).with_colors(true);
        handler.set_level(Level::Debug);
        for level in Level::ALL {
            handler.with_writer(|buf| buf.clear());
            handler.handle(&Record::new("svc", level, "m\n", vec![])).unwrap();
            let expected = format!("\x1b[{}m", level.color_code().to_fg_str());
            assert!(output(&handler).starts_with(&expected));
        }
    }

    #[test]
    fn test_write_failure_is_returned() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let handler = WriterHandler::new(Broken);
        let result = handler.handle(&Record::new("svc", Level::Error, "x\n", vec![]));
        assert!(result.is_err());
        assert!(handler.close().is_ok());
    }

    #[test]
    fn test_standard_streams_colorize_by_default() {
        assert!(WriterHandler::stdout().colorize());
        assert!(WriterHandler::stderr().colorize());
        assert!(!WriterHandler::new(Vec::new()).colorize());
    }
}
