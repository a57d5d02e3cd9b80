//! System log handler
//!
//! The connection is opened once, at construction, and released by `close`
//! (or on drop if `close` was never called). Records are routed to the
//! transport operation matching their level.

use crate::core::{Formatter, Handler, HandlerBase, Level, LoggerError, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Connection to a system log daemon, one send operation per severity
pub trait SyslogTransport: Send {
    fn crit(&mut self, message: &str) -> Result<()>;
    fn err(&mut self, message: &str) -> Result<()>;
    fn warning(&mut self, message: &str) -> Result<()>;
    fn notice(&mut self, message: &str) -> Result<()>;
    fn info(&mut self, message: &str) -> Result<()>;
    fn debug(&mut self, message: &str) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Local syslog over the platform socket, RFC 3164 framing, facility USER
#[cfg(all(unix, feature = "syslog"))]
pub struct UnixSyslog {
    logger: syslog::Logger<syslog::LoggerBackend, syslog::Formatter3164>,
}

#[cfg(all(unix, feature = "syslog"))]
impl UnixSyslog {
    pub fn connect(tag: &str) -> Result<Self> {
        let formatter = syslog::Formatter3164 {
            facility: syslog::Facility::LOG_USER,
            hostname: None,
            process: tag.to_string(),
            pid: std::process::id(),
        };
        let logger = syslog::unix(formatter)
            .map_err(|e| LoggerError::setup(format!("syslog '{}'", tag), e.to_string()))?;
        Ok(Self { logger })
    }
}

#[cfg(all(unix, feature = "syslog"))]
macro_rules! send_with {
    ($self:ident, $method:ident, $message:expr) => {
        $self
            .logger
            .$method($message)
            .map_err(|e| LoggerError::transport("sending to syslog", e.to_string()))
    };
}

#[cfg(all(unix, feature = "syslog"))]
impl SyslogTransport for UnixSyslog {
    fn crit(&mut self, message: &str) -> Result<()> {
        send_with!(self, crit, message)
    }

    fn err(&mut self, message: &str) -> Result<()> {
        send_with!(self, err, message)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        send_with!(self, warning, message)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        send_with!(self, notice, message)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        send_with!(self, info, message)
    }

    fn debug(&mut self, message: &str) -> Result<()> {
        send_with!(self, debug, message)
    }

    // the socket is released when the transport is dropped
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

pub struct SyslogHandler {
    base: HandlerBase,
    tag: String,
    transport: Mutex<Option<Box<dyn SyslogTransport>>>,
}

impl SyslogHandler {
    /// Connect to the local system log, tagging every message with `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Setup`] if the connection cannot be opened.
    #[cfg(all(unix, feature = "syslog"))]
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        let transport = UnixSyslog::connect(&tag)?;
        Ok(Self::with_transport(tag, transport))
    }

    /// Wrap an already-open transport
    pub fn with_transport(
        tag: impl Into<String>,
        transport: impl SyslogTransport + 'static,
    ) -> Self {
        Self {
            base: HandlerBase::new(),
            tag: tag.into(),
            transport: Mutex::new(Some(Box::new(transport))),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_closed(&self) -> bool {
        self.transport.lock().is_none()
    }
}

impl Handler for SyslogHandler {
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

        let mut guard = self.transport.lock();
        let Some(transport) = guard.as_mut() else {
            return Ok(());
        };

        match record.level() {
            Level::Critical => transport.crit(&message),
            Level::Error => transport.err(&message),
            Level::Warning => transport.warning(&message),
            Level::Notice => transport.notice(&message),
            Level::Info => transport.info(&message),
            Level::Debug => transport.debug(&message),
        }
    }

    fn close(&self) -> Result<()> {
        match self.transport.lock().take() {
            Some(mut transport) => transport.close(),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "syslog"
    }
}

impl Drop for SyslogHandler {
    fn drop(&mut self) {
        if let Some(mut transport) = self.transport.get_mut().take() {
            if let Err(e) = transport.close() {
                eprintln!("[LOGGER ERROR] Failed to close syslog '{}': {}", self.tag, e);
            }
        }
    }
}
