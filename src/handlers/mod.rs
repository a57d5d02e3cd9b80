//! Handler implementations

pub mod multi;
pub mod syslog;
pub mod writer;

pub use multi::MultiHandler;
#[cfg(all(unix, feature = "syslog"))]
pub use syslog::UnixSyslog;
pub use syslog::{SyslogHandler, SyslogTransport};
pub use writer::WriterHandler;

// Re-export traits for convenience
pub use crate::core::{Handler, HandlerBase};
