//! Logging macros for ergonomic argument passing.
//!
//! These macros convert each trailing argument into an [`Arg`](crate::Arg)
//! so call sites read like `printf`.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, warning};
//!
//! let logger = Logger::new("svc");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With arguments
//! let port = 8080;
//! info!(logger, "Server listening on port %d", port);
//!
//! // Mixed argument types
//! warning!(logger, "User %s retried %d times (%.1f%%)", "bob", 3, 37.5);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new("svc");
/// use rust_leveled_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a critical-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new("svc");
/// use rust_leveled_logger::critical;
/// critical!(logger, "Database unreachable after %d attempts", 5);
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Critical, $template $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new("svc");
/// use rust_leveled_logger::error;
/// error!(logger, "Failed to connect to %s", "db:5432");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $template $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new("svc");
/// use rust_leveled_logger::warning;
/// warning!(logger, "Retry attempt %d of %d", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $template $(, $arg)*)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Notice, $template $(, $arg)*)
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new("svc");
/// use rust_leveled_logger::info;
/// info!(logger, "Processing %d items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $template $(, $arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $template $(, $arg)*)
    };
}

/// Log at critical level, close the handler and exit with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log at critical level, close the handler and panic with the message.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.panic($template, &[$($crate::Arg::from($arg)),*])
    };
}
