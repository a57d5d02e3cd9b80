//! Basic logger usage example
//!
//! Demonstrates named loggers, level thresholds, printf-style arguments and
//! the process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // New loggers write colorized lines to the shared stderr handler
    let logger = Logger::new("basic");

    println!("1. Logging at different levels (threshold INFO):");
    logger.critical("This is a critical message", &[]);
    logger.error("This is an error message", &[]);
    logger.warning("This is a warning message", &[]);
    logger.notice("This is a notice message", &[]);
    logger.info("This is an info message", &[]);
    logger.debug("This is a debug message (hidden)", &[]);

    println!("\n2. Arguments and macros:");
    logger.info("listening on %s:%d", &["0.0.0.0".into(), 8080.into()]);
    info!(logger, "cache hit ratio %.1f%%", 97.25);
    warning!(logger, "retry %d of %d", 2, 5);

    println!("\n3. Raising the threshold:");
    logger.set_level(Level::Error);
    logger.warning("Warning message (hidden)", &[]);
    logger.error("Error message (visible)", &[]);

    println!("\n4. Default logger:");
    rust_leveled_logger::info("logged through the default logger as %q", &[
        rust_leveled_logger::process_name().into(),
    ]);

    println!("\n5. Configuration from JSON:");
    let config: LoggerConfig =
        serde_json::from_str(r#"{ "name": "configured", "level": "DEBUG", "target": "stdout" }"#)
            .map_err(|e| LoggerError::setup("config", e.to_string()))?;
    let configured = config.build();
    configured.debug("debug is visible on stdout", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
