//! Multi-sink logging example
//!
//! Demonstrates a console sink and an audit sink with different thresholds
//! behind one logger, plus the system log where available.
//!
//! Run with: cargo run --example multi_handler

use rust_leveled_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Multi Handler Example ===\n");

    let console = Arc::new(WriterHandler::stdout());
    console.set_level(Level::Info);

    // Audit trail keeps only WARNING and above, one JSON object per line
    let audit = Arc::new(WriterHandler::new(Vec::new()));
    audit.set_level(Level::Warning);
    audit.set_formatter(Arc::new(JsonFormatter));

    let mut sinks: Vec<Arc<dyn Handler>> = vec![console, audit.clone()];

    add_system_log(&mut sinks);

    let logger = Logger::builder("orders")
        .level(Level::Debug)
        .handler(Arc::new(MultiHandler::new(sinks)))
        .build();

    println!("1. Console receives INFO and above:");
    logger.debug("cart contents %v", &[Arg::debug(&["apple", "pear"])]);
    logger.info("order %d accepted", &[1001.into()]);
    logger.warning("order %d took %dms", &[1001.into(), 1830.into()]);
    logger.error("payment gateway returned %d", &[502.into()]);

    println!("\n2. Audit sink captured:");
    audit.with_writer(|buf| print!("{}", String::from_utf8_lossy(buf)));

    logger.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

#[cfg(all(unix, feature = "syslog"))]
fn add_system_log(sinks: &mut Vec<Arc<dyn Handler>>) {
    match SyslogHandler::new("multi_handler") {
        Ok(syslog) => {
            syslog.set_level(Level::Error);
            sinks.push(Arc::new(syslog));
        }
        Err(e) => eprintln!("system log unavailable: {}", e),
    }
}

#[cfg(not(all(unix, feature = "syslog")))]
fn add_system_log(_: &mut Vec<Arc<dyn Handler>>) {}
