use bank::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Warnings and errors by default; `RUST_LOG` overrides for debugging.
pub fn configure_logging() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
