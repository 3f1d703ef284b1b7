use ppd::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs to stderr, warnings and up; overridable through the RUST_LOG env var
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
