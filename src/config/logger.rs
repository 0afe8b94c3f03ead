use super::Config;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

/// A logger writing to stderr, filtered by level.
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs a [`Logger`] at the configured level as the global logger.
///
/// Fails if a logger was already installed.
pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(config.log_level())))?;
    log::set_max_level(config.log_level());
    Ok(())
}
