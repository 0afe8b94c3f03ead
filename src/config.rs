use log::LevelFilter;

pub mod logger;

pub use logger::{init_logger, Logger};

/// Config controls the log level and whether slot metrics are recorded. It is passed in when
/// structured storage is created.
#[derive(Debug, Clone)]
pub struct Config {
    /// The log level for the process.
    log_level: LevelFilter,
    /// Whether structured storage records slot metrics.
    slot_metrics: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    // Setters
    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_slot_metrics(mut self, slot_metrics: bool) -> Self {
        self.slot_metrics = slot_metrics;
        self
    }

    // Getters
    pub const fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub const fn slot_metrics(&self) -> bool {
        self.slot_metrics
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: LevelFilter::Info, slot_metrics: true }
    }
}
