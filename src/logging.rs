//! Logging capability handed to the lexer and the parser.
//!
//! Nothing in the front end reaches for a process-wide logger. Each
//! [`Lexer`](crate::lexer::lexer::Lexer) and
//! [`Parser`](crate::parser::parser::Parser) receives a [`SharedLogger`] at
//! construction, so independent instances can run on separate threads
//! without sharing state. Logging never influences scan or parse results.
//!
//! - [`NoopLogger`] is the default and drops everything.
//! - [`FacadeLogger`] forwards to the `log` crate, so any `log`
//!   implementation installed by the embedding program receives the records.
//! - [`MemoryLogger`] keeps records in memory for tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

pub use log::Level;

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn flush(&self);

    /// Whether records at `level` are kept at all. Callers use this to skip
    /// formatting messages nobody will read.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

pub type SharedLogger = Arc<dyn Logger>;

/// Returns the default logger, which discards every record.
pub fn noop() -> SharedLogger {
    Arc::new(NoopLogger)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}

    fn flush(&self) {}

    fn enabled(&self, _level: Level) -> bool {
        false
    }
}

/// Forwards records to the `log` facade under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct FacadeLogger {
    target: &'static str,
}

impl FacadeLogger {
    pub fn new(target: &'static str) -> Self {
        FacadeLogger { target }
    }
}

impl Default for FacadeLogger {
    fn default() -> Self {
        FacadeLogger::new("esparse")
    }
}

impl Logger for FacadeLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{}", message);
    }

    fn flush(&self) {
        log::logger().flush();
    }

    fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: self.target, level)
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
    flushes: AtomicUsize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        MemoryLogger::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((level, message.to_string()));
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_levels() {
        let logger = MemoryLogger::new();
        logger.debug("scanning");
        logger.warn("odd input");
        logger.error("failed");
        logger.flush();

        assert_eq!(logger.messages(Level::Debug), vec!["scanning".to_string()]);
        assert_eq!(logger.messages(Level::Warn), vec!["odd input".to_string()]);
        assert_eq!(logger.records().len(), 3);
        assert_eq!(logger.flush_count(), 1);
    }

    #[test]
    fn test_noop_logger_is_disabled() {
        let logger = noop();
        assert!(!logger.enabled(Level::Error));
        logger.info("dropped");
        logger.flush();
    }
}
