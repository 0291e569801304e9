//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
    /// Echo records to stderr as well
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Debug,
            echo: false,
        })
    }

    /// Set the most verbose level that is recorded
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Echo records to stderr in addition to the file
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install this logger as the global `log` backend
    pub fn install(self) {
        let level = self.level;
        // Only fails if a logger is already set, which happens once per process at most
        if log::set_boxed_logger(Box::new(self)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
        log::set_max_level(level);
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        Logger::new(log_file)?.with_level(level).install();
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // stdout carries command output, so the console copy goes to stderr
            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_writes_formatted_records_to_file() {
        let path = std::env::temp_dir().join("geokit_logger_test.log");
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str).unwrap().with_level(LevelFilter::Info);

        Log::log(&logger, &Record::builder()
            .args(format_args!("decoded {} geometries", 3))
            .level(Level::Info)
            .build());
        Log::log(&logger, &Record::builder()
            .args(format_args!("hidden"))
            .level(Level::Debug)
            .build());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFO] decoded 3 geometries\n");
        let _ = std::fs::remove_file(&path);
    }
}
