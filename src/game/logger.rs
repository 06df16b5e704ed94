//! Centralized logger for game events
//!
//! Verbosity-gated output with an optional in-memory capture mode so tests
//! can assert on what the engine reported without scraping stdout.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns, phases, and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - all actions and state changes
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    /// Log message
    pub message: String,
}

/// Centralized logger with verbosity filtering and optional capture
#[derive(Debug, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        GameLogger::default()
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            ..GameLogger::default()
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Log at a specific level; filtered by current verbosity.
    pub fn log(&self, level: VerbosityLevel, message: &str) {
        if level > self.verbosity {
            return;
        }
        match self.output_mode {
            OutputMode::Stdout => println!("{message}"),
            OutputMode::Memory => self.capture(level, message),
            OutputMode::Both => {
                println!("{message}");
                self.capture(level, message);
            }
        }
    }

    /// Log a message at Minimal level (game outcomes)
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message);
    }

    /// Log a message at Normal level (turns and key actions)
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message);
    }

    /// Log a message at Verbose level (all state changes)
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message);
    }

    fn capture(&self, level: VerbosityLevel, message: &str) {
        self.log_buffer.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }

    /// Read captured entries (Memory or Both mode).
    pub fn entries(&self) -> Ref<'_, Vec<LogEntry>> {
        self.log_buffer.borrow()
    }

    pub fn clear(&self) {
        self.log_buffer.borrow_mut().clear();
    }
}

impl Clone for GameLogger {
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(self.log_buffer.borrow().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filtering() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Minimal);
        logger.set_output_mode(OutputMode::Memory);

        logger.minimal("game over");
        logger.normal("turn 3");
        logger.verbose("drew a card");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "game over");
    }

    #[test]
    fn test_memory_capture() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Verbose);
        logger.set_output_mode(OutputMode::Memory);

        logger.normal("a");
        logger.verbose("b");
        assert_eq!(logger.entries().len(), 2);

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(VerbosityLevel::Silent < VerbosityLevel::Minimal);
        assert!(VerbosityLevel::Normal < VerbosityLevel::Verbose);
    }
}
