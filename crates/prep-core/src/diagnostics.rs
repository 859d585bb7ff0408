//! Diagnostic events emitted while reshaping inputs
//!
//! Extraction routines report what they discovered through a
//! [`DiagnosticSink`] instead of writing to the console, so callers choose
//! whether diagnostics are logged, collected, or dropped.

use crate::{Error, Result};
use std::sync::Mutex;

/// Diagnostic that can be emitted during extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Unique labels found in a grouping column, in discovery order
    LabelsDiscovered {
        column: String,
        labels: Vec<String>,
    },

    /// A table was split into two samples
    TwoGroupsSplit {
        column: String,
        first: String,
        second: String,
    },
}

/// Receiver for diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Handle a diagnostic
    fn emit(&self, diagnostic: &Diagnostic);

    /// Check if the sink wants diagnostics at all
    fn is_interested(&self) -> bool {
        true
    }
}

/// Sink that writes diagnostics through the `log` facade
pub struct LoggingSink {
    level: log::Level,
}

impl LoggingSink {
    /// Create a new logging sink
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl DiagnosticSink for LoggingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::LabelsDiscovered { column, labels } => {
                log::log!(self.level, "Labels in {column}: {labels:?}");
            }
            Diagnostic::TwoGroupsSplit { column, first, second } => {
                log::log!(self.level, "Split {column} into x={first:?}, y={second:?}");
            }
        }
    }

    fn is_interested(&self) -> bool {
        log::log_enabled!(self.level)
    }
}

/// Sink that does nothing
#[derive(Default, Clone)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}

    fn is_interested(&self) -> bool {
        false
    }
}

/// Sink that keeps every diagnostic it receives
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics received so far
    pub fn events(&self) -> Result<Vec<Diagnostic>> {
        let events = self
            .events
            .lock()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to lock diagnostics: {e}")))?;
        Ok(events.clone())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let Ok(mut events) = self.events.lock() else {
            log::error!("Failed to lock diagnostics");
            return;
        };
        events.push(diagnostic.clone());
    }
}
