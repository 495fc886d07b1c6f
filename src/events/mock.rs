use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::{EventSink, Severity};

/// Event captured by [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Sink that keeps every event in memory for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| e.severity == severity)
            .count()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.severity == severity)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.events.lock().push(RecordedEvent {
            severity,
            message: message.to_string(),
            at: Utc::now(),
        });
    }
}
