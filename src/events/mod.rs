//! Resolution event stream.
//!
//! The engine reports progress through an [`EventSink`]. Events are for
//! observability only; nothing in the engine reads them back. Resolution
//! behaves the same with [`NoopSink`], [`TracingSink`] or a caller's own sink.

#[cfg(any(test, feature = "mock"))]
mod mock;


#[cfg(any(test, feature = "mock"))]
pub use mock::{RecordedEvent, RecordingSink};

use serde::{Deserialize, Serialize};

/// Severity of a resolution event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A stage completed (match accepted, description built, index created).
    Success,
    /// Resolution fell back or an input was unusable.
    Warning,
    /// Informational, no outcome attached.
    None,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::None => write!(f, "none"),
        }
    }
}

/// Fire-and-forget receiver of resolution events.
pub trait EventSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _severity: Severity, _message: &str) {}
}

/// Forwards events to `tracing` (success → info, warning → warn, none → debug).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(target: "resolver::events", "{message}"),
            Severity::Warning => tracing::warn!(target: "resolver::events", "{message}"),
            Severity::None => tracing::debug!(target: "resolver::events", "{message}"),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message)
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message)
    }
}
