// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversion outcomes
// ============================================================================

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a numeral converter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Input converted to a value
    Converted {
        input: String,
        value: i64,
        timestamp: DateTime<Utc>,
    },

    /// Input rejected with reason
    Rejected {
        input: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    /// The (normalized) input the event refers to
    pub fn input(&self) -> &str {
        match self {
            ConversionEvent::Converted { input, .. } | ConversionEvent::Rejected { input, .. } => {
                input
            },
        }
    }
}

/// Event handler trait for processing conversion events
/// Implementations can handle logging, auditing, input-field feedback, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Converted { input, value, .. } => {
                tracing::debug!(input = %input, value, "numeral converted");
            },
            ConversionEvent::Rejected { input, reason, .. } => {
                tracing::warn!(input = %input, reason = %reason, "numeral rejected");
            },
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ConversionEvent>>,
}

impl RecordingEventHandler {
    /// Create a handler with no recorded events
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<ConversionEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().push(event);
    }
}
