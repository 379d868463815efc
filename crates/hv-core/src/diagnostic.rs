//! Diagnostic records and sinks.
//!
//! A diagnostic is a structured, non-fatal observation: something a
//! component wants on record without raising an error to its caller.
//! The canonical producer is the event layer, which logs conflicting
//! override attempts at [`Severity::Notice`] and carries on.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Verbose debugging detail.
    Debug,
    /// Routine informational record.
    Info,
    /// Normal but significant condition.
    Notice,
    /// Something unexpected that was recovered from.
    Warning,
    /// A failure that was observed but not propagated.
    Error,
}

/// A structured diagnostic record.
///
/// Records are immutable once built; use [`Diagnostic::builder`] to
/// assemble one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique record identifier.
    pub id: Uuid,

    /// Time the record was created.
    pub timestamp: DateTime<Utc>,

    /// Severity of the condition.
    pub severity: Severity,

    /// Human-readable description.
    pub message: String,

    /// Additional context as key-value pairs.
    pub context: Vec<(String, String)>,
}

impl Diagnostic {
    /// Creates a new diagnostic builder.
    #[must_use]
    pub fn builder(severity: Severity, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(severity, message)
    }
}

/// Builder for diagnostic records.
pub struct DiagnosticBuilder {
    severity: Severity,
    message: String,
    context: Vec<(String, String)>,
}

impl DiagnosticBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Adds a context key-value pair.
    #[must_use]
    pub fn context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Builds the diagnostic record.
    #[must_use]
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            severity: self.severity,
            message: self.message,
            context: self.context,
        }
    }
}

/// Sink for diagnostic records.
///
/// Implementations can write to various destinations:
/// - The tracing framework (production)
/// - An in-memory buffer (tests, assertions on emitted records)
pub trait DiagnosticSink: Send + Sync {
    /// Records a diagnostic.
    fn record(&self, diagnostic: Diagnostic);
}

/// In-memory diagnostic sink for testing.
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: RwLock<Vec<Diagnostic>>,
}

impl InMemorySink {
    /// Creates a new in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded diagnostics.
    #[must_use]
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.read().clone()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns whether the sink is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Clears all recorded diagnostics.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl DiagnosticSink for InMemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        self.records.write().push(diagnostic);
    }
}

/// Diagnostic sink that writes to the tracing framework.
///
/// Severity maps onto the corresponding tracing level; context pairs are
/// flattened into a single structured field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Debug => tracing::debug!(
                diagnostic_id = %diagnostic.id,
                context = ?diagnostic.context,
                "{}",
                diagnostic.message
            ),
            Severity::Info | Severity::Notice => tracing::info!(
                diagnostic_id = %diagnostic.id,
                severity = ?diagnostic.severity,
                context = ?diagnostic.context,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                diagnostic_id = %diagnostic.id,
                context = ?diagnostic.context,
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                diagnostic_id = %diagnostic.id,
                context = ?diagnostic.context,
                "{}",
                diagnostic.message
            ),
        }
    }
}
