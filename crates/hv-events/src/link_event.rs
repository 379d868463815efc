//! The internal-link interception event.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use hv_core::{Diagnostic, DiagnosticSink, RedirectResponse, Severity};

use crate::slot::OverrideSlot;

/// Event dispatched while resolving an internal link (`/f/{fileId}`).
///
/// The event is a single-use carrier handed sequentially to each
/// registered listener. A listener may substitute the file id that the
/// normal redirect will use, or supply a complete [`RedirectResponse`]
/// that short-circuits resolution entirely. Each override is
/// single-assignment: the first value wins, and any later attempt is
/// recorded through the diagnostic sink at notice severity and otherwise
/// ignored. Conflicts are expected between mutually-unaware listeners and
/// must never abort the chain.
///
/// The original file id is fixed at construction and is always available
/// unchanged through [`file_id`](Self::file_id).
pub struct InternalLinkEvent {
    file_id: String,
    new_file_id: OverrideSlot<String>,
    response: OverrideSlot<RedirectResponse>,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for InternalLinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalLinkEvent")
            .field("file_id", &self.file_id)
            .field("new_file_id", &self.new_file_id)
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}

impl InternalLinkEvent {
    /// Creates an event for the given file id.
    ///
    /// The sink receives a notice for every conflicting override attempt.
    #[must_use]
    pub fn new(file_id: impl Into<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            file_id: file_id.into(),
            new_file_id: OverrideSlot::new(),
            response: OverrideSlot::new(),
            sink,
        }
    }

    /// Returns the original file id, untouched by any override.
    #[must_use]
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// Proposes a replacement file id for the redirect.
    ///
    /// Only the first proposal takes effect. A later call records a
    /// notice diagnostic with the caller's source location and leaves
    /// the stored id unchanged.
    #[track_caller]
    pub fn set_new_file_id(&mut self, file_id: impl Into<String>) {
        let caller = Location::caller();
        let proposed = file_id.into();
        if let Err(rejected) = self.new_file_id.propose(proposed) {
            let kept = self.new_file_id.get().cloned().unwrap_or_default();
            self.sink.record(
                Diagnostic::builder(Severity::Notice, "a new file id was already set")
                    .context("original_file_id", self.file_id.clone())
                    .context("kept_file_id", kept)
                    .context("rejected_file_id", rejected)
                    .context("caller", caller.to_string())
                    .build(),
            );
        }
    }

    /// Returns the replacement file id, if a listener supplied one.
    #[must_use]
    pub fn new_file_id(&self) -> Option<&str> {
        self.new_file_id.get().map(String::as_str)
    }

    /// Proposes a complete redirect response, bypassing normal resolution.
    ///
    /// Same single-assignment policy as [`set_new_file_id`](Self::set_new_file_id);
    /// the response slot is independent of the file-id slot.
    #[track_caller]
    pub fn set_response(&mut self, response: RedirectResponse) {
        let caller = Location::caller();
        if let Err(rejected) = self.response.propose(response) {
            self.sink.record(
                Diagnostic::builder(Severity::Notice, "a redirect response was already set")
                    .context("original_file_id", self.file_id.clone())
                    .context("rejected_location", rejected.location)
                    .context("caller", caller.to_string())
                    .build(),
            );
        }
    }

    /// Returns the override response, if a listener supplied one.
    #[must_use]
    pub fn response(&self) -> Option<&RedirectResponse> {
        self.response.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_core::InMemorySink;

    fn event_with_sink(file_id: &str) -> (InternalLinkEvent, Arc<InMemorySink>) {
        let sink = Arc::new(InMemorySink::new());
        let event = InternalLinkEvent::new(file_id, Arc::clone(&sink) as Arc<dyn DiagnosticSink>);
        (event, sink)
    }

    #[test]
    fn fresh_event_has_no_overrides() {
        let (event, sink) = event_with_sink("42");
        assert_eq!(event.file_id(), "42");
        assert!(event.new_file_id().is_none());
        assert!(event.response().is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn first_file_id_override_wins() {
        let (mut event, sink) = event_with_sink("42");

        event.set_new_file_id("99");
        assert_eq!(event.new_file_id(), Some("99"));

        event.set_new_file_id("100");
        assert_eq!(event.new_file_id(), Some("99"));

        // Exactly one notice for the rejected attempt.
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Notice);
        assert!(records[0]
            .context
            .iter()
            .any(|(k, v)| k == "rejected_file_id" && v == "100"));
        assert!(records[0]
            .context
            .iter()
            .any(|(k, v)| k == "caller" && v.contains("link_event.rs")));
    }

    #[test]
    fn first_response_override_wins() {
        let (mut event, sink) = event_with_sink("42");

        event.set_response(RedirectResponse::new("/first"));
        event.set_response(RedirectResponse::new("/second"));

        assert_eq!(event.response().unwrap().location, "/first");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn override_fields_are_independent() {
        let (mut event, sink) = event_with_sink("42");

        event.set_new_file_id("99");
        assert!(event.response().is_none());

        event.set_response(RedirectResponse::new("/elsewhere"));
        assert_eq!(event.new_file_id(), Some("99"));
        assert!(event.response().is_some());
        assert!(sink.is_empty());
    }

    #[test]
    fn original_file_id_is_immutable() {
        let (mut event, _sink) = event_with_sink("42");

        event.set_new_file_id("99");
        event.set_new_file_id("100");
        event.set_response(RedirectResponse::new("/elsewhere"));

        assert_eq!(event.file_id(), "42");
    }
}
