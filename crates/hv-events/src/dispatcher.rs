//! Ordered, synchronous listener dispatch.

use crate::link_event::InternalLinkEvent;

/// A listener for internal-link events.
///
/// Listeners are invoked one at a time, in registration order, within the
/// request that triggered resolution. A listener must not assume it is
/// first: its overrides may be discarded in favor of an earlier one.
pub trait LinkEventListener: Send + Sync {
    /// Handles the event.
    fn handle(&self, event: &mut InternalLinkEvent);
}

impl<F> LinkEventListener for F
where
    F: Fn(&mut InternalLinkEvent) + Send + Sync,
{
    fn handle(&self, event: &mut InternalLinkEvent) {
        self(event);
    }
}

/// Dispatches internal-link events to registered listeners.
///
/// Dispatch is synchronous and always runs the whole chain; there is no
/// cancellation. The caller retains the event and reads its final state
/// after [`dispatch`](Self::dispatch) returns.
#[derive(Default)]
pub struct LinkEventDispatcher {
    listeners: Vec<Box<dyn LinkEventListener>>,
}

impl LinkEventDispatcher {
    /// Creates a dispatcher with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener at the end of the chain.
    pub fn register(&mut self, listener: impl LinkEventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Runs the event through every listener in registration order.
    pub fn dispatch(&self, event: &mut InternalLinkEvent) {
        tracing::debug!(
            file_id = event.file_id(),
            listeners = self.listeners.len(),
            "dispatching internal link event"
        );
        for listener in &self.listeners {
            listener.handle(event);
        }
    }
}
