//! # hv-events
//!
//! Interception point for internal file links (`/f/{fileId}`).
//!
//! Before the serving path resolves an internal link, it dispatches an
//! [`InternalLinkEvent`] through an ordered chain of listeners. A listener
//! may substitute the file id or supply a complete redirect response; the
//! first override of each kind wins, later attempts are recorded as
//! diagnostics and discarded so the chain never aborts.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod dispatcher;
pub mod link_event;
pub mod slot;

pub use dispatcher::{LinkEventDispatcher, LinkEventListener};
pub use link_event::InternalLinkEvent;
pub use slot::OverrideSlot;
