//! # hv-core
//!
//! Shared foundation for Haven: diagnostic records and sinks, plus the
//! redirect-response value type carried through the event layer.
//!
//! Crates higher in the stack depend on this one for the cross-cutting
//! pieces that have no better home:
//!
//! - [`Diagnostic`] / [`DiagnosticSink`] - structured side-channel records
//!   for conditions that are observable but must not abort the caller
//! - [`RedirectResponse`] - opaque response payload handed back to clients

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod diagnostic;
pub mod response;

pub use diagnostic::{Diagnostic, DiagnosticSink, InMemorySink, Severity, TracingSink};
pub use response::RedirectResponse;
