//! Redirect response value type.

use serde::{Deserialize, Serialize};

/// HTTP status for "See Other", the default redirect kind.
const SEE_OTHER: u16 = 303;

/// A fully-formed redirect response.
///
/// This is an opaque payload from the point of view of the event layer:
/// a listener may supply one to short-circuit normal link resolution, and
/// the dispatcher hands it back to the serving path unmodified. Nothing
/// in this workspace inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectResponse {
    /// Target location of the redirect.
    pub location: String,

    /// HTTP status code.
    pub status: u16,
}

impl RedirectResponse {
    /// Creates a redirect to the given location with status 303.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            status: SEE_OTHER,
        }
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
