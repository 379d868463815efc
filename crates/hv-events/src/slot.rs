//! Single-assignment override slot.

/// A write-once container for a listener-supplied override.
///
/// The slot starts [`Unset`](OverrideSlot::Unset) and accepts exactly one
/// value; every later proposal is handed back to the caller untouched.
/// There is no transition back to unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverrideSlot<T> {
    /// No override has been supplied.
    #[default]
    Unset,
    /// An override was supplied and is now fixed.
    Set(T),
}

impl<T> OverrideSlot<T> {
    /// Creates an unset slot.
    #[must_use]
    pub const fn new() -> Self {
        Self::Unset
    }

    /// Proposes a value for the slot.
    ///
    /// ## Errors
    ///
    /// If the slot is already set, the proposed value is returned to the
    /// caller unchanged and the stored value is kept.
    pub fn propose(&mut self, value: T) -> Result<(), T> {
        match self {
            Self::Unset => {
                *self = Self::Set(value);
                Ok(())
            }
            Self::Set(_) => Err(value),
        }
    }

    /// Returns the stored value, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Returns whether a value has been stored.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}
