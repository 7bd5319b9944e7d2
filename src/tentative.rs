//! Two-phase updates: a tentative local value awaiting confirmation.
//!
//! Services apply a change to a copy, publish the copy as tentative, and
//! then either confirm it once the store accepts the write or roll back to
//! the last confirmed value.

/// A change that has been applied locally but not yet persisted.
///
/// # Examples
///
/// ```
/// use staffnet::tentative::TentativeUpdate;
///
/// let update = TentativeUpdate::replacing(1, 2);
/// assert_eq!(*update.tentative(), 2);
/// assert_eq!(update.roll_back(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a tentative update must be confirmed or rolled back"]
pub struct TentativeUpdate<T> {
    confirmed: Option<T>,
    tentative: T,
}

impl<T> TentativeUpdate<T> {
    /// Creates an update replacing an existing confirmed value.
    pub const fn replacing(confirmed: T, tentative: T) -> Self {
        Self {
            confirmed: Some(confirmed),
            tentative,
        }
    }

    /// Creates an update inserting a value that has no confirmed predecessor.
    pub const fn inserting(tentative: T) -> Self {
        Self {
            confirmed: None,
            tentative,
        }
    }

    /// Returns the value to show while the write is in flight.
    #[must_use]
    pub const fn tentative(&self) -> &T {
        &self.tentative
    }

    /// Returns the last confirmed value, if any.
    #[must_use]
    pub const fn confirmed(&self) -> Option<&T> {
        self.confirmed.as_ref()
    }

    /// Accepts the tentative value.
    #[must_use]
    pub fn confirm(self) -> T {
        self.tentative
    }

    /// Discards the tentative value and returns the last confirmed one.
    #[must_use]
    pub fn roll_back(self) -> Option<T> {
        self.confirmed
    }
}
