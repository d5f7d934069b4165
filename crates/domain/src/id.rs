//! Reservation identifier.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Reservation`](crate::reservation::Reservation).
///
/// Freshly generated identifiers are UUID v4 strings. Identifiers read back
/// from storage are kept verbatim, so documents written by other tools (with
/// ids such as `"1"`) stay addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl Default for ReservationId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl ReservationId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ReservationId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for ReservationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReservationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
