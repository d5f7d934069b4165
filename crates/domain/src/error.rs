//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ReservasError`]
//! via `From`, so the application core only ever sees these variants.

use chrono::NaiveDate;

use crate::id::ReservationId;

/// Boxed source error carried by the storage variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for every reservation operation.
#[derive(Debug, thiserror::Error)]
pub enum ReservasError {
    /// A value supplied at the edge could not be interpreted.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record matched, or a query that treats emptiness as a miss came
    /// back empty.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persisted document could not be read or written.
    #[error("reservation storage unavailable")]
    StorageUnavailable(#[source] BoxError),

    /// The persisted document is not a well-formed reservation collection.
    #[error("reservation storage holds corrupt data")]
    CorruptData(#[source] BoxError),
}

/// Invalid input detected while parsing request values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid guest count `{0}`, expected a non-negative integer")]
    InvalidGuestCount(String),

    #[error("missing parameter `{0}`")]
    MissingParameter(&'static str),

    /// The request body, path or query could not be decoded.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

/// What could not be found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("reservation {0} not found")]
    Reservation(ReservationId),

    #[error("reservations for {0} guests not found")]
    GuestCount(u32),

    #[error("reservations between {start} and {end} not found")]
    DateRange { start: NaiveDate, end: NaiveDate },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_not_found_into_top_level_error() {
        let err: ReservasError = NotFoundError::Reservation(ReservationId::from("42")).into();
        assert!(matches!(err, ReservasError::NotFound(_)));
        assert_eq!(err.to_string(), "reservation 42 not found");
    }

    #[test]
    fn should_describe_date_range_miss() {
        let err = NotFoundError::DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "reservations between 2024-01-02 and 2024-01-05 not found"
        );
    }

    #[test]
    fn should_phrase_every_miss_as_not_found() {
        let misses = [
            NotFoundError::Reservation(ReservationId::from("1")),
            NotFoundError::GuestCount(4),
            NotFoundError::DateRange {
                start: NaiveDate::MIN,
                end: NaiveDate::MAX,
            },
        ];
        for miss in misses {
            assert!(miss.to_string().ends_with(" not found"), "{miss}");
        }
        assert_eq!(
            NotFoundError::GuestCount(4).to_string(),
            "reservations for 4 guests not found"
        );
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReservasError::StorageUnavailable(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
