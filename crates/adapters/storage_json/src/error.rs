//! Storage-specific error type wrapping IO and JSON errors.

use reservas_domain::error::ReservasError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The document could not be read, written or replaced.
    #[error("reservation document io error")]
    Io(#[from] std::io::Error),

    /// The document content is not a reservation array.
    #[error("reservation document is not a valid reservation array")]
    Decode(#[source] serde_json::Error),

    /// The collection could not be encoded.
    #[error("failed to encode reservations")]
    Encode(#[source] serde_json::Error),
}

impl From<StorageError> for ReservasError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Decode(_) => Self::CorruptData(Box::new(err)),
            StorageError::Io(_) | StorageError::Encode(_) => {
                Self::StorageUnavailable(Box::new(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_io_failure_to_storage_unavailable() {
        let err = StorageError::Io(std::io::Error::other("disk gone"));
        assert!(matches!(
            ReservasError::from(err),
            ReservasError::StorageUnavailable(_)
        ));
    }

    #[test]
    fn should_map_decode_failure_to_corrupt_data() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(
            ReservasError::from(StorageError::Decode(json_err)),
            ReservasError::CorruptData(_)
        ));
    }
}
