//! Storage port: whole-collection persistence for reservations.

use std::future::Future;

use reservas_domain::error::ReservasError;
use reservas_domain::reservation::Reservation;

/// Access to the persisted reservation collection.
///
/// The collection is always read and written in full. Implementations must
/// keep the order of records exactly as given to [`ReservationStore::save_all`].
pub trait ReservationStore {
    /// Read every reservation, in stored order.
    ///
    /// Fails with [`ReservasError::StorageUnavailable`] when the medium cannot
    /// be read and [`ReservasError::CorruptData`] when its content is not a
    /// well-formed collection.
    fn load_all(&self) -> impl Future<Output = Result<Vec<Reservation>, ReservasError>> + Send;

    /// Replace the persisted collection with `records`.
    ///
    /// Fails with [`ReservasError::StorageUnavailable`] when the write fails.
    fn save_all(
        &self,
        records: &[Reservation],
    ) -> impl Future<Output = Result<(), ReservasError>> + Send;
}
